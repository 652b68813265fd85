//! Easing curves and interpolation helpers.
//!
//! Used by the keyframe camera animator to blend between poses. Input to
//! [`ease`] is clamped to `[0.0, 1.0]` so callers can pass raw ratios.

/// Cubic Hermite smoothstep, `x²·(3 - 2x)`.
///
/// `smoothstep(0) = 0`, `smoothstep(1) = 1`, `smoothstep(0.5) = 0.5`, and the
/// first derivative vanishes at both endpoints.
pub fn smoothstep(x: f32) -> f32 {
    x * x * (3.0 - 2.0 * x)
}

/// Smoothstep of a normalized time value, clamped to `[0, 1]` first.
pub fn ease(t: f32) -> f32 {
    smoothstep(t.clamp(0.0, 1.0))
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
