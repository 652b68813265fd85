//! Keyframe camera animator.
//!
//! A two-state machine (`Idle`/`Playing`) that walks a fixed, time-ordered
//! list of camera [`Keyframe`]s. While playing, every [`CameraAnimator::tick`]
//! advances the clock, finds the bracketing keyframe pair and writes the
//! eased blend of both poses into [`CameraState`].
//!
//! Once the clock passes the last keyframe the animator stops and rewinds
//! to zero. The camera keeps whatever pose was applied last; it is not
//! snapped onto the final keyframe.

use bevy_ecs::prelude::Resource;
use std::fmt;

use crate::easing::{ease, lerp_f32};
use crate::resources::camera3d::CameraState;

/// A camera pose anchored at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Seconds since the animation started.
    pub time: f32,
    /// Pitch in degrees.
    pub rotation_x: f32,
    /// Yaw in degrees.
    pub rotation_y: f32,
    /// Signed eye distance along Z.
    pub zoom: f32,
    /// Authored with the track but not applied to the camera.
    pub height: f32,
}

impl Keyframe {
    pub const fn new(time: f32, rotation_x: f32, rotation_y: f32, zoom: f32, height: f32) -> Self {
        Keyframe {
            time,
            rotation_x,
            rotation_y,
            zoom,
            height,
        }
    }
}

/// The orbit sequence played by the `A` key: a full turn around the board
/// with a few pitch and zoom changes on the way.
pub const DEFAULT_KEYFRAMES: [Keyframe; 5] = [
    Keyframe::new(0.0, 25.0, 0.0, -12.0, 0.0),
    Keyframe::new(3.0, 60.0, 90.0, -8.0, 2.0),
    Keyframe::new(6.0, 30.0, 180.0, -10.0, -1.0),
    Keyframe::new(9.0, 10.0, 270.0, -15.0, 1.0),
    Keyframe::new(12.0, 25.0, 360.0, -12.0, 0.0),
];

/// Rejected keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The first keyframe must sit at time zero.
    FirstKeyframeNotAtZero(f32),
    /// Keyframe `index` is not strictly later than the one before it.
    NonIncreasingTime { index: usize, time: f32 },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::FirstKeyframeNotAtZero(t) => {
                write!(f, "first keyframe must start at time 0, got {}", t)
            }
            AnimationError::NonIncreasingTime { index, time } => write!(
                f,
                "keyframe {} at time {} is not later than its predecessor",
                index, time
            ),
        }
    }
}

impl std::error::Error for AnimationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Playing,
}

/// Keyframe track plus its playback clock.
#[derive(Resource, Debug, Clone)]
pub struct CameraAnimator {
    keyframes: Vec<Keyframe>,
    state: AnimatorState,
    elapsed: f32,
}

impl Default for CameraAnimator {
    fn default() -> Self {
        CameraAnimator {
            keyframes: DEFAULT_KEYFRAMES.to_vec(),
            state: AnimatorState::Idle,
            elapsed: 0.0,
        }
    }
}

impl CameraAnimator {
    /// Build an animator over `keyframes`.
    ///
    /// Times must start at zero and increase strictly. An empty or
    /// single-keyframe track is accepted, but such an animator never plays.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, AnimationError> {
        if let Some(first) = keyframes.first() {
            if first.time != 0.0 {
                return Err(AnimationError::FirstKeyframeNotAtZero(first.time));
            }
        }
        for (index, pair) in keyframes.windows(2).enumerate() {
            if !(pair[1].time > pair[0].time) {
                return Err(AnimationError::NonIncreasingTime {
                    index: index + 1,
                    time: pair[1].time,
                });
            }
        }
        Ok(CameraAnimator {
            keyframes,
            ..Default::default()
        })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == AnimatorState::Playing
    }

    /// Seconds into the current run; zero while idle.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Length of the track in seconds.
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// Start (or restart) playback from time zero.
    ///
    /// Returns `false` and stays idle when the track has fewer than two
    /// keyframes.
    pub fn start(&mut self) -> bool {
        if self.keyframes.len() < 2 {
            self.state = AnimatorState::Idle;
            return false;
        }
        self.state = AnimatorState::Playing;
        self.elapsed = 0.0;
        true
    }

    /// Force the idle state and rewind.
    pub fn stop(&mut self) {
        self.state = AnimatorState::Idle;
        self.elapsed = 0.0;
    }

    /// Advance the clock by `dt` seconds and update `camera`.
    ///
    /// Negative `dt` counts as zero. Does nothing while idle.
    pub fn tick(&mut self, dt: f32, camera: &mut CameraState) {
        if self.state != AnimatorState::Playing {
            return;
        }
        self.elapsed += dt.max(0.0);

        if self.elapsed > self.duration() {
            self.stop();
            return;
        }

        let Some(pair) = self
            .keyframes
            .windows(2)
            .find(|p| p[0].time <= self.elapsed && self.elapsed <= p[1].time)
        else {
            return;
        };
        let (from, to) = (&pair[0], &pair[1]);
        let alpha = (self.elapsed - from.time) / (to.time - from.time);
        let t = ease(alpha);

        camera.rotation_x = lerp_f32(from.rotation_x, to.rotation_x, t);
        camera.rotation_y = lerp_f32(from.rotation_y, to.rotation_y, t);
        camera.zoom = lerp_f32(from.zoom, to.zoom, t);
    }
}
