//! Render mode flags toggled from the keyboard.
//!
//! None of these touch geometry: they select palettes and switch optional
//! passes on and off. The renderer reads them every frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Board palettes, cycled with the `C` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Classic,
    Modern,
    Fantasy,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Classic, ColorScheme::Modern, ColorScheme::Fantasy];

    /// Scheme for an index, wrapping modulo the number of schemes.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Classic => "Classic",
            ColorScheme::Modern => "Modern",
            ColorScheme::Fantasy => "Fantasy",
        }
    }

    /// Color of a light (`dark == false`) or dark square.
    pub fn square_color(self, dark: bool) -> Color {
        let [r, g, b] = match (self, dark) {
            (ColorScheme::Classic, false) => [1.0, 0.9, 0.8],
            (ColorScheme::Classic, true) => [0.4, 0.2, 0.0],
            (ColorScheme::Modern, false) => [0.9, 0.95, 1.0],
            (ColorScheme::Modern, true) => [0.1, 0.3, 0.5],
            (ColorScheme::Fantasy, false) => [0.8, 1.0, 0.8],
            (ColorScheme::Fantasy, true) => [0.5, 0.2, 0.7],
        };
        rgb_f32(r, g, b)
    }
}

/// Convert a `[0, 1]` float triple into an opaque raylib color.
pub fn rgb_f32(r: f32, g: f32, b: f32) -> Color {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(to_u8(r), to_u8(g), to_u8(b), 255)
}

/// Scene-wide mode flags.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Rasterize polygons as lines.
    pub wireframe: bool,
    /// Draw the reference grid below the board.
    pub grid_enabled: bool,
    pub color_scheme: ColorScheme,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            wireframe: false,
            grid_enabled: true,
            color_scheme: ColorScheme::Classic,
        }
    }
}

impl RenderSettings {
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }
}
