//! Scene configuration resource.
//!
//! Holds window, projection and mesh settings loaded from an INI file, with
//! defaults that reproduce the stock scene when no file exists. Command line
//! flags are applied on top by `main`.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//!
//! [scene]
//! seed = 2
//! fov = 45.0
//! near = 0.1
//! far = 50.0
//! ortho_extent = 20.0
//!
//! [mesh]
//! piece_slices = 20
//! crown_slices = 10
//! crown_stacks = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::camera3d::ProjectionParams;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
pub const DEFAULT_SEED: u32 = 2;
const DEFAULT_FOV: f32 = 45.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 50.0;
const DEFAULT_ORTHO_EXTENT: f32 = 20.0;
const DEFAULT_PIECE_SLICES: usize = 20;
const DEFAULT_CROWN_SLICES: usize = 10;
const DEFAULT_CROWN_STACKS: usize = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Scene configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Roll number every board parameter is derived from.
    pub seed: u32,
    /// Perspective vertical field of view in degrees.
    pub fov: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Orthographic view height in world units.
    pub ortho_extent: f32,
    /// Slices of each piece body cylinder.
    pub piece_slices: usize,
    /// Latitude bands of the crown sphere.
    pub crown_slices: usize,
    /// Longitude steps of the crown sphere.
    pub crown_stacks: usize,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            seed: DEFAULT_SEED,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            ortho_extent: DEFAULT_ORTHO_EXTENT,
            piece_slices: DEFAULT_PIECE_SLICES,
            crown_slices: DEFAULT_CROWN_SLICES,
            crown_stacks: DEFAULT_CROWN_STACKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, seed={}, fov={}, clip={}..{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.seed,
            self.fov,
            self.near,
            self.far
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = read_window_extent(config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_window_extent(config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = read_uint::<u32>(config, "window", "target_fps") {
            self.target_fps = fps;
        }
        match config.getbool("window", "vsync") {
            Ok(Some(vsync)) => self.vsync = vsync,
            Ok(None) => {}
            Err(e) => warn!("[window] vsync ignored: {}", e),
        }

        // [scene] section
        if let Some(seed) = read_uint::<u32>(config, "scene", "seed") {
            self.seed = seed;
        }
        if let Some(fov) = read_positive_f32(config, "scene", "fov") {
            if fov < 180.0 {
                self.fov = fov;
            } else {
                warn!("[scene] fov = {} must be below 180, keeping {}", fov, self.fov);
            }
        }
        if let Some(extent) = read_positive_f32(config, "scene", "ortho_extent") {
            self.ortho_extent = extent;
        }
        // Clip planes are only accepted as a consistent pair
        let near = read_positive_f32(config, "scene", "near").unwrap_or(self.near);
        let far = read_positive_f32(config, "scene", "far").unwrap_or(self.far);
        if far > near {
            self.near = near;
            self.far = far;
        } else {
            warn!(
                "[scene] far = {} must be greater than near = {}, keeping {}..{}",
                far, near, self.near, self.far
            );
        }

        // [mesh] section
        if let Some(slices) = read_uint::<usize>(config, "mesh", "piece_slices") {
            self.piece_slices = slices;
        }
        if let Some(slices) = read_uint::<usize>(config, "mesh", "crown_slices") {
            self.crown_slices = slices;
        }
        if let Some(stacks) = read_uint::<usize>(config, "mesh", "crown_stacks") {
            self.crown_stacks = stacks;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("scene", "seed", Some(self.seed.to_string()));
        config.set("scene", "fov", Some(self.fov.to_string()));
        config.set("scene", "near", Some(self.near.to_string()));
        config.set("scene", "far", Some(self.far.to_string()));
        config.set("scene", "ortho_extent", Some(self.ortho_extent.to_string()));

        config.set("mesh", "piece_slices", Some(self.piece_slices.to_string()));
        config.set("mesh", "crown_slices", Some(self.crown_slices.to_string()));
        config.set("mesh", "crown_stacks", Some(self.crown_stacks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Projection parameters for the camera.
    pub fn projection(&self) -> ProjectionParams {
        ProjectionParams {
            fov: self.fov,
            ortho_extent: self.ortho_extent,
            near: self.near,
            far: self.far,
        }
    }
}

/// Read an unsigned key that must fit in `T`.
///
/// Missing keys give `None` silently; unparsable or out-of-range values are
/// reported and also give `None`, so the caller keeps its current value.
fn read_uint<T: TryFrom<u64>>(config: &Ini, section: &str, key: &str) -> Option<T> {
    let value = match config.getuint(section, key) {
        Ok(value) => value?,
        Err(e) => {
            warn!("[{}] {} ignored: {}", section, key, e);
            return None;
        }
    };
    match T::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("[{}] {} = {} is out of range, ignored", section, key, value);
            None
        }
    }
}

/// Read a window dimension: non-zero and small enough for raylib's `i32`.
fn read_window_extent(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = read_uint::<i32>(config, section, key)?;
    if value > 0 {
        Some(value.unsigned_abs())
    } else {
        warn!("[{}] {} must be positive, ignored", section, key);
        None
    }
}

/// Read a finite, strictly positive float.
fn read_positive_f32(config: &Ini, section: &str, key: &str) -> Option<f32> {
    let value = match config.getfloat(section, key) {
        Ok(value) => value? as f32,
        Err(e) => {
            warn!("[{}] {} ignored: {}", section, key, e);
            return None;
        }
    };
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        warn!("[{}] {} = {} must be finite and positive, ignored", section, key, value);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_scene() {
        let cfg = GameConfig::new();
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
        assert_eq!(cfg.target_fps, 60);
        assert_eq!(cfg.seed, 2);
        let p = cfg.projection();
        assert_eq!((p.fov, p.near, p.far, p.ortho_extent), (45.0, 0.1, 50.0, 20.0));
        assert_eq!((cfg.piece_slices, cfg.crown_slices, cfg.crown_stacks), (20, 10, 10));
    }

    #[test]
    fn test_partial_ini_overrides_only_given_keys() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[scene]\nseed = 7\nfov = 60.0\n\n[mesh]\npiece_slices = 8\n")
            .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.fov, 60.0);
        assert_eq!(cfg.piece_slices, 8);
        assert_eq!(cfg.window_width, 800);
        assert_eq!(cfg.crown_stacks, 10);
    }

    #[test]
    fn test_out_of_range_integers_keep_defaults() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str(
            "[window]\nwidth = 4294967296\nheight = 3000000000\ntarget_fps = 4294967297\n\n[scene]\nseed = 4294967303\n",
        )
        .unwrap();
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
        assert_eq!(cfg.target_fps, 60);
    }

    #[test]
    fn test_largest_seed_is_accepted() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[scene]\nseed = 4294967295\n").unwrap();
        assert_eq!(cfg.seed, u32::MAX);
    }

    #[test]
    fn test_zero_window_size_and_bad_numbers_ignored() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[window]\nwidth = 0\nheight = tall\nvsync = maybe\n")
            .unwrap();
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
        assert!(cfg.vsync);
    }

    #[test]
    fn test_far_not_beyond_near_keeps_clip_planes() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[scene]\nnear = 60.0\nfar = 10.0\n").unwrap();
        assert_eq!((cfg.near, cfg.far), (0.1, 50.0));

        cfg.load_from_str("[scene]\nfar = 0.05\n").unwrap();
        assert_eq!((cfg.near, cfg.far), (0.1, 50.0));

        cfg.load_from_str("[scene]\nnear = 1.0\nfar = 80.0\n").unwrap();
        assert_eq!((cfg.near, cfg.far), (1.0, 80.0));
    }

    #[test]
    fn test_non_positive_projection_values_rejected() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str(
            "[scene]\nfov = -45.0\northo_extent = 0.0\nnear = -1.0\n",
        )
        .unwrap();
        let p = cfg.projection();
        assert_eq!((p.fov, p.ortho_extent, p.near, p.far), (45.0, 20.0, 0.1, 50.0));

        cfg.load_from_str("[scene]\nfov = inf\n").unwrap();
        assert_eq!(cfg.fov, 45.0);
        cfg.load_from_str("[scene]\nfov = 200.0\n").unwrap();
        assert_eq!(cfg.fov, 45.0);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut cfg = GameConfig::with_path("./definitely/not/here/config.ini");
        assert!(cfg.load_from_file().is_err());
        assert_eq!(cfg.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "chessboard3d-config-{}.ini",
            std::process::id()
        ));
        let mut saved = GameConfig::with_path(&path);
        saved.seed = 13;
        saved.vsync = false;
        saved.crown_slices = 6;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.seed, 13);
        assert!(!loaded.vsync);
        assert_eq!(loaded.crown_slices, 6);
    }
}
