//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: board layout, camera state, input
//! state, timing and shared meshes. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `board` – seed-derived board parameters and piece layout
//! - `camera3d` – orbit camera pose and projection mode
//! - `cameraanimator` – keyframe track driving the camera
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window, projection and mesh settings from `config.ini`
//! - `input` – per-frame keyboard and mouse state relevant to the scene
//! - `pieceanimation` – per-cell hover parameters
//! - `rendersettings` – wireframe, grid and color scheme flags
//! - `scenemeshes` – meshes built once at startup
//! - `worldtime` – simulation time and delta
pub mod board;
pub mod camera3d;
pub mod cameraanimator;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod pieceanimation;
pub mod rendersettings;
pub mod scenemeshes;
pub mod worldtime;
