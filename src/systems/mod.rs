//! Scene systems.
//!
//! This module groups all ECS systems that advance time, read input,
//! animate the camera and draw the scene.
//!
//! Submodules overview
//! - [`cameraanimation`] – advance the keyframe camera track
//! - [`gameconfig`] – push window pacing settings when the config changes
//! - [`input`] – read hardware input and trigger scene command events
//! - [`render`] – draw the board, pieces and debug overlay using Raylib
//! - [`time`] – update simulation time and delta

pub mod cameraanimation;
pub mod gameconfig;
pub mod input;
pub mod render;
pub mod time;
