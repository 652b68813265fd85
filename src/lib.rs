//! Chessboard 3D library.
//!
//! This module exposes the scene's geometry, ECS resources, systems, and
//! events for use in integration tests and by the binary.

pub mod easing;
pub mod events;
pub mod game;
pub mod mesh;
pub mod resources;
pub mod systems;
