//! Event types and observers.
//!
//! Input is decoupled from the state it changes: the input system only
//! triggers events, and the observers here mutate resources.
//!
//! Submodules:
//! - [`scenecommand`] – camera, animation and render-mode commands
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod scenecommand;
pub mod switchdebug;
