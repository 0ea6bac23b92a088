//! Figura engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binaries:
//! window and event loop, keyboard input, frame timing, the wgpu device with
//! its depth buffer, a camera, and an instanced mesh renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
