//! Screen-space geometry shared by the runtime and renderers.
//!
//! World-space math lives in `glam`; this module only describes the drawable.

mod viewport;

pub use viewport::Viewport;
