//! Color model shared between the demos and renderers.

pub mod color;

pub use color::Color;
