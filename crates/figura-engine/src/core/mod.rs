//! Contracts between the runtime loop and the viewer applications.

mod ctx;

pub use ctx::{FrameCtx, WindowCtx};

/// Outcome of a frame callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// A viewer driven by the runtime.
///
/// Input reaches the app through `FrameCtx::input` and `FrameCtx::input_frame`;
/// there is no separate event callback.
pub trait App {
    /// Called once per redraw with fresh timing and this frame's key strokes.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
