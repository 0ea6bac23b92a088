//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) and the matching depth buffer
//! - acquiring frames and providing encoders/views for rendering

mod depth;
mod gpu;
mod init;
mod surface;

pub use depth::DepthBuffer;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
