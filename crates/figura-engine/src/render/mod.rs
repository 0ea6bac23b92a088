//! GPU rendering subsystem.
//!
//! Renderers consume `scene::DrawList` records and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - world space is right-handed, +Y up
//! - matrices are column-major and uploaded as-is (`Mat4::to_cols_array_2d`)
//! - clip-space depth is `[0, 1]`, tested with `Less`

mod camera;
mod common;
mod ctx;
mod mesh;
mod renderer;

pub use camera::Camera;
pub use common::SceneUniforms;
pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, MeshVertex, Topology};
pub use renderer::MeshRenderer;
