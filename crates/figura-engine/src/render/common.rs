//! GPU-side records shared by mesh renderers.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::scene::Instance;

/// Per-frame uniforms: camera transform and a single directional light.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Column-major `projection * view`.
    pub view_proj: [[f32; 4]; 4],
    /// xyz: direction towards the light (world space); w: ambient term in `[0, 1]`.
    pub light: [f32; 4],
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, towards_light: Vec3, ambient: f32) -> Self {
        let dir = towards_light.normalize_or_zero();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light: [dir.x, dir.y, dir.z, ambient.clamp(0.0, 1.0)],
        }
    }

    /// Unlit: every fragment gets its instance color.
    pub fn unlit(view_proj: Mat4) -> Self {
        Self::new(view_proj, Vec3::Y, 1.0)
    }
}

pub(super) fn uniforms_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<SceneUniforms>() as u64)
        .expect("SceneUniforms has non-zero size by construction")
}

/// Per-instance vertex data: model matrix columns + color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4, // model col 0
        3 => Float32x4, // model col 1
        4 => Float32x4, // model col 2
        5 => Float32x4, // model col 3
        6 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&Instance> for InstanceRaw {
    fn from(inst: &Instance) -> Self {
        Self {
            model: inst.model.to_cols_array_2d(),
            color: inst.color.to_array(),
        }
    }
}
