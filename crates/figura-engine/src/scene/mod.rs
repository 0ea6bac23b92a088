//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw records for one frame
//! - keep recording order so renderers draw deterministically
//!
//! Producers (grid builder, scene-graph traversal) push records; each
//! `render::MeshRenderer` consumes the records addressed to its mesh.

mod list;

pub use list::{DrawItem, DrawList, Instance, MeshId};
