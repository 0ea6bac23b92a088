//! Hierarchical transforms for articulated figures.
//!
//! This crate only depends on `glam` so the traversal can be used and tested
//! without a window, a GPU device, or any engine code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`transform`] | `translate`, `rotate`, `scale` builders and [`Axis`] |
//! | [`stack`] | [`MatrixStack`], [`StackUnderflow`] |
//! | [`node`] | [`SceneGraph`], [`Node`], [`NodeId`], [`NodeRender`], [`FnRender`] |
//! | [`traverse`] | pre-order traversal entry points and [`TraversalStats`] |
//!
//! # Quick start
//!
//! ```rust
//! use figura_graph::{NodeRender, SceneGraph, transform, traverse_all};
//! use glam::Mat4;
//!
//! struct Part(&'static str);
//!
//! impl NodeRender<Vec<(&'static str, Mat4)>> for Part {
//!     fn render(&self, world: Mat4, drawn: &mut Vec<(&'static str, Mat4)>) {
//!         drawn.push((self.0, world));
//!     }
//! }
//!
//! let mut graph = SceneGraph::new();
//! let body = graph.add_root(transform::rotate_y(50.0), Part("body"));
//! graph.add_child(body, transform::translate(2.0, 0.0, 0.0), Part("arm"));
//!
//! let mut drawn: Vec<(&'static str, Mat4)> = Vec::new();
//! let stats = traverse_all(&graph, Mat4::IDENTITY, &mut drawn);
//!
//! assert_eq!(stats.renders, 2);
//! assert_eq!(drawn[1].0, "arm");
//! ```

pub mod node;
pub mod stack;
pub mod transform;
pub mod traverse;

pub use node::{FnRender, Node, NodeId, NodeRender, SceneGraph};
pub use stack::{MatrixStack, StackUnderflow};
pub use transform::Axis;
pub use traverse::{TraversalStats, traverse, traverse_all, traverse_with, world_transforms};
