use glam::Mat4;

use crate::paint::Color;

/// Application-chosen mesh identifier.
///
/// A `DrawList` does not know what the mesh is; a renderer created for the
/// same id picks up the matching records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MeshId(pub u32);

/// One placement of a mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Instance {
    /// Model-to-world transform.
    pub model: Mat4,
    pub color: Color,
}

/// A single draw record: which mesh, and where.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub instance: Instance,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps capacity; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, mesh: MeshId, model: Mat4, color: Color) {
        self.items.push(DrawItem {
            mesh,
            instance: Instance { model, color },
        });
    }

    /// Appends many placements of one mesh.
    pub fn extend<I>(&mut self, mesh: MeshId, color: Color, models: I)
    where
        I: IntoIterator<Item = Mat4>,
    {
        self.items.extend(models.into_iter().map(|model| DrawItem {
            mesh,
            instance: Instance { model, color },
        }));
    }

    /// Instances recorded for `mesh`, in recording order.
    pub fn instances_of(&self, mesh: MeshId) -> impl Iterator<Item = &Instance> {
        self.items
            .iter()
            .filter(move |item| item.mesh == mesh)
            .map(|item| &item.instance)
    }
}
