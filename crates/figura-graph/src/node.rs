use glam::Mat4;

/// Render callback attached to a scene node.
///
/// `world` is the node's accumulated transform at the time it is visited.
/// `sink` is whatever the caller records draws into (an instance list, a
/// test recorder, ...).
pub trait NodeRender<S: ?Sized> {
    fn render(&self, world: Mat4, sink: &mut S);
}

impl<S: ?Sized, T: NodeRender<S> + ?Sized> NodeRender<S> for Box<T> {
    #[inline]
    fn render(&self, world: Mat4, sink: &mut S) {
        (**self).render(world, sink)
    }
}

/// Adapts a closure into a [`NodeRender`].
#[derive(Debug, Copy, Clone)]
pub struct FnRender<F>(pub F);

impl<S: ?Sized, F: Fn(Mat4, &mut S)> NodeRender<S> for FnRender<F> {
    #[inline]
    fn render(&self, world: Mat4, sink: &mut S) {
        (self.0)(world, sink)
    }
}

/// Index of a node inside the [`SceneGraph`] that created it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One rigid part of a figure.
#[derive(Debug, Clone)]
pub struct Node<R> {
    /// Transform relative to the parent.
    pub local: Mat4,
    pub render: R,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<R> Node<R> {
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in visit order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of nodes forming a forest.
///
/// Nodes are only created as a root or as the child of an existing node, and
/// are never re-parented, so every node has at most one parent and the graph
/// cannot contain a cycle.
#[derive(Debug, Clone)]
pub struct SceneGraph<R> {
    nodes: Vec<Node<R>>,
    roots: Vec<NodeId>,
}

impl<R> Default for SceneGraph<R> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }
}

impl<R> SceneGraph<R> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            roots: Vec::new(),
        }
    }

    /// Adds a parentless node. Roots are traversed in insertion order.
    pub fn add_root(&mut self, local: Mat4, render: R) -> NodeId {
        let id = self.insert(None, local, render);
        self.roots.push(id);
        id
    }

    /// Adds a node as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this graph.
    pub fn add_child(&mut self, parent: NodeId, local: Mat4, render: R) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent node {parent:?}");
        let id = self.insert(Some(parent), local, render);
        self.nodes[parent.0].children.push(id);
        id
    }

    fn insert(&mut self, parent: Option<NodeId>, local: Mat4, render: R) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            local,
            render,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Replaces a node's local transform. Topology is unchanged.
    #[inline]
    pub fn set_local(&mut self, id: NodeId, local: Mat4) {
        self.nodes[id.0].local = local;
    }

    #[inline]
    pub fn local(&self, id: NodeId) -> Mat4 {
        self.nodes[id.0].local
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<R>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<R>> {
        self.nodes.get_mut(id.0)
    }

    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates `(id, node)` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<R>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Longest root-to-leaf path, counted in nodes. Zero for an empty graph.
    ///
    /// This is the matrix-stack depth a full traversal reaches.
    pub fn height(&self) -> usize {
        let mut work: Vec<(NodeId, usize)> = self.roots.iter().map(|&r| (r, 1)).collect();
        let mut height = 0;
        while let Some((id, depth)) = work.pop() {
            height = height.max(depth);
            work.extend(self.children(id).iter().map(|&c| (c, depth + 1)));
        }
        height
    }
}
