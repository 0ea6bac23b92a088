//! Pre-order depth-first traversal.
//!
//! The accumulated transform is threaded through the walk as a value owned by
//! the traversal call. On entering a node the current value is saved on the
//! [`MatrixStack`], multiplied on the right by the node's local transform,
//! handed to the node's render callback, and inherited by every child in
//! order. On leaving the node it is restored from the stack, so siblings see
//! their parent's transform and never each other's.

use core::ops::{Add, AddAssign};

use glam::Mat4;

use crate::node::{NodeId, NodeRender, SceneGraph};
use crate::stack::MatrixStack;

/// Counters for one traversal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TraversalStats {
    pub pushes: u64,
    pub pops: u64,
    pub renders: u64,
    /// Deepest stack depth reached during the walk.
    pub max_depth: usize,
}

impl TraversalStats {
    /// True when every push was matched by a pop.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.pushes == self.pops
    }
}

impl Add for TraversalStats {
    type Output = TraversalStats;

    fn add(self, rhs: TraversalStats) -> TraversalStats {
        TraversalStats {
            pushes: self.pushes + rhs.pushes,
            pops: self.pops + rhs.pops,
            renders: self.renders + rhs.renders,
            max_depth: self.max_depth.max(rhs.max_depth),
        }
    }
}

impl AddAssign for TraversalStats {
    fn add_assign(&mut self, rhs: TraversalStats) {
        *self = *self + rhs;
    }
}

/// Walks the subtree rooted at `node`, calling `visit(id, render, world)` on
/// entry to each node.
///
/// `node = None` is the empty case: nothing is pushed, popped, or visited.
/// `stack` may already hold entries; it is left at the same depth on return.
pub fn traverse_with<R, F>(
    graph: &SceneGraph<R>,
    node: Option<NodeId>,
    base: Mat4,
    stack: &mut MatrixStack,
    visit: &mut F,
) -> TraversalStats
where
    F: FnMut(NodeId, &R, Mat4),
{
    let (pushes_before, pops_before) = (stack.pushes(), stack.pops());
    let depth_before = stack.depth();

    let mut stats = TraversalStats::default();
    let mut accumulated = base;
    walk(graph, node, &mut accumulated, stack, visit, &mut stats);

    debug_assert_eq!(stack.depth(), depth_before, "unbalanced matrix stack");
    debug_assert_eq!(accumulated, base, "accumulated transform not restored");

    stats.pushes = stack.pushes() - pushes_before;
    stats.pops = stack.pops() - pops_before;
    stats.max_depth = stats.max_depth.saturating_sub(depth_before);
    stats
}

/// Pending work for the iterative walk.
enum Step {
    /// Save the accumulated transform, apply the node's local, visit it.
    Enter(NodeId),
    /// Restore the transform saved by the matching `Enter`.
    Exit,
}

fn walk<R, F>(
    graph: &SceneGraph<R>,
    node: Option<NodeId>,
    accumulated: &mut Mat4,
    stack: &mut MatrixStack,
    visit: &mut F,
    stats: &mut TraversalStats,
) where
    F: FnMut(NodeId, &R, Mat4),
{
    let Some(root) = node else { return };
    let mut work = vec![Step::Enter(root)];

    while let Some(step) = work.pop() {
        match step {
            Step::Enter(id) => {
                let Some(n) = graph.get(id) else {
                    panic!("node {id:?} does not belong to this graph");
                };

                stack.push(*accumulated);
                stats.max_depth = stats.max_depth.max(stack.depth());

                *accumulated *= n.local;
                visit(id, &n.render, *accumulated);
                stats.renders += 1;

                // Children pop in order, after which Exit restores this node's parent state.
                work.push(Step::Exit);
                work.extend(n.children().iter().rev().map(|&c| Step::Enter(c)));
            }
            Step::Exit => *accumulated = stack.pop(),
        }
    }
}

/// Walks the subtree rooted at `node`, rendering each node into `sink`.
pub fn traverse<R, S>(
    graph: &SceneGraph<R>,
    node: Option<NodeId>,
    base: Mat4,
    stack: &mut MatrixStack,
    sink: &mut S,
) -> TraversalStats
where
    R: NodeRender<S>,
    S: ?Sized,
{
    traverse_with(graph, node, base, stack, &mut |_, render: &R, world| {
        render.render(world, sink)
    })
}

/// Renders every root of `graph` in insertion order, each starting from `base`.
pub fn traverse_all<R, S>(graph: &SceneGraph<R>, base: Mat4, sink: &mut S) -> TraversalStats
where
    R: NodeRender<S>,
    S: ?Sized,
{
    let mut stack = MatrixStack::with_capacity(graph.height());
    let mut stats = TraversalStats::default();
    for &root in graph.roots() {
        stats += traverse(graph, Some(root), base, &mut stack, sink);
    }
    stats
}

/// Accumulated transform of every node, indexed by [`NodeId::index`].
pub fn world_transforms<R>(graph: &SceneGraph<R>, base: Mat4) -> Vec<Mat4> {
    let mut out = vec![base; graph.len()];
    let mut stack = MatrixStack::with_capacity(graph.height());
    for &root in graph.roots() {
        traverse_with(graph, Some(root), base, &mut stack, &mut |id, _: &R, world| {
            out[id.index()] = world;
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{rotate_x, rotate_y, rotate_z, scale, translate};
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    type Calls = Vec<(char, Mat4)>;

    impl NodeRender<Calls> for char {
        fn render(&self, world: Mat4, sink: &mut Calls) {
            sink.push((*self, world));
        }
    }

    fn base() -> Mat4 {
        translate(0.0, -1.0, 0.5) * rotate_x(10.0)
    }

    fn world_of(calls: &Calls, name: char) -> Mat4 {
        calls
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| *m)
            .unwrap_or_else(|| panic!("{name} was not rendered"))
    }

    fn run(graph: &SceneGraph<char>, root: Option<NodeId>) -> (Calls, TraversalStats) {
        let mut calls = Calls::new();
        let mut stack = MatrixStack::new();
        let stats = traverse(graph, root, base(), &mut stack, &mut calls);
        (calls, stats)
    }

    // ── base case ─────────────────────────────────────────────────────────

    #[test]
    fn absent_node_does_nothing() {
        let graph: SceneGraph<char> = SceneGraph::new();
        let (calls, stats) = run(&graph, None);

        assert!(calls.is_empty());
        assert_eq!(stats, TraversalStats::default());
    }

    #[test]
    fn empty_graph_traverse_all_does_nothing() {
        let graph: SceneGraph<char> = SceneGraph::new();
        let mut calls = Calls::new();
        let stats = traverse_all(&graph, base(), &mut calls);
        assert!(calls.is_empty());
        assert_eq!(stats.renders, 0);
    }

    // ── balance ───────────────────────────────────────────────────────────

    #[test]
    fn pushes_match_pops_and_stack_returns_to_prior_depth() {
        let mut g = SceneGraph::new();
        let r = g.add_root(rotate_y(20.0), 'r');
        let a = g.add_child(r, translate(1.0, 0.0, 0.0), 'a');
        g.add_child(a, rotate_z(45.0), 'b');
        g.add_child(r, scale(2.0, 1.0, 1.0), 'c');

        let mut stack = MatrixStack::new();
        let sentinel = translate(9.0, 9.0, 9.0);
        stack.push(sentinel);

        let mut calls = Calls::new();
        let stats = traverse(&g, Some(r), base(), &mut stack, &mut calls);

        assert!(stats.is_balanced());
        assert_eq!(stats.pushes, 4);
        assert_eq!(stats.renders, 4);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.pop(), sentinel);
    }

    #[test]
    fn traversal_is_repeatable() {
        let mut g = SceneGraph::new();
        let r = g.add_root(rotate_y(20.0), 'r');
        g.add_child(r, translate(1.0, 2.0, 3.0), 'a');

        let (first, _) = run(&g, Some(r));
        let (second, _) = run(&g, Some(r));
        assert_eq!(first, second);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn visits_in_pre_order() {
        //      r
        //    / | \
        //   a  d  e
        //  / \
        // b   c
        let mut g = SceneGraph::new();
        let r = g.add_root(Mat4::IDENTITY, 'r');
        let a = g.add_child(r, Mat4::IDENTITY, 'a');
        g.add_child(a, Mat4::IDENTITY, 'b');
        g.add_child(a, Mat4::IDENTITY, 'c');
        g.add_child(r, Mat4::IDENTITY, 'd');
        g.add_child(r, Mat4::IDENTITY, 'e');

        let (calls, _) = run(&g, Some(r));
        let order: String = calls.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, "rabcde");
    }

    #[test]
    fn subtree_traversal_ignores_siblings_of_start() {
        let mut g = SceneGraph::new();
        let r = g.add_root(Mat4::IDENTITY, 'r');
        let a = g.add_child(r, Mat4::IDENTITY, 'a');
        g.add_child(r, Mat4::IDENTITY, 'b');

        let (calls, stats) = run(&g, Some(a));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 'a');
        assert_eq!(stats.renders, 1);
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn child_composes_parent_then_local() {
        let p = translate(3.0, 0.0, 0.0);
        let c = rotate_z(90.0);

        let mut g = SceneGraph::new();
        let parent = g.add_root(p, 'p');
        g.add_child(parent, c, 'c');

        let (calls, _) = run(&g, Some(parent));
        let got = world_of(&calls, 'c');

        assert!(got.abs_diff_eq(base() * p * c, EPS));
        assert!(!got.abs_diff_eq(base() * c * p, EPS));
    }

    #[test]
    fn chain_of_three_accumulates_in_order() {
        let t1 = rotate_y(30.0);
        let t2 = translate(0.0, 2.0, 0.0) * rotate_z(-15.0);
        let t3 = translate(1.0, 0.0, 0.0) * scale(0.5, 2.0, 0.5);

        let mut g = SceneGraph::new();
        let root = g.add_root(t1, 'r');
        let mid = g.add_child(root, t2, 'm');
        g.add_child(mid, t3, 'l');

        let (calls, stats) = run(&g, Some(root));

        assert!(world_of(&calls, 'r').abs_diff_eq(base() * t1, EPS));
        assert!(world_of(&calls, 'm').abs_diff_eq(base() * t1 * t2, EPS));
        assert!(world_of(&calls, 'l').abs_diff_eq(base() * t1 * t2 * t3, EPS));
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn sibling_subtree_does_not_leak() {
        let p = rotate_y(50.0);
        let b_local = translate(0.0, 1.0, 0.0);

        let build = |with_a: bool| {
            let mut g = SceneGraph::new();
            let root = g.add_root(p, 'p');
            if with_a {
                let a = g.add_child(root, translate(7.0, 0.0, 0.0) * rotate_x(33.0), 'a');
                g.add_child(a, scale(4.0, 4.0, 4.0), 'x');
            }
            g.add_child(root, b_local, 'b');
            (g, root)
        };

        let (with_a, root) = build(true);
        let (without_a, root2) = build(false);

        let (calls_with, _) = run(&with_a, Some(root));
        let (calls_without, _) = run(&without_a, Some(root2));

        assert_eq!(world_of(&calls_with, 'b'), world_of(&calls_without, 'b'));
        assert!(world_of(&calls_with, 'b').abs_diff_eq(base() * p * b_local, EPS));
    }

    #[test]
    fn roots_each_start_from_base() {
        let t = translate(5.0, 0.0, 0.0);
        let mut g = SceneGraph::new();
        g.add_root(t, 'a');
        g.add_root(t, 'b');

        let mut calls = Calls::new();
        let stats = traverse_all(&g, base(), &mut calls);

        assert_eq!(stats.renders, 2);
        assert!(stats.is_balanced());
        assert_eq!(world_of(&calls, 'a'), world_of(&calls, 'b'));
    }

    #[test]
    fn torso_and_neck_match_hand_computed_matrix() {
        let dx = 2.0_f32;
        let theta = -45.0_f32;

        let mut g = SceneGraph::new();
        let torso = g.add_root(rotate_y(50.0), 't');
        g.add_child(torso, translate(dx, 0.0, 0.0) * rotate_z(theta), 'n');

        let lift = translate(0.0, 2.0, 0.0);
        let mut calls = Calls::new();
        let mut stack = MatrixStack::new();
        traverse(&g, Some(torso), lift, &mut stack, &mut calls);

        let (s, c) = 50.0_f32.to_radians().sin_cos();
        let (st, ct) = theta.to_radians().sin_cos();
        let expected = Mat4::from_cols(
            Vec4::new(c * ct, st, -s * ct, 0.0),
            Vec4::new(-c * st, ct, s * st, 0.0),
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::new(c * dx, 2.0, -s * dx, 1.0),
        );

        assert!(world_of(&calls, 'n').abs_diff_eq(expected, EPS));
    }

    #[test]
    fn deep_chain_does_not_exhaust_call_stack() {
        const DEPTH: usize = 200_000;

        let step = translate(0.0, 1.0, 0.0);
        let mut g = SceneGraph::new();
        let mut last = g.add_root(step, ());
        for _ in 1..DEPTH {
            last = g.add_child(last, step, ());
        }

        let mut leaf = Mat4::IDENTITY;
        let mut stack = MatrixStack::new();
        let root = g.roots().first().copied();
        let stats = traverse_with(&g, root, Mat4::IDENTITY, &mut stack, &mut |id, _: &(), world| {
            if id == last {
                leaf = world;
            }
        });

        assert_eq!(stats.renders, DEPTH as u64);
        assert_eq!(stats.max_depth, DEPTH);
        assert!(stats.is_balanced());
        assert!(stack.is_empty());
        assert_eq!(g.height(), DEPTH);
        assert!(leaf.abs_diff_eq(translate(0.0, DEPTH as f32, 0.0), 1e-2));
    }

    // ── world_transforms ──────────────────────────────────────────────────

    #[test]
    fn world_transforms_indexes_by_node() {
        let t1 = rotate_y(10.0);
        let t2 = translate(0.0, 1.0, 0.0);

        let mut g = SceneGraph::new();
        let root = g.add_root(t1, 'r');
        let child = g.add_child(root, t2, 'c');

        let worlds = world_transforms(&g, Mat4::IDENTITY);
        assert_eq!(worlds.len(), 2);
        assert!(worlds[root.index()].abs_diff_eq(t1, EPS));
        assert!(worlds[child.index()].abs_diff_eq(t1 * t2, EPS));
    }

    #[test]
    fn stats_sum_keeps_deepest() {
        let a = TraversalStats { pushes: 2, pops: 2, renders: 2, max_depth: 2 };
        let b = TraversalStats { pushes: 3, pops: 3, renders: 3, max_depth: 1 };
        let sum = a + b;
        assert_eq!(sum.renders, 5);
        assert_eq!(sum.max_depth, 2);
        assert!(sum.is_balanced());
    }
}
