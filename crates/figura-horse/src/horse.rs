//! The robot horse figure.
//!
//! Eleven box parts in one tree rooted at the torso:
//!
//! ```text
//! torso
//! ├── neck ── head
//! ├── left upper arm ── left lower arm
//! ├── right upper arm ── right lower arm
//! ├── left upper leg ── left lower leg
//! └── right upper leg ── right lower leg
//! ```
//!
//! Every joint rotates its part about the part's local Z axis, except the
//! torso which yaws about Y. Each part is a unit cube scaled to its box and
//! lifted so the joint sits at the center of the box's bottom face.

use glam::{Mat4, Vec3};

use figura_engine::paint::Color;
use figura_engine::scene::{DrawList, MeshId};
use figura_graph::transform::{rotate_y, rotate_z, scale, translate};
use figura_graph::{NodeId, NodeRender, SceneGraph, TraversalStats, traverse_all};

use crate::joint::{Joint, JointAngles};

/// Mesh every part is drawn with.
pub const CUBE: MeshId = MeshId(0);

pub const TORSO_WIDTH: f32 = 6.0;
pub const TORSO_HEIGHT: f32 = 2.0;
pub const TORSO_DEPTH: f32 = 3.0;

pub const NECK_WIDTH: f32 = 1.0;
pub const NECK_HEIGHT: f32 = 3.0;
pub const NECK_DEPTH: f32 = 1.0;

pub const HEAD_WIDTH: f32 = 1.0;
pub const HEAD_HEIGHT: f32 = 2.5;
pub const HEAD_DEPTH: f32 = 1.0;

pub const UPPER_ARM_WIDTH: f32 = 0.6;
pub const UPPER_ARM_HEIGHT: f32 = 2.5;
pub const LOWER_ARM_WIDTH: f32 = 0.5;
pub const LOWER_ARM_HEIGHT: f32 = 2.0;

pub const UPPER_LEG_WIDTH: f32 = 0.6;
pub const UPPER_LEG_HEIGHT: f32 = 2.5;
pub const LOWER_LEG_WIDTH: f32 = 0.5;
pub const LOWER_LEG_HEIGHT: f32 = 2.0;

const BODY_COLOR: Color = Color::linear(0.38, 0.20, 0.09, 1.0);
const NECK_COLOR: Color = Color::linear(0.45, 0.26, 0.12, 1.0);
const LIMB_COLOR: Color = Color::linear(0.22, 0.12, 0.06, 1.0);
const SELECTED_COLOR: Color = Color::linear(0.95, 0.70, 0.10, 1.0);

/// One box of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    pub joint: Joint,
    /// Box extents (width along X, height along Y, depth along Z).
    pub size: Vec3,
    pub color: Color,
    pub selected: bool,
}

impl BodyPart {
    fn new(joint: Joint, width: f32, height: f32, depth: f32, color: Color) -> Self {
        Self {
            joint,
            size: Vec3::new(width, height, depth),
            color,
            selected: false,
        }
    }

    /// Part-local placement of the unit cube.
    pub fn instance(&self) -> Mat4 {
        translate(0.0, 0.5 * self.size.y, 0.0) * scale(self.size.x, self.size.y, self.size.z)
    }
}

impl NodeRender<DrawList> for BodyPart {
    fn render(&self, world: Mat4, sink: &mut DrawList) {
        let color = if self.selected {
            SELECTED_COLOR
        } else {
            self.color
        };
        sink.push(CUBE, world * self.instance(), color);
    }
}

/// Transform of `joint` relative to its parent at `degrees`.
pub fn joint_local(joint: Joint, degrees: f32) -> Mat4 {
    let offset = match joint {
        Joint::Torso => return rotate_y(degrees),
        Joint::Neck => translate(TORSO_WIDTH / 2.0 - NECK_WIDTH / 2.0, TORSO_HEIGHT, 0.0),
        Joint::Head => translate(0.0, NECK_HEIGHT, 0.0),
        Joint::LeftUpperArm => translate(
            TORSO_WIDTH / 2.0 - UPPER_ARM_WIDTH / 2.0,
            0.1 * UPPER_ARM_HEIGHT,
            -TORSO_DEPTH / 2.0 + UPPER_ARM_WIDTH / 2.0,
        ),
        Joint::RightUpperArm => translate(
            TORSO_WIDTH / 2.0 - UPPER_ARM_WIDTH / 2.0,
            0.1 * UPPER_ARM_HEIGHT,
            TORSO_DEPTH / 2.0 - UPPER_ARM_WIDTH / 2.0,
        ),
        Joint::LeftUpperLeg => translate(
            -(TORSO_WIDTH / 2.0 - UPPER_LEG_WIDTH / 2.0),
            0.1 * UPPER_LEG_HEIGHT,
            -TORSO_DEPTH / 2.0 + UPPER_LEG_WIDTH / 2.0,
        ),
        Joint::RightUpperLeg => translate(
            -(TORSO_WIDTH / 2.0 - UPPER_LEG_WIDTH / 2.0),
            0.1 * UPPER_LEG_HEIGHT,
            TORSO_DEPTH / 2.0 - UPPER_LEG_WIDTH / 2.0,
        ),
        Joint::LeftLowerArm | Joint::RightLowerArm => translate(0.0, UPPER_ARM_HEIGHT, 0.0),
        Joint::LeftLowerLeg | Joint::RightLowerLeg => translate(0.0, UPPER_LEG_HEIGHT, 0.0),
    };
    offset * rotate_z(degrees)
}

fn part_for(joint: Joint) -> BodyPart {
    use Joint::*;
    match joint {
        Torso => BodyPart::new(joint, TORSO_WIDTH, TORSO_HEIGHT, TORSO_DEPTH, BODY_COLOR),
        Neck => BodyPart::new(joint, NECK_WIDTH, NECK_HEIGHT, NECK_DEPTH, NECK_COLOR),
        Head => BodyPart::new(joint, HEAD_WIDTH, HEAD_HEIGHT, HEAD_DEPTH, BODY_COLOR),
        LeftUpperArm | RightUpperArm => BodyPart::new(
            joint,
            UPPER_ARM_WIDTH,
            UPPER_ARM_HEIGHT,
            UPPER_ARM_WIDTH,
            LIMB_COLOR,
        ),
        LeftLowerArm | RightLowerArm => BodyPart::new(
            joint,
            LOWER_ARM_WIDTH,
            LOWER_ARM_HEIGHT,
            LOWER_ARM_WIDTH,
            LIMB_COLOR,
        ),
        LeftUpperLeg | RightUpperLeg => BodyPart::new(
            joint,
            UPPER_LEG_WIDTH,
            UPPER_LEG_HEIGHT,
            UPPER_LEG_WIDTH,
            LIMB_COLOR,
        ),
        LeftLowerLeg | RightLowerLeg => BodyPart::new(
            joint,
            LOWER_LEG_WIDTH,
            LOWER_LEG_HEIGHT,
            LOWER_LEG_WIDTH,
            LIMB_COLOR,
        ),
    }
}

/// Articulated figure: scene graph plus the angle each joint is posed at.
pub struct Horse {
    graph: SceneGraph<BodyPart>,
    nodes: [NodeId; Joint::COUNT],
    angles: JointAngles,
}

impl Horse {
    /// Builds the tree posed at `angles`.
    pub fn new(angles: JointAngles) -> Self {
        let mut graph = SceneGraph::with_capacity(Joint::COUNT);
        let mut add = |parent: Option<NodeId>, joint: Joint| {
            let local = joint_local(joint, angles[joint]);
            match parent {
                None => graph.add_root(local, part_for(joint)),
                Some(p) => graph.add_child(p, local, part_for(joint)),
            }
        };

        // Child order fixes the draw order.
        let torso = add(None, Joint::Torso);
        let neck = add(Some(torso), Joint::Neck);
        let head = add(Some(neck), Joint::Head);
        let lua = add(Some(torso), Joint::LeftUpperArm);
        let lla = add(Some(lua), Joint::LeftLowerArm);
        let rua = add(Some(torso), Joint::RightUpperArm);
        let rla = add(Some(rua), Joint::RightLowerArm);
        let lul = add(Some(torso), Joint::LeftUpperLeg);
        let lll = add(Some(lul), Joint::LeftLowerLeg);
        let rul = add(Some(torso), Joint::RightUpperLeg);
        let rll = add(Some(rul), Joint::RightLowerLeg);

        let mut nodes = [torso; Joint::COUNT];
        for (joint, id) in [
            (Joint::Neck, neck),
            (Joint::Head, head),
            (Joint::LeftUpperArm, lua),
            (Joint::LeftLowerArm, lla),
            (Joint::RightUpperArm, rua),
            (Joint::RightLowerArm, rla),
            (Joint::LeftUpperLeg, lul),
            (Joint::LeftLowerLeg, lll),
            (Joint::RightUpperLeg, rul),
            (Joint::RightLowerLeg, rll),
        ] {
            nodes[joint.index()] = id;
        }

        Self {
            graph,
            nodes,
            angles,
        }
    }

    #[inline]
    pub fn graph(&self) -> &SceneGraph<BodyPart> {
        &self.graph
    }

    #[inline]
    pub fn node(&self, joint: Joint) -> NodeId {
        self.nodes[joint.index()]
    }

    #[inline]
    pub fn angle(&self, joint: Joint) -> f32 {
        self.angles[joint]
    }

    #[inline]
    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    /// Poses `joint` at `degrees`. Only that node's local transform changes.
    pub fn set_angle(&mut self, joint: Joint, degrees: f32) {
        self.angles[joint] = degrees;
        self.graph.set_local(self.node(joint), joint_local(joint, degrees));
    }

    /// Rotates `joint` by `delta` degrees and returns the new angle.
    pub fn rotate(&mut self, joint: Joint, delta: f32) -> f32 {
        let a = crate::joint::wrap_degrees(self.angle(joint) + delta);
        self.set_angle(joint, a);
        a
    }

    /// Re-poses every joint.
    pub fn set_pose(&mut self, angles: &JointAngles) {
        for joint in Joint::ALL {
            self.set_angle(joint, angles[joint]);
        }
    }

    /// Highlights `joint`'s part and clears any other highlight.
    pub fn select(&mut self, joint: Joint) {
        for j in Joint::ALL {
            if let Some(node) = self.graph.get_mut(self.nodes[j.index()]) {
                node.render.selected = j == joint;
            }
        }
    }

    /// Records every part into `list` in traversal order.
    pub fn draw(&self, base: Mat4, list: &mut DrawList) -> TraversalStats {
        traverse_all(&self.graph, base, list)
    }
}
