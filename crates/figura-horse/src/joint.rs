//! Joint identifiers and the joint-angle table.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Horse joints. Discriminants index [`JointAngles`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Joint {
    Torso = 0,
    Head = 1,
    LeftUpperArm = 2,
    LeftLowerArm = 3,
    RightUpperArm = 4,
    RightLowerArm = 5,
    LeftUpperLeg = 6,
    LeftLowerLeg = 7,
    RightUpperLeg = 8,
    RightLowerLeg = 9,
    Neck = 10,
}

impl Joint {
    pub const COUNT: usize = 11;

    /// All joints in table order.
    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::Torso,
        Joint::Head,
        Joint::LeftUpperArm,
        Joint::LeftLowerArm,
        Joint::RightUpperArm,
        Joint::RightLowerArm,
        Joint::LeftUpperLeg,
        Joint::LeftLowerLeg,
        Joint::RightUpperLeg,
        Joint::RightLowerLeg,
        Joint::Neck,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Joint::Torso => "torso",
            Joint::Head => "head",
            Joint::LeftUpperArm => "left upper arm",
            Joint::LeftLowerArm => "left lower arm",
            Joint::RightUpperArm => "right upper arm",
            Joint::RightLowerArm => "right lower arm",
            Joint::LeftUpperLeg => "left upper leg",
            Joint::LeftLowerLeg => "left lower leg",
            Joint::RightUpperLeg => "right upper leg",
            Joint::RightLowerLeg => "right lower leg",
            Joint::Neck => "neck",
        }
    }

    /// Next joint in table order, wrapping.
    pub fn next(self) -> Joint {
        Joint::ALL[(self.index() + 1) % Joint::COUNT]
    }

    /// Previous joint in table order, wrapping.
    pub fn prev(self) -> Joint {
        Joint::ALL[(self.index() + Joint::COUNT - 1) % Joint::COUNT]
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joint angles in degrees, one per [`Joint`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JointAngles([f32; Joint::COUNT]);

impl JointAngles {
    /// Rest pose: limbs folded down under the torso, head bent forward.
    pub const INITIAL: JointAngles = JointAngles([
        0.0,   // torso
        -80.0, // head
        180.0, // left upper arm
        0.0,   // left lower arm
        180.0, // right upper arm
        0.0,   // right lower arm
        170.0, // left upper leg
        10.0,  // left lower leg
        170.0, // right upper leg
        10.0,  // right lower leg
        -45.0, // neck
    ]);

    pub const ZERO: JointAngles = JointAngles([0.0; Joint::COUNT]);
}

impl Default for JointAngles {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Index<Joint> for JointAngles {
    type Output = f32;

    #[inline]
    fn index(&self, joint: Joint) -> &f32 {
        &self.0[joint.index()]
    }
}

impl IndexMut<Joint> for JointAngles {
    #[inline]
    fn index_mut(&mut self, joint: Joint) -> &mut f32 {
        &mut self.0[joint.index()]
    }
}

/// Maps `degrees` into `(-180, 180]`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let d = degrees.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}
