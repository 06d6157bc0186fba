//! Types for merged junction geometry.

use bevy::prelude::*;

use crate::ground::GroundState;
use crate::network::SegmentId;

/// Merged ground polygon at a junction node. Derived on demand from the
/// adjacent segments' near-end outline vertices; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionArea {
    /// Vertex loop, arms ordered by bearing around the node.
    pub vertices: Vec<Vec3>,
    /// Reduction over the connected segments' ground states.
    pub ground: GroundState,
}

/// One rail arm meeting the junction, with its near-end outline vertices.
/// `near_left`/`near_right` are relative to the outgoing direction, i.e. as
/// seen standing on the node looking down the arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Approach {
    pub segment: SegmentId,
    /// Unit planar direction pointing away from the node.
    pub outgoing: Vec2,
    pub near_left: Vec3,
    pub near_right: Vec3,
}

impl Approach {
    /// Unit direction of travel arriving at the node.
    pub fn incoming(&self) -> Vec2 {
        -self.outgoing
    }
}
