//! Minimal feature graph consumed by the synthesis passes: nodes, way
//! segments and the per-segment rail representation attached during
//! classification.

use bevy::prelude::*;

use crate::config::{CLEARANCE_ABOVE, CLEARANCE_BELOW, MIN_SEGMENT_LENGTH, NODE_SNAP_DIST};
use crate::geom::right_of;
use crate::ground::GroundState;
use crate::tags::{RailwayClass, TagStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(pub u32);

#[derive(Debug, Clone)]
pub struct MapNode {
    pub id: NodeId,
    pub position: Vec2,
    pub connected_segments: Vec<SegmentId>,
}

/// Railway representation of one way segment. Created once during the
/// classification pass, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RailSegment {
    pub class: RailwayClass,
    pub ground: GroundState,
    /// Lateral width of the ballast footprint.
    pub width: f32,
    /// Distance the geometry is pulled back from the start/end node where a
    /// junction claims the shared ground.
    pub clip_start: f32,
    pub clip_end: f32,
}

impl RailSegment {
    pub fn new(class: RailwayClass, ground: GroundState, width: f32) -> Self {
        Self {
            class,
            ground,
            width,
            clip_start: 0.0,
            clip_end: 0.0,
        }
    }

    /// Vertical clearing demanded above the track surface.
    pub fn clearance_above(&self) -> f32 {
        CLEARANCE_ABOVE
    }

    pub fn clearance_below(&self) -> f32 {
        CLEARANCE_BELOW
    }
}

/// One way segment of the feature graph: two endpoints with denormalized
/// positions, the feature's tags, and an optional rail representation.
#[derive(Debug, Clone)]
pub struct WaySegment {
    pub id: SegmentId,
    pub start_node: NodeId,
    pub end_node: NodeId,
    pub start: Vec2,
    pub end: Vec2,
    pub tags: TagStore,
    rail: Option<RailSegment>,
}

impl WaySegment {
    /// Typed accessor for the railway representation; segments that did not
    /// classify as railway return `None`.
    pub fn rail(&self) -> Option<&RailSegment> {
        self.rail.as_ref()
    }

    pub(crate) fn rail_mut(&mut self) -> Option<&mut RailSegment> {
        self.rail.as_mut()
    }

    pub(crate) fn attach_rail(&mut self, rail: RailSegment) {
        self.rail = Some(rail);
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    pub fn right_normal(&self) -> Vec2 {
        right_of(self.direction())
    }

    /// Unit direction pointing away from `node` along this segment.
    pub fn direction_from(&self, node: NodeId) -> Vec2 {
        if node == self.start_node {
            self.direction()
        } else {
            -self.direction()
        }
    }

    fn clips(&self) -> (f32, f32) {
        self.rail
            .as_ref()
            .map_or((0.0, 0.0), |rail| (rail.clip_start, rail.clip_end))
    }

    /// Start point after junction trimming.
    pub fn clipped_start(&self) -> Vec2 {
        self.start + self.direction() * self.clips().0
    }

    pub fn clipped_end(&self) -> Vec2 {
        self.end - self.direction() * self.clips().1
    }

    pub fn clipped_length(&self) -> f32 {
        let (clip_start, clip_end) = self.clips();
        self.length() - clip_start - clip_end
    }

    /// Zero-length and over-trimmed segments produce no geometry.
    pub fn is_degenerate(&self) -> bool {
        self.clipped_length() < MIN_SEGMENT_LENGTH
    }
}

/// The feature graph. Nodes and segments are only ever appended; the
/// classification pass mutates each segment's own representation and
/// nothing else.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    pub nodes: Vec<MapNode>,
    pub segments: Vec<WaySegment>,
    next_node_id: u32,
    next_segment_id: u32,
}

impl RailNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an existing node within `NODE_SNAP_DIST`, or create a new one.
    pub fn find_or_create_node(&mut self, position: Vec2) -> NodeId {
        for node in &self.nodes {
            if (node.position - position).length() < NODE_SNAP_DIST {
                return node.id;
            }
        }
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(MapNode {
            id,
            position,
            connected_segments: Vec::new(),
        });
        id
    }

    /// Add a way segment between two endpoint positions, snapping each to an
    /// existing node where one is close enough.
    pub fn add_way(&mut self, from: Vec2, to: Vec2, tags: TagStore) -> SegmentId {
        let start_node = self.find_or_create_node(from);
        let end_node = self.find_or_create_node(to);
        let id = SegmentId(self.next_segment_id);
        self.next_segment_id += 1;

        let start = self.node_position(start_node);
        let end = self.node_position(end_node);
        self.segments.push(WaySegment {
            id,
            start_node,
            end_node,
            start,
            end,
            tags,
            rail: None,
        });

        for node in &mut self.nodes {
            if node.id == start_node || node.id == end_node {
                node.connected_segments.push(id);
            }
        }
        id
    }

    fn node_position(&self, id: NodeId) -> Vec2 {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.position)
            .unwrap_or_default()
    }

    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn segment(&self, id: SegmentId) -> Option<&WaySegment> {
        self.segments.iter().find(|segment| segment.id == id)
    }

    pub(crate) fn segment_mut(&mut self, id: SegmentId) -> Option<&mut WaySegment> {
        self.segments.iter_mut().find(|segment| segment.id == id)
    }

    /// How many of the node's connected segments carry a rail
    /// representation.
    pub fn rail_arm_count(&self, node: &MapNode) -> usize {
        node.connected_segments
            .iter()
            .filter_map(|&id| self.segment(id))
            .filter(|segment| segment.rail().is_some())
            .count()
    }
}
