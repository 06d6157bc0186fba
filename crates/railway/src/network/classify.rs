//! The one-shot classification pass over the whole feature graph.

use bevy::prelude::*;

use crate::config::{GROUND_WIDTH, JUNCTION_TRIM, MIN_JUNCTION_ARMS};
use crate::ground::{resolve_ground_state, StructureClassifier};
use crate::tags::RailwayClass;

use super::types::{RailNetwork, RailSegment, SegmentId};

/// Attach a rail representation to every way segment whose tags classify as
/// railway, then pull segment ends back from nodes where enough rails meet
/// for merged junction geometry. Runs once; every representation is
/// immutable afterwards, so all later geometry passes are read-only.
pub fn classify_network(network: &mut RailNetwork, structures: &impl StructureClassifier) {
    for segment in &mut network.segments {
        if let Some(class) = RailwayClass::from_tags(&segment.tags) {
            let ground = resolve_ground_state(&segment.tags, structures);
            segment.attach_rail(RailSegment::new(class, ground, GROUND_WIDTH));
        }
    }

    // Junction trimming. Collected first so the node scan only needs shared
    // borrows of the segment list.
    let mut trims: Vec<(SegmentId, bool)> = Vec::new();
    for node in &network.nodes {
        if network.rail_arm_count(node) < MIN_JUNCTION_ARMS {
            continue;
        }
        for &id in &node.connected_segments {
            let Some(segment) = network.segment(id) else {
                continue;
            };
            if segment.rail().is_none() {
                continue;
            }
            trims.push((id, segment.start_node == node.id));
        }
    }
    for (id, at_start) in trims {
        let Some(segment) = network.segment_mut(id) else {
            continue;
        };
        let trim = JUNCTION_TRIM.min(segment.length() * 0.25);
        let Some(rail) = segment.rail_mut() else {
            continue;
        };
        if at_start {
            rail.clip_start = trim;
        } else {
            rail.clip_end = trim;
        }
    }

    debug!(
        "classified {} rail segments across {} ways",
        network
            .segments
            .iter()
            .filter(|segment| segment.rail().is_some())
            .count(),
        network.segments.len()
    );
}
