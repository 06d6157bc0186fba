//! Junction geometry: merged ground polygon and rail connectors.

use bevy::prelude::*;

use crate::config::{MIN_JUNCTION_ARMS, RAIL_INSET};
use crate::elevation::ElevationProvider;
use crate::geom::strip_between;
use crate::ground::{merge_ground_states, GroundState};
use crate::network::{MapNode, RailNetwork};
use crate::outline::segment_outlines;

use super::types::{Approach, JunctionArea};

/// Collect the rail arms meeting at `node`, each with its near-end outline
/// vertices. Arms whose geometry is suppressed (degenerate segments)
/// simply do not contribute.
pub(crate) fn gather_approaches(
    node: &MapNode,
    network: &RailNetwork,
    elevation: &impl ElevationProvider,
) -> Vec<Approach> {
    let mut approaches = Vec::new();
    for &id in &node.connected_segments {
        let Some(segment) = network.segment(id) else {
            continue;
        };
        if segment.rail().is_none() {
            continue;
        }
        let Some(outlines) = segment_outlines(segment, elevation) else {
            continue;
        };
        let outgoing = segment.direction_from(node.id);
        let (near_left, near_right) = if segment.start_node == node.id {
            (outlines.left[0], outlines.right[0])
        } else {
            // Seen from the node the segment runs the other way: sides swap
            // and the near end is the outline tail.
            let (Some(&left), Some(&right)) = (outlines.right.last(), outlines.left.last())
            else {
                continue;
            };
            (left, right)
        };
        approaches.push(Approach {
            segment: id,
            outgoing,
            near_left,
            near_right,
        });
    }
    approaches
}

fn bearing(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x)
}

/// Merged ground polygon from already-gathered approaches. Fewer than
/// [`MIN_JUNCTION_ARMS`] rail arms produce no geometry. This is an
/// explicit no-op, not an error.
pub(crate) fn area_from(
    node: &MapNode,
    network: &RailNetwork,
    approaches: &[Approach],
) -> Option<JunctionArea> {
    if approaches.len() < MIN_JUNCTION_ARMS {
        return None;
    }
    let mut ordered: Vec<&Approach> = approaches.iter().collect();
    ordered.sort_by(|a, b| bearing(a.outgoing).total_cmp(&bearing(b.outgoing)));

    // Walking the arms in bearing order, each contributes its left then its
    // right near corner, closing into a simple loop around the node.
    let mut vertices = Vec::with_capacity(ordered.len() * 2);
    for approach in ordered {
        vertices.push(approach.near_left);
        vertices.push(approach.near_right);
    }
    Some(JunctionArea {
        vertices,
        ground: junction_ground_state(node, network),
    })
}

/// Merged ground polygon at `node`, derived on demand.
pub fn junction_area(
    node: &MapNode,
    network: &RailNetwork,
    elevation: &impl ElevationProvider,
) -> Option<JunctionArea> {
    let approaches = gather_approaches(node, network, elevation);
    area_from(node, network, &approaches)
}

/// Ground state of the junction: the reduction over all connected rail
/// segments' states, falling back to `On` on any mismatch.
pub fn junction_ground_state(node: &MapNode, network: &RailNetwork) -> GroundState {
    merge_ground_states(
        node.connected_segments
            .iter()
            .filter_map(|&id| network.segment(id))
            .filter_map(|segment| segment.rail())
            .map(|rail| rail.ground),
    )
}

/// Greedy pairing of rail arms for connector geometry: repeatedly connect
/// the remaining pair whose incoming directions form the most obtuse angle
/// (smallest dot product), closest to a straight-through continuation.
/// Only obtuse pairs connect (an acute pair would visually cross the
/// junction), ties resolve to the lowest arm indices, and leftover arms
/// get no connector.
pub(crate) fn pair_arms(approaches: &[Approach]) -> Vec<(usize, usize)> {
    let mut paired = vec![false; approaches.len()];
    let mut pairs = Vec::new();
    loop {
        let mut best: Option<(usize, usize, f32)> = None;
        for i in 0..approaches.len() {
            if paired[i] {
                continue;
            }
            for j in i + 1..approaches.len() {
                if paired[j] {
                    continue;
                }
                let dot = approaches[i].incoming().dot(approaches[j].incoming());
                if dot >= 0.0 {
                    continue;
                }
                if best.map_or(true, |(_, _, d)| dot < d) {
                    best = Some((i, j, dot));
                }
            }
        }
        let Some((i, j, _)) = best else {
            break;
        };
        paired[i] = true;
        paired[j] = true;
        pairs.push((i, j));
    }
    pairs
}

/// Ribbon joining the rail anchor rows of two paired arms. The arms face
/// each other, so one row is traversed reversed to keep the strip from
/// twisting: each rail continues into the opposing arm's matching rail.
pub(crate) fn connector_strip(a: &Approach, b: &Approach) -> Vec<Vec3> {
    let a_rails = [
        a.near_left.lerp(a.near_right, RAIL_INSET),
        a.near_left.lerp(a.near_right, 1.0 - RAIL_INSET),
    ];
    let b_rails = [
        b.near_right.lerp(b.near_left, RAIL_INSET),
        b.near_right.lerp(b.near_left, 1.0 - RAIL_INSET),
    ];
    strip_between(&a_rails, &b_rails)
}
