//! Emission pass: turns the classified network into drawing-sink
//! primitives. Per-segment work only reads the segment's own immutable
//! inputs plus the elevation provider; junction work additionally reads the
//! adjacent segments' outlines, which is why [`render_network`] sequences
//! the junction pass strictly after the segment pass.

use bevy::prelude::*;

use crate::config::{RAIL_INSET, RAIL_PROFILE_SCALE, SLEEPER_COUNT, SLEEPER_HEIGHT};
use crate::elevation::ElevationProvider;
use crate::extrude::extrude_along;
use crate::geom::{line_between, strip_between};
use crate::junction::{area_from, connector_strip, gather_approaches, pair_arms};
use crate::network::{MapNode, RailNetwork, WaySegment};
use crate::outline::segment_outlines;
use crate::profile::{rail_profile, CrossSection};
use crate::sink::{DrawSink, Material};
use crate::sleepers::place_sleepers;

/// Emit one segment: a ballast ground strip between the paired outlines,
/// two rails swept along interpolated outline lines, and the sleeper boxes.
/// Unclassified and degenerate segments emit nothing.
pub fn render_segment(
    segment: &WaySegment,
    elevation: &impl ElevationProvider,
    profile: &CrossSection,
    sink: &mut impl DrawSink,
) {
    let Some(outlines) = segment_outlines(segment, elevation) else {
        return;
    };

    sink.draw_triangle_strip(
        Material::Ballast,
        &strip_between(&outlines.left, &outlines.right),
    );

    // Both rails ride the same shared profile, offset as fractions of the
    // paired-outline interpolation parameter.
    for t in [RAIL_INSET, 1.0 - RAIL_INSET] {
        let rail_line = line_between(&outlines.left, &outlines.right, t);
        let ups = vec![Vec3::Y; rail_line.len()];
        for strip in extrude_along(profile, &rail_line, &ups) {
            sink.draw_triangle_strip(Material::Rail, &strip);
        }
    }

    for sleeper in place_sleepers(
        segment.clipped_start(),
        segment.clipped_end(),
        segment.direction(),
        segment.right_normal(),
        SLEEPER_COUNT,
        elevation,
    ) {
        sink.draw_box(
            Material::Sleeper,
            sleeper.origin,
            sleeper.right,
            sleeper.up,
            sleeper.back,
        );
    }
}

/// Emit merged geometry for one node: the junction ground polygon plus a
/// connector ribbon per paired set of continuing rails. Nodes with fewer
/// than the minimum rail arms are a documented no-op.
pub fn render_junction(
    node: &MapNode,
    network: &RailNetwork,
    elevation: &impl ElevationProvider,
    sink: &mut impl DrawSink,
) {
    let approaches = gather_approaches(node, network, elevation);
    let Some(area) = area_from(node, network, &approaches) else {
        return;
    };
    sink.draw_polygon(Material::Ballast, &area.vertices);
    for (i, j) in pair_arms(&approaches) {
        debug!(
            "connecting rails of segments {:?} and {:?} at node {:?}",
            approaches[i].segment, approaches[j].segment, node.id
        );
        sink.draw_triangle_strip(
            Material::Rail,
            &connector_strip(&approaches[i], &approaches[j]),
        );
    }
}

/// Run the full emission over a classified network. The rail profile is
/// built once and shared by every extrusion; the junction pass runs only
/// after every segment's outlines are available.
pub fn render_network(
    network: &RailNetwork,
    elevation: &impl ElevationProvider,
    sink: &mut impl DrawSink,
) {
    let profile = rail_profile(RAIL_PROFILE_SCALE, SLEEPER_HEIGHT);
    for segment in &network.segments {
        render_segment(segment, elevation, &profile, sink);
    }
    for node in &network.nodes {
        render_junction(node, network, elevation, sink);
    }
}
