//! Lateral boundary outlines of a segment's ground footprint.

use bevy::prelude::*;

use crate::config::OUTLINE_SAMPLE_SPACING;
use crate::elevation::ElevationProvider;
use crate::geom::{lift, polyline_tangents, right_of, sample_centerline};
use crate::network::WaySegment;

/// Which lateral boundary of the footprint, relative to the segment
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Offset every centerline sample by half the width along the local
/// right-normal. The height of each outline point is re-queried from the
/// elevation provider at the *offset* planar position, never interpolated
/// from the centerline endpoints. Both sides of one centerline always
/// produce outlines of identical length.
pub fn offset_outline(
    centerline: &[Vec2],
    width: f32,
    side: Side,
    elevation: &impl ElevationProvider,
) -> Vec<Vec3> {
    let tangents = polyline_tangents(centerline);
    centerline
        .iter()
        .zip(&tangents)
        .map(|(&point, &tangent)| {
            let offset = point + right_of(tangent) * (side.sign() * width * 0.5);
            lift(offset, elevation.elevation_at(offset))
        })
        .collect()
}

/// The paired boundary curves of one segment footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOutlines {
    pub left: Vec<Vec3>,
    pub right: Vec<Vec3>,
}

/// Outlines of a classified segment, derived on demand. Returns `None` for
/// segments without a rail representation and for degenerate geometry,
/// which is suppressed rather than propagated.
pub fn segment_outlines(
    segment: &WaySegment,
    elevation: &impl ElevationProvider,
) -> Option<SegmentOutlines> {
    let rail = segment.rail()?;
    if segment.is_degenerate() {
        debug!("suppressing geometry for degenerate segment {:?}", segment.id);
        return None;
    }
    let centerline = sample_centerline(
        segment.clipped_start(),
        segment.clipped_end(),
        OUTLINE_SAMPLE_SPACING,
    );
    Some(SegmentOutlines {
        left: offset_outline(&centerline, rail.width, Side::Left, elevation),
        right: offset_outline(&centerline, rail.width, Side::Right, elevation),
    })
}
