//! Sweep of a fixed cross-section along a framed 3D path.

use bevy::prelude::*;

use crate::geom::strip_between;
use crate::profile::CrossSection;

/// Unit tangent per path vertex from neighbor differences, one-sided at the
/// ends.
fn path_tangents(path: &[Vec3]) -> Vec<Vec3> {
    let last = path.len() - 1;
    (0..path.len())
        .map(|i| {
            let delta = if i == 0 {
                path[1] - path[0]
            } else if i == last {
                path[last] - path[last - 1]
            } else {
                path[i + 1] - path[i - 1]
            };
            delta.normalize_or_zero()
        })
        .collect()
}

/// Place an oriented copy of `profile` at every (point, up) frame of the
/// path and stitch consecutive copies index-for-index: one triangle-strip
/// ribbon per profile edge, each of length `2 * path.len()`.
///
/// Profile x maps to the local right axis (tangent cross up), profile y to
/// the local up axis, so vertex ordering and winding stay consistent along
/// the whole path. Paths with fewer than two points
/// produce nothing.
pub fn extrude_along(profile: &CrossSection, path: &[Vec3], ups: &[Vec3]) -> Vec<Vec<Vec3>> {
    debug_assert_eq!(path.len(), ups.len());
    if path.len() < 2 {
        return Vec::new();
    }

    let tangents = path_tangents(path);
    let mut rings: Vec<Vec<Vec3>> = Vec::with_capacity(path.len());
    for ((center, tangent), up) in path.iter().zip(&tangents).zip(ups) {
        let up = up.normalize_or_zero();
        let mut right = tangent.cross(up);
        if right.length_squared() < 1e-12 {
            // Tangent parallel to up; any horizontal axis keeps the ring planar.
            right = Vec3::X;
        }
        let right = right.normalize();
        rings.push(
            profile
                .points()
                .iter()
                .map(|p| *center + right * p.x + up * p.y)
                .collect(),
        );
    }

    let mut strips = Vec::with_capacity(profile.edge_count());
    for j in 0..profile.edge_count() {
        let near: Vec<Vec3> = rings.iter().map(|ring| ring[j]).collect();
        let far: Vec<Vec3> = rings.iter().map(|ring| ring[j + 1]).collect();
        strips.push(strip_between(&near, &far));
    }
    strips
}
