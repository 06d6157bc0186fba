//! Shared computational-geometry helpers: strip stitching, paired-line
//! interpolation and point distribution along a centerline. The synthesis
//! components use these, they never reimplement them.

use bevy::prelude::*;

/// Map a planar ground position to a world point at the given height.
/// Ground coordinates are (x, z); world points are (x, height, z).
pub fn lift(position: Vec2, height: f32) -> Vec3 {
    Vec3::new(position.x, height, position.y)
}

/// Right-hand normal of a planar direction (forward cross up, y-up).
pub fn right_of(direction: Vec2) -> Vec2 {
    Vec2::new(-direction.y, direction.x)
}

/// Interleave two equal-length boundary lines into triangle-strip vertex
/// order: a0 b0 a1 b1 ...
pub fn strip_between(left: &[Vec3], right: &[Vec3]) -> Vec<Vec3> {
    debug_assert_eq!(left.len(), right.len());
    let mut vertices = Vec::with_capacity(left.len() * 2);
    for (l, r) in left.iter().zip(right) {
        vertices.push(*l);
        vertices.push(*r);
    }
    vertices
}

/// Pointwise interpolation between two paired boundary lines at parameter
/// `t` (0 = left, 1 = right).
pub fn line_between(left: &[Vec3], right: &[Vec3], t: f32) -> Vec<Vec3> {
    debug_assert_eq!(left.len(), right.len());
    left.iter().zip(right).map(|(l, r)| l.lerp(*r, t)).collect()
}

/// `n` evenly spaced points between `start` and `end`. Without endpoints the
/// points sit at the centers of `n` equal spans, strictly inside the
/// segment.
pub fn distribute_along(n: usize, include_endpoints: bool, start: Vec2, end: Vec2) -> Vec<Vec2> {
    match (n, include_endpoints) {
        (0, _) => Vec::new(),
        (1, true) => vec![start.lerp(end, 0.5)],
        (n, true) => (0..n)
            .map(|i| start.lerp(end, i as f32 / (n - 1) as f32))
            .collect(),
        (n, false) => (0..n)
            .map(|i| start.lerp(end, (i as f32 + 0.5) / n as f32))
            .collect(),
    }
}

/// Sample a straight centerline every `spacing` units. Both endpoints are
/// always included, so the result has at least two points.
pub fn sample_centerline(start: Vec2, end: Vec2, spacing: f32) -> Vec<Vec2> {
    let spans = ((start.distance(end) / spacing).ceil() as usize).max(1);
    (0..=spans)
        .map(|i| start.lerp(end, i as f32 / spans as f32))
        .collect()
}

/// Per-sample unit tangents of a polyline, from neighbor differences with
/// one-sided differences at the ends. Polylines with fewer than two points
/// have no tangent direction.
pub fn polyline_tangents(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 2 {
        return vec![Vec2::ZERO; points.len()];
    }
    let last = points.len() - 1;
    (0..points.len())
        .map(|i| {
            let delta = if i == 0 {
                points[1] - points[0]
            } else if i == last {
                points[last] - points[last - 1]
            } else {
                points[i + 1] - points[i - 1]
            };
            delta.normalize_or_zero()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_interleaves() {
        let left = vec![Vec3::ZERO, Vec3::X];
        let right = vec![Vec3::Y, Vec3::ONE];
        let strip = strip_between(&left, &right);
        assert_eq!(strip, vec![Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::ONE]);
    }

    #[test]
    fn test_line_between_midpoint() {
        let left = vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)];
        let right = vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 2.0)];
        let mid = line_between(&left, &right, 0.5);
        assert_eq!(mid[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mid[1], Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_distribute_excluding_endpoints() {
        let points = distribute_along(3, false, Vec2::ZERO, Vec2::new(6.0, 0.0));
        assert_eq!(points.len(), 3);
        assert!((points[0].x - 1.0).abs() < 1e-6);
        assert!((points[1].x - 3.0).abs() < 1e-6);
        assert!((points[2].x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distribute_including_endpoints() {
        let points = distribute_along(3, true, Vec2::ZERO, Vec2::new(6.0, 0.0));
        assert_eq!(points[0], Vec2::ZERO);
        assert_eq!(points[2], Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_distribute_zero_is_empty() {
        assert!(distribute_along(0, false, Vec2::ZERO, Vec2::X).is_empty());
    }

    #[test]
    fn test_sample_centerline_includes_both_ends() {
        let samples = sample_centerline(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Vec2::ZERO);
        assert_eq!(samples[4], Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_sample_centerline_short_segment_two_points() {
        let samples = sample_centerline(Vec2::ZERO, Vec2::new(0.5, 0.0), 2.5);
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_polyline_tangents_straight() {
        let tangents = polyline_tangents(&[Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0)]);
        for tangent in tangents {
            assert!((tangent - Vec2::X).length() < 1e-6);
        }
    }

    #[test]
    fn test_right_of_rotation() {
        assert!((right_of(Vec2::X) - Vec2::Y).length() < 1e-6);
        assert!((right_of(Vec2::Y) + Vec2::X).length() < 1e-6);
    }
}
