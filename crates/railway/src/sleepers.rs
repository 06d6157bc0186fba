//! Discrete crosswise support elements distributed along a segment.

use bevy::prelude::*;

use crate::config::{SLEEPER_HEIGHT, SLEEPER_LENGTH, SLEEPER_WIDTH};
use crate::elevation::ElevationProvider;
use crate::geom::{distribute_along, lift};

/// Oriented box descriptor: origin corner plus right/up/back edge vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleeperBox {
    pub origin: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub back: Vec3,
}

impl SleeperBox {
    /// Center of the box base, the point the elevation was queried at.
    pub fn base_center(&self) -> Vec3 {
        self.origin + self.right * 0.5 + self.back * 0.5
    }
}

/// Distribute `count` sleepers evenly along the clipped centerline, none at
/// the endpoints. Each box is placed at the true terrain height of its own
/// planar center, never an interpolation of the segment endpoint heights,
/// and oriented to the segment's local frame. The origin is the
/// front-lower-left corner: center minus half-right minus half-back.
pub fn place_sleepers(
    start: Vec2,
    end: Vec2,
    direction: Vec2,
    right_normal: Vec2,
    count: usize,
    elevation: &impl ElevationProvider,
) -> Vec<SleeperBox> {
    let right = lift(right_normal, 0.0) * SLEEPER_WIDTH;
    let back = lift(direction, 0.0) * SLEEPER_LENGTH;
    let up = Vec3::Y * SLEEPER_HEIGHT;

    distribute_along(count, false, start, end)
        .into_iter()
        .map(|position| {
            let center = lift(position, elevation.elevation_at(position));
            SleeperBox {
                origin: center - right * 0.5 - back * 0.5,
                right,
                up,
                back,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SLEEPER_COUNT;
    use crate::elevation::FlatElevation;

    #[test]
    fn test_default_count_is_three_strictly_inside() {
        let boxes = place_sleepers(
            Vec2::ZERO,
            Vec2::new(12.0, 0.0),
            Vec2::X,
            Vec2::Y,
            SLEEPER_COUNT,
            &FlatElevation(0.0),
        );
        assert_eq!(boxes.len(), 3);
        for sleeper in &boxes {
            let center = sleeper.base_center();
            assert!(center.x > 0.0 && center.x < 12.0);
        }
    }

    #[test]
    fn test_elevation_queried_per_sleeper_not_interpolated() {
        // Parabolic terrain: endpoint heights are equal, so any endpoint
        // interpolation would be constant while the true height varies.
        let terrain = |position: Vec2| (position.x - 6.0) * (position.x - 6.0) * 0.1;
        let boxes = place_sleepers(
            Vec2::ZERO,
            Vec2::new(12.0, 0.0),
            Vec2::X,
            Vec2::Y,
            3,
            &terrain,
        );
        for sleeper in &boxes {
            let center = sleeper.base_center();
            let expected = terrain.elevation_at(Vec2::new(center.x, center.z));
            assert!((center.y - expected).abs() < 1e-5);
        }
        // Centers at x = 2, 6, 10: heights 1.6, 0.0, 1.6.
        assert!((boxes[0].base_center().y - 1.6).abs() < 1e-4);
        assert!((boxes[1].base_center().y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_box_edges_match_constants_and_frame() {
        let boxes = place_sleepers(
            Vec2::ZERO,
            Vec2::new(12.0, 0.0),
            Vec2::X,
            Vec2::Y,
            1,
            &FlatElevation(2.0),
        );
        assert_eq!(boxes.len(), 1);
        let sleeper = boxes[0];
        assert!((sleeper.right - Vec3::new(0.0, 0.0, SLEEPER_WIDTH)).length() < 1e-6);
        assert!((sleeper.back - Vec3::new(SLEEPER_LENGTH, 0.0, 0.0)).length() < 1e-6);
        assert!((sleeper.up - Vec3::new(0.0, SLEEPER_HEIGHT, 0.0)).length() < 1e-6);
        // Origin is the front-lower-left corner of the box at x = 6.
        let expected_origin =
            Vec3::new(6.0 - SLEEPER_LENGTH * 0.5, 2.0, -SLEEPER_WIDTH * 0.5);
        assert!((sleeper.origin - expected_origin).length() < 1e-5);
    }
}
