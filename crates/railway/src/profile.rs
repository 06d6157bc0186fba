//! The fixed 2D cross-section swept along a path to build the rail mesh.

use bevy::prelude::*;

/// Rail cross-section control points in a local (lateral, vertical) frame at
/// unit scale: foot, web and head of one rail, left to right.
const RAIL_BASE_PROFILE: [Vec2; 10] = [
    Vec2::new(-0.45, 0.0),
    Vec2::new(-0.1, 0.1),
    Vec2::new(-0.1, 0.5),
    Vec2::new(-0.25, 0.55),
    Vec2::new(-0.25, 0.75),
    Vec2::new(0.25, 0.75),
    Vec2::new(0.25, 0.55),
    Vec2::new(0.1, 0.5),
    Vec2::new(0.1, 0.1),
    Vec2::new(0.45, 0.0),
];

/// An ordered, immutable profile. Built once via a pure factory and shared
/// by every extrusion instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    points: Vec<Vec2>,
}

impl CrossSection {
    pub fn new(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 2, "a profile needs at least one edge");
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of quadrilateral ribbons an extrusion of this profile yields.
    pub fn edge_count(&self) -> usize {
        self.points.len() - 1
    }
}

/// Scaled rail profile, lifted vertically so the rail foot sits on top of
/// the sleepers. Every caller gets an independent value; derived variants
/// go through this factory instead of mutating shared state.
pub fn rail_profile(scale: f32, lift: f32) -> CrossSection {
    CrossSection::new(
        RAIL_BASE_PROFILE
            .iter()
            .map(|p| Vec2::new(p.x * scale, p.y * scale + lift))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_profile_scales_and_lifts() {
        let profile = rail_profile(0.25, 0.125);
        assert_eq!(profile.points().len(), 10);
        assert_eq!(profile.edge_count(), 9);
        // First point: (-0.45, 0.0) scaled by 0.25, lifted by 0.125.
        let first = profile.points()[0];
        assert!((first.x + 0.1125).abs() < 1e-6);
        assert!((first.y - 0.125).abs() < 1e-6);
        // Head top: (0.25, 0.75) -> (0.0625, 0.3125).
        let head = profile.points()[5];
        assert!((head.x - 0.0625).abs() < 1e-6);
        assert!((head.y - 0.3125).abs() < 1e-6);
    }

    #[test]
    fn test_factory_returns_independent_values() {
        let a = rail_profile(1.0, 0.0);
        let b = rail_profile(1.0, 0.0);
        assert_eq!(a, b);
        let c = rail_profile(2.0, 0.0);
        assert_ne!(a, c);
    }
}
