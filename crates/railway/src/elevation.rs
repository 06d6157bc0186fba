//! Terrain elevation lookup behind a trait so geometry generation stays
//! independent of how heights are computed.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::TERRAIN_BASE_FREQUENCY;

/// Terrain-following elevation lookup at a planar ground position.
pub trait ElevationProvider {
    fn elevation_at(&self, position: Vec2) -> f32;
}

/// Closures double as providers, which keeps test terrains one-liners.
impl<F: Fn(Vec2) -> f32> ElevationProvider for F {
    fn elevation_at(&self, position: Vec2) -> f32 {
        self(position)
    }
}

/// Constant-height terrain.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatElevation(pub f32);

impl ElevationProvider for FlatElevation {
    fn elevation_at(&self, _position: Vec2) -> f32 {
        self.0
    }
}

/// Seeded OpenSimplex2 terrain; raw noise is normalized to 0..1 and scaled
/// by `amplitude`.
pub struct NoiseElevation {
    noise: FastNoiseLite,
    amplitude: f32,
}

impl NoiseElevation {
    pub fn new(seed: i32, amplitude: f32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(TERRAIN_BASE_FREQUENCY));
        Self { noise, amplitude }
    }
}

impl ElevationProvider for NoiseElevation {
    fn elevation_at(&self, position: Vec2) -> f32 {
        let raw = self.noise.get_noise_2d(position.x, position.y);
        (raw + 1.0) * 0.5 * self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_elevation_is_constant() {
        let flat = FlatElevation(7.5);
        assert_eq!(flat.elevation_at(Vec2::ZERO), 7.5);
        assert_eq!(flat.elevation_at(Vec2::new(1000.0, -3.0)), 7.5);
    }

    #[test]
    fn test_closure_provider() {
        let sloped = |position: Vec2| position.x * 2.0;
        assert_eq!(sloped.elevation_at(Vec2::new(3.0, 99.0)), 6.0);
    }

    #[test]
    fn test_noise_elevation_bounds() {
        let terrain = NoiseElevation::new(42, 10.0);
        for i in 0..100 {
            let position = Vec2::new(i as f32 * 13.7, i as f32 * -5.3);
            let height = terrain.elevation_at(position);
            assert!(
                (0.0..=10.0).contains(&height),
                "height {height} out of bounds"
            );
        }
    }

    #[test]
    fn test_noise_elevation_deterministic() {
        let a = NoiseElevation::new(42, 10.0);
        let b = NoiseElevation::new(42, 10.0);
        for i in 0..20 {
            let position = Vec2::new(i as f32 * 7.1, i as f32 * 3.9);
            assert_eq!(a.elevation_at(position), b.elevation_at(position));
        }
    }
}
