//! Geometry constants for rail synthesis. Linear dimensions are in world
//! units (meters).

/// Full lateral width of the ballast ground strip.
pub const GROUND_WIDTH: f32 = 2.25;

/// Center-to-center spacing of the two rails.
pub const RAIL_DIST: f32 = 1.5;

/// Interpolation parameter of the first rail between the paired left/right
/// outlines; the second rail sits at `1.0 - RAIL_INSET`.
pub const RAIL_INSET: f32 = ((GROUND_WIDTH - RAIL_DIST) / GROUND_WIDTH) / 2.0;

/// Uniform scale applied to the unit rail cross-section profile.
pub const RAIL_PROFILE_SCALE: f32 = 0.25;

/// Sleeper extent along the right normal (crosswise to travel).
pub const SLEEPER_WIDTH: f32 = 2.0;

/// Sleeper extent along the travel direction.
pub const SLEEPER_LENGTH: f32 = 0.75;

pub const SLEEPER_HEIGHT: f32 = 0.125;

/// Sleepers per segment; they are spaced evenly with none at the endpoints.
pub const SLEEPER_COUNT: usize = 3;

/// Centerline sample spacing for terrain-following outlines.
pub const OUTLINE_SAMPLE_SPACING: f32 = 2.5;

/// Segments with a clipped length below this are degenerate and produce no
/// geometry.
pub const MIN_SEGMENT_LENGTH: f32 = 0.01;

/// Endpoints closer than this snap to an existing network node.
pub const NODE_SNAP_DIST: f32 = 0.5;

/// A node needs at least this many connected rail segments before merged
/// junction geometry is produced.
pub const MIN_JUNCTION_ARMS: usize = 3;

/// How far each rail arm is pulled back from a qualifying junction node so
/// the merged polygon owns the shared ground. Capped per segment so short
/// arms never invert.
pub const JUNCTION_TRIM: f32 = GROUND_WIDTH;

/// Vertical clearing demanded above the track surface.
pub const CLEARANCE_ABOVE: f32 = 5.0;

pub const CLEARANCE_BELOW: f32 = 0.0;

pub const TERRAIN_BASE_FREQUENCY: f32 = 0.008;

/// Default amplitude for the noise elevation provider: raw noise in [0, 1]
/// maps to [0, TERRAIN_HEIGHT_SCALE].
pub const TERRAIN_HEIGHT_SCALE: f32 = 40.0;
