//! Merged geometry at nodes where three or more rails converge.
//!
//! Junctions with fewer connected rail arms produce no geometry at all;
//! two meeting segments already share their outline ends. For qualifying
//! nodes the adjacent segments' near-end outline vertices merge into one
//! ground polygon, and pairs of arms that continue into each other get
//! connector ribbons between their rails.

mod geometry;
mod types;

pub use geometry::{junction_area, junction_ground_state};
pub use types::JunctionArea;

pub(crate) use geometry::{area_from, connector_strip, gather_approaches, pair_arms};
