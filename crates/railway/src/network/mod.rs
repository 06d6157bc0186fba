//! Feature graph and its classification pass.
//!
//! The graph itself is deliberately minimal: the synthesizer only needs
//! endpoints, connectivity and tags. Everything geometric derives from
//! those on demand.

mod classify;
mod types;

pub use classify::classify_network;
pub use types::{MapNode, NodeId, RailNetwork, RailSegment, SegmentId, WaySegment};
