//! Procedural railway geometry synthesis.
//!
//! Turns tagged linear map features and their connectivity into renderable
//! 3D primitives: ballast ground strips, swept rail profiles, sleeper boxes
//! and merged geometry at junction nodes. One classification pass over the
//! feature graph builds immutable per-segment representations; every
//! geometry pass then derives its output lazily from those, a terrain
//! elevation provider and a shared cross-section profile, and emits
//! material-tagged primitives into a drawing sink.

pub mod config;
pub mod elevation;
pub mod extrude;
pub mod geom;
pub mod ground;
pub mod junction;
pub mod network;
pub mod outline;
pub mod profile;
pub mod render;
pub mod sink;
pub mod sleepers;
pub mod tags;

pub use bevy::math::{Vec2, Vec3};
