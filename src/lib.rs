//! Real-time 2D physics for non-rotating disks bouncing off each other and
//! off fixed wall segments.
//!
//! Build a [`World`], add [`Body`] and [`Boundary`] values to it, steer the
//! controlled bodies, then call [`World::advance_one_tick`] once per frame and
//! read positions back for drawing.

pub mod collision;
pub mod common;
pub mod config;
pub mod control;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Collider, Contact};
pub use common::Material;
pub use config::WorldConfig;
pub use control::DirectionalInput;
pub use error::{PhysicsError, PhysicsResult};
pub use math::vec2::Vec2;
pub use objects::{Body, Boundary};
pub use shapes::{Circle, LineSegment};
pub use world::{BodyHandle, BoundaryHandle, World};
