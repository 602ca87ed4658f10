//! Discrete overlap tests between disks and wall segments.
//!
//! Only end-of-tick overlap is checked; a body fast enough to cross a wall
//! within one tick tunnels through it.

use crate::math::vec2::Vec2;
use crate::objects::{Body, Boundary};

/// Point on `boundary` nearest the center of `body`.
pub fn closest_point_on_segment(body: &Body, boundary: &Boundary) -> Vec2 {
    boundary.segment().closest_point(body.position)
}

/// True if the disk touches or crosses the wall.
pub fn body_overlaps_boundary(body: &Body, boundary: &Boundary) -> bool {
    let to_closest = closest_point_on_segment(body, boundary) - body.position;
    to_closest.magnitude() <= body.radius()
}

/// True if the two disks touch or overlap.
pub fn body_overlaps_body(a: &Body, b: &Body) -> bool {
    a.radius() + b.radius() >= (b.position - a.position).magnitude()
}

/// Depth by which `body` crosses `boundary`. Not meaningful without an overlap.
pub fn boundary_penetration_depth(body: &Body, boundary: &Boundary) -> f64 {
    body.radius() - (body.position - closest_point_on_segment(body, boundary)).magnitude()
}

/// Depth by which two disks overlap. Not meaningful without an overlap.
pub fn body_penetration_depth(a: &Body, b: &Body) -> f64 {
    a.radius() + b.radius() - (a.position - b.position).magnitude()
}
