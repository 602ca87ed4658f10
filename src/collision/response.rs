//! Impulse exchange applied once positional overlap has been corrected.

use crate::collision::detection::closest_point_on_segment;
use crate::objects::{Body, Boundary};

/// Reflects the body's velocity component along the wall's outward normal,
/// scaled by the body's elasticity. The tangential component is untouched.
pub fn respond_body_boundary(body: &mut Body, boundary: &Boundary) {
    if body.is_immovable() {
        return;
    }
    let normal = (body.position - closest_point_on_segment(body, boundary)).unit();
    let separating_velocity = body.velocity.dot(normal);
    let new_separating_velocity = -separating_velocity * body.elasticity();
    body.velocity += normal * (new_separating_velocity - separating_velocity);
}

/// Exchanges an impulse along the line of centers. The pair's restitution is
/// the lower of the two elasticities. Two immovable bodies exchange nothing.
pub fn respond_body_body(a: &mut Body, b: &mut Body) {
    let total_inv_mass = a.inv_mass() + b.inv_mass();
    if total_inv_mass == 0.0 {
        return;
    }
    let normal = (a.position - b.position).unit();
    let relative_velocity = a.velocity - b.velocity;
    let separating_velocity = relative_velocity.dot(normal);
    let new_separating_velocity =
        -separating_velocity * a.material().combined_elasticity(b.material());

    let impulse = (new_separating_velocity - separating_velocity) / total_inv_mass;
    let impulse_vec = normal * impulse;

    a.velocity += impulse_vec * a.inv_mass();
    b.velocity -= impulse_vec * b.inv_mass();
}
