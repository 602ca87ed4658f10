use crate::objects::Body;

/// Advances the body by one tick with semi-implicit Euler and a fixed unit timestep.
///
/// The control direction is rescaled to the body's acceleration cap, added to the
/// velocity, the velocity is damped by `friction`, then the position moves by the
/// damped velocity. Immovable bodies integrate like any other.
pub fn integrate(body: &mut Body, friction: f64) {
    let acceleration = body.acceleration().unit() * body.acceleration_cap();
    body.acceleration = acceleration;

    body.velocity += acceleration;
    body.velocity *= 1.0 - friction;
    body.position += body.velocity;
}
