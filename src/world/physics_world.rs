use log::{debug, trace, warn};

use crate::{
    collision::{self, Collider, Contact},
    config::WorldConfig,
    control::DirectionalInput,
    error::{PhysicsError, PhysicsResult},
    integration::integrator,
    math::vec2::Vec2,
    objects::{Body, Boundary},
};

/// Stable index of a body inside the `World` that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

/// Stable index of a boundary inside the `World` that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundaryHandle(usize);

impl BodyHandle {
    /// Position in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl BoundaryHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every body and boundary of a simulation and advances them tick by tick.
///
/// Both collections keep insertion order and never shrink, so handles stay
/// valid for the world's lifetime.
#[derive(Debug, Clone, Default)]
pub struct World {
    bodies: Vec<Body>,
    boundaries: Vec<Boundary>,
    config: WorldConfig,
    // Collisions resolved during the last tick
    contacts: Vec<Contact>,
}

impl World {
    /// Creates a new, empty world with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world, rejecting an invalid configuration.
    pub fn with_config(config: WorldConfig) -> PhysicsResult<Self> {
        config.validate()?;
        debug!("creating world with friction {}", config.friction);
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Adds a body to the world and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        debug!(
            "adding body {} at {:?} (radius {}, mass {})",
            handle.0,
            body.position,
            body.radius(),
            body.mass()
        );
        self.bodies.push(body);
        handle
    }

    /// Adds a boundary to the world and returns its handle.
    pub fn add_boundary(&mut self, boundary: Boundary) -> BoundaryHandle {
        let handle = BoundaryHandle(self.boundaries.len());
        debug!(
            "adding boundary {} from {:?} to {:?}",
            handle.0,
            boundary.start(),
            boundary.end()
        );
        self.boundaries.push(boundary);
        handle
    }

    /// Encloses the region `[0, width] x [0, height]` with four walls.
    pub fn add_bounding_box(
        &mut self,
        width: f64,
        height: f64,
    ) -> PhysicsResult<[BoundaryHandle; 4]> {
        let walls = Boundary::rectangle(width, height)?;
        Ok(walls.map(|wall| self.add_boundary(wall)))
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    pub fn boundary(&self, handle: BoundaryHandle) -> Option<&Boundary> {
        self.boundaries.get(handle.0)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i), body))
    }

    /// Boundaries in insertion order.
    pub fn boundaries(&self) -> impl Iterator<Item = (BoundaryHandle, &Boundary)> {
        self.boundaries
            .iter()
            .enumerate()
            .map(|(i, boundary)| (BoundaryHandle(i), boundary))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn controlled_bodies(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies()
            .filter(|(_, body)| body.is_controlled())
            .map(|(handle, _)| handle)
    }

    /// Sets the control direction of one body ahead of the next tick.
    pub fn set_control_direction(
        &mut self,
        handle: BodyHandle,
        direction: Vec2,
    ) -> PhysicsResult<()> {
        match self.bodies.get_mut(handle.0) {
            Some(body) => body.set_control_direction(direction),
            None => {
                warn!("control direction set on unknown body {:?}", handle);
                Err(PhysicsError::UnknownBody(handle))
            }
        }
    }

    /// Steers every controlled body with the same directional input.
    pub fn apply_control(&mut self, input: DirectionalInput) {
        let direction = input.direction();
        // key directions are always finite
        for body in self.bodies.iter_mut().filter(|b| b.is_controlled()) {
            body.acceleration = direction;
        }
    }

    /// Collisions found during the last tick, in the order they were resolved.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Advances the simulation by one tick.
    ///
    /// For each body in insertion order: resolve it against every boundary,
    /// then against every later body, then integrate it. Later bodies see the
    /// positions already updated earlier in the same tick.
    pub fn advance_one_tick(&mut self) {
        self.contacts.clear();
        let friction = self.config.friction;

        for i in 0..self.bodies.len() {
            self.collide_with_boundaries(i);

            for j in (i + 1)..self.bodies.len() {
                self.collide_pair(i, j);
            }

            integrator::integrate(&mut self.bodies[i], friction);
        }
    }

    /// Alias of [`World::advance_one_tick`].
    pub fn step(&mut self) {
        self.advance_one_tick();
    }

    fn collide_with_boundaries(&mut self, i: usize) {
        let body = &mut self.bodies[i];
        for (w, boundary) in self.boundaries.iter().enumerate() {
            if !collision::body_overlaps_boundary(body, boundary) {
                continue;
            }

            let contact = Contact {
                body: BodyHandle(i),
                other: Collider::Boundary(BoundaryHandle(w)),
                normal: (body.position - collision::closest_point_on_segment(body, boundary))
                    .unit(),
                depth: collision::boundary_penetration_depth(body, boundary),
            };
            trace!("contact {:?}", contact);
            self.contacts.push(contact);

            collision::resolve_body_boundary_penetration(body, boundary);
            collision::respond_body_boundary(body, boundary);
        }
    }

    fn collide_pair(&mut self, i: usize, j: usize) {
        debug_assert!(i < j);
        // split so both bodies can be borrowed mutably
        let (head, tail) = self.bodies.split_at_mut(j);
        let body_a = &mut head[i];
        let body_b = &mut tail[0];

        if !collision::body_overlaps_body(body_a, body_b) {
            return;
        }

        let contact = Contact {
            body: BodyHandle(i),
            other: Collider::Body(BodyHandle(j)),
            normal: (body_a.position - body_b.position).unit(),
            depth: collision::body_penetration_depth(body_a, body_b),
        };
        trace!("contact {:?}", contact);
        self.contacts.push(contact);

        if body_a.is_immovable() && body_b.is_immovable() {
            debug!("bodies {} and {} are both immovable, skipping", i, j);
            return;
        }

        collision::resolve_body_body_penetration(body_a, body_b);
        collision::respond_body_body(body_a, body_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    fn frictionless_world() -> World {
        World::with_config(WorldConfig::frictionless()).unwrap()
    }

    fn disk(x: f64, y: f64, radius: f64, mass: f64) -> Body {
        Body::new(Vec2::new(x, y), radius, mass).unwrap()
    }

    #[test]
    fn test_world_new() {
        let world = World::new();
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.boundary_count(), 0);
        assert_eq!(world.config().friction, 0.05);
        assert!(world.contacts().is_empty());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        assert!(World::with_config(WorldConfig { friction: 2.0 }).is_err());
    }

    #[test]
    fn test_add_body_and_boundary() {
        let mut world = World::new();
        let h1 = world.add_body(disk(0.0, 0.0, 1.0, 1.0));
        let h2 = world.add_body(disk(5.0, 0.0, 1.0, 2.0));
        let w = world.add_boundary(Boundary::new(Vec2::ZERO, Vec2::new(1.0, 0.0)).unwrap());
        assert_eq!(h1.index(), 0);
        assert_eq!(h2.index(), 1);
        assert_eq!(w.index(), 0);
        assert_eq!(world.body(h2).unwrap().mass(), 2.0);
        assert_eq!(world.boundary(w).unwrap().end(), Vec2::new(1.0, 0.0));

        let order: Vec<BodyHandle> = world.bodies().map(|(h, _)| h).collect();
        assert_eq!(order, vec![h1, h2]);
    }

    #[test]
    fn test_add_bounding_box() {
        let mut world = World::new();
        let walls = world.add_bounding_box(200.0, 100.0).unwrap();
        assert_eq!(world.boundary_count(), 4);
        assert_eq!(world.boundary(walls[2]).unwrap().start(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_stationary_overlapping_pair_separates() {
        let mut world = frictionless_world();
        let a = world.add_body(disk(0.0, 0.0, 10.0, 1.0).with_elasticity(1.0).unwrap());
        let b = world.add_body(disk(15.0, 0.0, 10.0, 1.0).with_elasticity(1.0).unwrap());

        world.advance_one_tick();

        let a = world.body(a).unwrap();
        let b = world.body(b).unwrap();
        assert!((a.position.x - -2.5).abs() < EPSILON);
        assert!((b.position.x - 17.5).abs() < EPSILON);
        assert!(((b.position.x - a.position.x) - 20.0).abs() < EPSILON);
        assert_eq!(a.velocity, Vec2::ZERO);
        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(world.contacts().len(), 1);
        assert!((world.contacts()[0].depth - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_separated_bodies_only_integrate() {
        let mut world = World::new();
        let a = world.add_body(disk(0.0, 0.0, 1.0, 1.0));
        let b = world.add_body(disk(50.0, 0.0, 1.0, 1.0));
        world.body_mut(a).unwrap().set_velocity(Vec2::new(1.0, 0.0)).unwrap();
        world.body_mut(b).unwrap().set_velocity(Vec2::new(-2.0, 0.0)).unwrap();

        world.step();

        assert!(world.contacts().is_empty());
        assert!((world.body(a).unwrap().position.x - 0.95).abs() < EPSILON);
        assert!((world.body(b).unwrap().position.x - 48.1).abs() < EPSILON);
    }

    #[test]
    fn test_inelastic_boundary_bounce() {
        let mut world = frictionless_world();
        let wall = Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)).unwrap();
        world.add_boundary(wall);
        let h = world.add_body(disk(50.0, 8.0, 10.0, 1.0).with_elasticity(0.0).unwrap());
        world.body_mut(h).unwrap().set_velocity(Vec2::new(2.0, -3.0)).unwrap();

        world.advance_one_tick();

        let body = world.body(h).unwrap();
        assert!((body.velocity.x - 2.0).abs() < EPSILON);
        assert!(body.velocity.y.abs() < EPSILON);
        assert!((body.position.x - 52.0).abs() < EPSILON);
        assert!((body.position.y - 10.0).abs() < EPSILON);

        let contact = world.contacts()[0];
        assert_eq!(contact.other, Collider::Boundary(BoundaryHandle(0)));
        assert!((contact.normal.y - 1.0).abs() < EPSILON);
        assert!((contact.depth - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_immovable_body_untouched_by_collisions() {
        let mut world = frictionless_world();
        let wall = Boundary::new(Vec2::new(40.0, 0.0), Vec2::new(40.0, 100.0)).unwrap();
        world.add_boundary(wall);
        let post = world.add_body(disk(50.0, 50.0, 10.0, 0.0));
        let ball = world.add_body(disk(60.0, 50.0, 10.0, 1.0));
        world.body_mut(ball).unwrap().set_velocity(Vec2::new(-3.0, 0.0)).unwrap();

        world.advance_one_tick();

        let post_body = world.body(post).unwrap();
        assert_eq!(post_body.position, Vec2::new(50.0, 50.0));
        assert_eq!(post_body.velocity, Vec2::ZERO);

        let ball_body = world.body(ball).unwrap();
        assert!((ball_body.velocity.x - 3.0).abs() < EPSILON);
        assert!((ball_body.position.x - 73.0).abs() < EPSILON);
    }

    #[test]
    fn test_two_immovable_bodies_overlap_is_noop() {
        let mut world = frictionless_world();
        let a = world.add_body(disk(0.0, 0.0, 10.0, 0.0));
        let b = world.add_body(disk(5.0, 0.0, 10.0, 0.0));

        world.advance_one_tick();

        assert_eq!(world.body(a).unwrap().position, Vec2::ZERO);
        assert_eq!(world.body(b).unwrap().position, Vec2::new(5.0, 0.0));
        assert_eq!(world.contacts().len(), 1);
    }

    #[test]
    fn test_contacts_follow_resolution_order() {
        let mut world = frictionless_world();
        let wall = Boundary::new(Vec2::new(-50.0, 0.0), Vec2::new(50.0, 0.0)).unwrap();
        world.add_boundary(wall);
        world.add_body(disk(0.0, 5.0, 10.0, 1.0));
        world.add_body(disk(0.0, 30.0, 10.0, 1.0));

        world.advance_one_tick();

        // body 0 is pushed off the wall to y = 10, which makes it touch body 1
        let contacts = world.contacts();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].other, Collider::Boundary(BoundaryHandle(0)));
        assert_eq!(contacts[1].body, BodyHandle(0));
        assert_eq!(contacts[1].other, Collider::Body(BodyHandle(1)));
    }

    #[test]
    fn test_apply_control_moves_only_controlled_bodies() {
        let mut world = World::new();
        let player = world.add_body(disk(0.0, 0.0, 1.0, 1.0).controlled());
        let npc = world.add_body(disk(100.0, 0.0, 1.0, 1.0));
        assert_eq!(world.controlled_bodies().collect::<Vec<_>>(), vec![player]);

        world.apply_control(DirectionalInput::new(false, false, true, false));
        world.advance_one_tick();

        let player_body = world.body(player).unwrap();
        assert!((player_body.velocity.x - 4.75).abs() < EPSILON);
        assert!((player_body.position.x - 4.75).abs() < EPSILON);
        assert_eq!(world.body(npc).unwrap().position, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_set_control_direction_unknown_handle() {
        let mut other = World::new();
        other.add_body(disk(0.0, 0.0, 1.0, 1.0));
        let foreign = other.add_body(disk(10.0, 0.0, 1.0, 1.0));

        let mut world = World::new();
        let own = world.add_body(disk(0.0, 0.0, 1.0, 1.0));

        assert!(world.set_control_direction(own, Vec2::new(0.0, 1.0)).is_ok());
        assert_eq!(
            world.set_control_direction(foreign, Vec2::new(0.0, 1.0)),
            Err(PhysicsError::UnknownBody(foreign))
        );
    }

    #[test]
    fn test_non_finite_control_direction_is_rejected() {
        let mut world = World::new();
        let h = world.add_body(disk(0.0, 0.0, 1.0, 1.0).controlled());

        let result = world.set_control_direction(h, Vec2::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(PhysicsError::InvalidParameter { .. })));
        assert!(world
            .set_control_direction(h, Vec2::new(0.0, f64::NEG_INFINITY))
            .is_err());

        world.advance_one_tick();

        let body = world.body(h).unwrap();
        assert!(body.position().x.is_finite() && body.position().y.is_finite());
        assert_eq!(body.position(), Vec2::ZERO);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_add_bounding_box_rejects_non_finite_size() {
        let mut world = World::new();
        assert!(world.add_bounding_box(f64::NAN, 100.0).is_err());
        assert_eq!(world.boundary_count(), 0);
    }

    #[test]
    fn test_total_kinetic_energy() {
        let mut world = World::new();
        let a = world.add_body(disk(0.0, 0.0, 1.0, 2.0));
        world.add_body(disk(10.0, 0.0, 1.0, 0.0));
        world.body_mut(a).unwrap().set_velocity(Vec2::new(0.0, 3.0)).unwrap();
        assert!((world.total_kinetic_energy() - 9.0).abs() < EPSILON);
    }
}
