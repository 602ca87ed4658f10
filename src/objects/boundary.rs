use crate::error::{ensure_finite_vec, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// A fixed wall. Endpoints never change once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    segment: LineSegment,
}

impl Boundary {
    /// Fails if either endpoint has a NaN or infinite coordinate.
    pub fn new(start: Vec2, end: Vec2) -> PhysicsResult<Self> {
        let start = ensure_finite_vec("start", start)?;
        let end = ensure_finite_vec("end", end)?;
        Ok(Self {
            segment: LineSegment::new(start, end),
        })
    }

    pub fn start(&self) -> Vec2 {
        self.segment.start
    }

    pub fn end(&self) -> Vec2 {
        self.segment.end
    }

    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    /// Unit direction from start to end.
    pub fn unit(&self) -> Vec2 {
        self.segment.unit()
    }

    pub fn normal(&self) -> Vec2 {
        self.segment.normal()
    }

    /// The four edges of an axis-aligned box with a corner at the origin:
    /// top, right, bottom, left.
    pub fn rectangle(width: f64, height: f64) -> PhysicsResult<[Boundary; 4]> {
        let top_left = Vec2::new(0.0, 0.0);
        let top_right = Vec2::new(width, 0.0);
        let bottom_right = Vec2::new(width, height);
        let bottom_left = Vec2::new(0.0, height);
        Ok([
            Boundary::new(top_left, top_right)?,
            Boundary::new(top_right, bottom_right)?,
            Boundary::new(bottom_right, bottom_left)?,
            Boundary::new(bottom_left, top_left)?,
        ])
    }
}
