use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Returns the direction vector of the line segment (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unit direction from start to end. Zero for a degenerate segment.
    pub fn unit(&self) -> Vec2 {
        self.direction().unit()
    }

    /// Unit perpendicular, counter-clockwise from the direction.
    pub fn normal(&self) -> Vec2 {
        self.direction().normal()
    }

    /// Point on the segment nearest to `point`, found by projecting onto the
    /// segment's direction and clamping to the endpoints.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let dir = self.unit();

        let to_start = self.start - point;
        if dir.dot(to_start) > 0.0 {
            return self.start;
        }

        let past_end = point - self.end;
        if dir.dot(past_end) > 0.0 {
            return self.end;
        }

        let t = dir.dot(to_start);
        self.start - dir * t
    }
}
