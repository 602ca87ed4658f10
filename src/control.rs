//! Directional player input mapped to a control-acceleration direction.

use crate::math::vec2::Vec2;

/// Held state of the four direction keys for one tick.
///
/// Screen coordinates: x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalInput {
    pub left: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
}

impl DirectionalInput {
    pub fn new(left: bool, up: bool, right: bool, down: bool) -> Self {
        Self { left, up, right, down }
    }

    /// Axis-wise direction; each component is -1, 0 or 1.
    /// With both keys of an axis held, right and down take precedence.
    pub fn direction(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.down {
            1.0
        } else if self.up {
            -1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}
