//! World configuration.
//!
//! A `WorldConfig` can be built in code or read from RON:
//!
//! ```ron
//! (friction: 0.05)
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, PhysicsError, PhysicsResult};

/// Per-tick velocity damping applied when nothing else is configured.
pub const DEFAULT_FRICTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Fraction of velocity removed every tick. Range [0, 1].
    pub friction: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
        }
    }
}

impl WorldConfig {
    /// A config with no damping; bodies coast forever.
    pub fn frictionless() -> Self {
        Self { friction: 0.0 }
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        let friction = ensure_finite("friction", self.friction)?;
        if !(0.0..=1.0).contains(&friction) {
            return Err(PhysicsError::invalid(
                "friction",
                friction,
                "must lie within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Parses and validates a RON document.
    pub fn from_ron_str(source: &str) -> PhysicsResult<Self> {
        let config: WorldConfig =
            ron::from_str(source).map_err(|e| PhysicsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
