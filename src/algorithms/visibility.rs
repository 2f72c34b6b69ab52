use serde::Deserialize;
use std::f64::consts::FRAC_PI_4;

use crate::{Error, Result};

pub mod naive;

pub use naive::compute_visibility;

/// Angular offset, in radians, of the two extra rays cast beside every wall vertex.
///
/// Tunable. It has to exceed floating-point noise at the scene's scale, yet stay small
/// enough that the offset rays still strike the walls adjacent to the vertex. Values that
/// are too large misread corners next to very short walls.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Settings for [`compute_visibility`].
///
/// Loads from TOML; missing keys keep their defaults:
///
/// ```rust
/// use sightline::VisibilityConfig;
///
/// let config = VisibilityConfig::from_toml_str("epsilon = 1e-6")?;
/// assert_eq!(config.epsilon, 1e-6);
/// assert_eq!(VisibilityConfig::from_toml_str("")?, VisibilityConfig::default());
/// # Ok::<(), sightline::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisibilityConfig {
  pub epsilon: f64,
}

impl VisibilityConfig {
  pub fn new(epsilon: f64) -> Result<VisibilityConfig> {
    let config = VisibilityConfig { epsilon };
    config.validate()?;
    Ok(config)
  }

  pub fn from_toml_str(source: &str) -> Result<VisibilityConfig> {
    let config: VisibilityConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.epsilon.is_finite() && self.epsilon > 0.0 && self.epsilon < FRAC_PI_4 {
      Ok(())
    } else {
      Err(Error::InvalidEpsilon(self.epsilon))
    }
  }
}

impl Default for VisibilityConfig {
  fn default() -> Self {
    VisibilityConfig {
      epsilon: DEFAULT_EPSILON,
    }
  }
}
