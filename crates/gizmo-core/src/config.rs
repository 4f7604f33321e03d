//! Gizmo tuning parameters
//!
//! Defaults match the stock editor gizmo. A JSON document may override any subset.

use serde::{Deserialize, Serialize};

use crate::error::GizmoError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoConfig {
    /// Alpha applied to every handle vertex
    pub alpha: f32,
    /// World units of translation per unit of normalized mouse movement, before gizmo scale
    pub sensitivity: f32,
    /// Scale changes smaller than this are ignored
    pub scale_epsilon: f32,
    /// Smallest gizmo scale; anything below it or non-finite is clamped up to it
    pub min_scale: f32,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            sensitivity: 10.0,
            scale_epsilon: 1e-4,
            min_scale: 1e-3,
        }
    }
}

impl GizmoConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GizmoError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GizmoError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(GizmoError::InvalidConfig(format!(
                "alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }

        for (name, value) in [
            ("sensitivity", self.sensitivity),
            ("scale_epsilon", self.scale_epsilon),
            ("min_scale", self.min_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GizmoError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
