//! Arbitration configuration: loss bands, style ceiling, smoothing.
//!
//! Loaded from TOML with strict keys: unknown fields are rejected at load
//! time instead of silently ignored. Target rating and personality name are
//! caller inputs, not part of this file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArbiterError;
use crate::skill::{self, SkillAnchor, SkillProfile};

/// An inclusive centipawn-loss range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LossBand {
    pub min: i32,
    pub max: i32,
}

impl LossBand {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, loss: i32) -> bool {
        loss >= self.min && loss <= self.max
    }
}

/// Tunables for the move arbitrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ArbiterConfig {
    /// True-loss range that counts as a deliberate inaccuracy.
    pub inaccuracy_band: LossBand,
    /// True-loss range that counts as a deliberate blunder.
    pub blunder_band: LossBand,
    /// Max true loss for a non-top tactical move to pass as brilliant.
    pub brilliancy_window: i32,
    /// Hard cap on centipawns given up purely for style.
    pub style_ceiling: i32,
    /// Damping per recent same-category decision; 0 = none, 1 = never
    /// repeat within the smoothing window.
    pub smoothing: f64,
    /// Optional override of the compiled-in skill anchor curve.
    pub skill_anchors: Option<Vec<SkillAnchor>>,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            inaccuracy_band: LossBand::new(20, 80),
            blunder_band: LossBand::new(150, 600),
            brilliancy_window: 15,
            style_ceiling: 100,
            smoothing: 0.5,
            skill_anchors: None,
        }
    }
}

impl ArbiterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ArbiterError> {
        let config: ArbiterConfig =
            toml::from_str(text).map_err(|e| ArbiterError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArbiterError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ArbiterError::InvalidConfig(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve a skill profile using this config's anchor table if present,
    /// otherwise the compiled-in curve.
    pub fn resolve_skill(&self, target_rating: i32) -> SkillProfile {
        match &self.skill_anchors {
            Some(anchors) => SkillProfile::resolve_with_anchors(target_rating, anchors),
            None => SkillProfile::resolve(target_rating),
        }
    }

    pub fn validate(&self) -> Result<(), ArbiterError> {
        for (name, band) in [
            ("inaccuracy_band", self.inaccuracy_band),
            ("blunder_band", self.blunder_band),
        ] {
            if band.min < 0 || band.min > band.max {
                return Err(ArbiterError::InvalidConfig(format!(
                    "{} must satisfy 0 <= min <= max, got {}..{}",
                    name, band.min, band.max
                )));
            }
        }
        if self.brilliancy_window < 0 {
            return Err(ArbiterError::InvalidConfig(
                "brilliancy_window must be non-negative".into(),
            ));
        }
        if self.style_ceiling < 0 {
            return Err(ArbiterError::InvalidConfig(
                "style_ceiling must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(ArbiterError::InvalidConfig(format!(
                "smoothing must lie in [0, 1], got {}",
                self.smoothing
            )));
        }
        if let Some(anchors) = &self.skill_anchors {
            skill::validate_anchors(anchors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
