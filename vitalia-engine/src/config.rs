//! Progression tuning exposed as a config structure.
//!
//! Defaults mirror the constants in [`crate::constants`]; a deployment can
//! deserialize an override from JSON but the shipped dashboard runs on the
//! defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALORIE_TARGET, DEFAULT_WATER_TARGET_ML, HISTORY_WINDOW_DAYS, XP_AWARD_CALORIES,
    XP_AWARD_WATER, XP_PER_LEVEL_STEP,
};
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// XP granted on the water goal's false-to-true transition.
    #[serde(default = "default_xp_water")]
    pub xp_award_water: u32,
    /// XP granted on the calorie goal's false-to-true transition.
    #[serde(default = "default_xp_calories")]
    pub xp_award_calories: u32,
    /// Linear level curve slope: level N needs N * step XP to advance.
    #[serde(default = "default_level_step")]
    pub xp_per_level_step: u32,
    #[serde(default = "default_water_target")]
    pub default_water_target_ml: u32,
    #[serde(default = "default_calorie_target")]
    pub default_calorie_target: u32,
    /// Number of recent daily records the history summary covers.
    #[serde(default = "default_history_window")]
    pub history_window_days: usize,
}

const fn default_xp_water() -> u32 {
    XP_AWARD_WATER
}
const fn default_xp_calories() -> u32 {
    XP_AWARD_CALORIES
}
const fn default_level_step() -> u32 {
    XP_PER_LEVEL_STEP
}
const fn default_water_target() -> u32 {
    DEFAULT_WATER_TARGET_ML
}
const fn default_calorie_target() -> u32 {
    DEFAULT_CALORIE_TARGET
}
const fn default_history_window() -> usize {
    HISTORY_WINDOW_DAYS
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ProgressionConfig {
    /// The tuning the shipped dashboard runs on.
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            xp_award_water: XP_AWARD_WATER,
            xp_award_calories: XP_AWARD_CALORIES,
            xp_per_level_step: XP_PER_LEVEL_STEP,
            default_water_target_ml: DEFAULT_WATER_TARGET_ML,
            default_calorie_target: DEFAULT_CALORIE_TARGET,
            history_window_days: HISTORY_WINDOW_DAYS,
        }
    }

    /// XP required to leave the given level. Level is always >= 1, so the
    /// threshold is always positive for a validated config.
    #[must_use]
    pub const fn xp_threshold(&self, level: u32) -> u32 {
        level.saturating_mul(self.xp_per_level_step)
    }

    /// Reject tunings that would stall or divide-by-zero the level curve.
    ///
    /// # Errors
    ///
    /// Returns an error when the level step is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.xp_per_level_step == 0 {
            return Err(ValidationError::ZeroLevelStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_shipped_tuning() {
        let cfg = ProgressionConfig::default();
        assert_eq!(cfg.xp_award_water, 50);
        assert_eq!(cfg.xp_award_calories, 75);
        assert_eq!(cfg.xp_threshold(1), 100);
        assert_eq!(cfg.xp_threshold(7), 700);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ProgressionConfig = serde_json::from_str(r#"{"xp_award_water": 10}"#).unwrap();
        assert_eq!(cfg.xp_award_water, 10);
        assert_eq!(cfg.xp_award_calories, 75);
        assert_eq!(cfg.history_window_days, 30);
    }

    #[test]
    fn zero_level_step_is_rejected() {
        let cfg = ProgressionConfig {
            xp_per_level_step: 0,
            ..ProgressionConfig::default_config()
        };
        assert_eq!(cfg.validate(), Err(ValidationError::ZeroLevelStep));
    }
}
