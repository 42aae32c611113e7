//! Active daily targets for a user.

use serde::{Deserialize, Serialize};

use crate::config::ProgressionConfig;
use crate::error::ValidationError;
use crate::progression::Metric;

/// A user's active daily targets. Replaced, not versioned, on edit;
/// exactly one goal is active per user at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub water_target_ml: u32,
    pub calorie_target: u32,
    pub active: bool,
}

impl Goal {
    /// Build a goal from user-entered targets.
    ///
    /// # Errors
    ///
    /// Returns an error when either target is not positive.
    pub fn new(water_target_ml: i64, calorie_target: i64) -> Result<Self, ValidationError> {
        let water = validate_target("water_target_ml", water_target_ml)?;
        let calories = validate_target("calorie_target", calorie_target)?;
        Ok(Self {
            water_target_ml: water,
            calorie_target: calories,
            active: true,
        })
    }

    /// Goal created on first dashboard access when the user has none.
    #[must_use]
    pub const fn default_for(config: &ProgressionConfig) -> Self {
        Self {
            water_target_ml: config.default_water_target_ml,
            calorie_target: config.default_calorie_target,
            active: true,
        }
    }

    /// Target for the given metric.
    #[must_use]
    pub const fn target_for(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Water => self.water_target_ml,
            Metric::Calories => self.calorie_target,
        }
    }
}

fn validate_target(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveTarget { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::AmountOutOfRange { value })
}
