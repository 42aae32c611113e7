//! Per-day consumption record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::progression::Metric;

/// One record per (user, calendar date). Consumption totals only ever grow
/// within a day, and each achieved flag flips false-to-true at most once.
/// Records are never deleted; they form the history feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub water_consumed_ml: u32,
    pub calories_consumed: u32,
    pub water_goal_achieved: bool,
    pub calories_goal_achieved: bool,
    /// Sum of all XP awarded for this date.
    pub xp_earned: u32,
}

impl DailyRecord {
    /// Fresh all-zero record, created on first access per day.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            water_consumed_ml: 0,
            calories_consumed: 0,
            water_goal_achieved: false,
            calories_goal_achieved: false,
            xp_earned: 0,
        }
    }

    /// Stored consumption total for the given metric.
    #[must_use]
    pub const fn consumed(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Water => self.water_consumed_ml,
            Metric::Calories => self.calories_consumed,
        }
    }

    /// Whether the given metric's goal has been achieved today.
    #[must_use]
    pub const fn achieved(&self, metric: Metric) -> bool {
        match metric {
            Metric::Water => self.water_goal_achieved,
            Metric::Calories => self.calories_goal_achieved,
        }
    }

    pub(crate) const fn set_consumed(&mut self, metric: Metric, total: u32) {
        match metric {
            Metric::Water => self.water_consumed_ml = total,
            Metric::Calories => self.calories_consumed = total,
        }
    }

    pub(crate) const fn set_achieved(&mut self, metric: Metric, achieved: bool) {
        match metric {
            Metric::Water => self.water_goal_achieved = achieved,
            Metric::Calories => self.calories_goal_achieved = achieved,
        }
    }
}
