//! Aggregate statistics over the recent history feed.

use serde::{Deserialize, Serialize};

use crate::record::DailyRecord;

/// Totals the history page renders above the day-by-day feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_days: usize,
    pub water_goals_achieved: usize,
    pub calorie_goals_achieved: usize,
    pub total_xp_earned: u64,
}

impl HistorySummary {
    /// Summarize a window of daily records, most recent first or not;
    /// the totals are order-independent.
    #[must_use]
    pub fn from_records(records: &[DailyRecord]) -> Self {
        Self {
            total_days: records.len(),
            water_goals_achieved: records.iter().filter(|r| r.water_goal_achieved).count(),
            calorie_goals_achieved: records.iter().filter(|r| r.calories_goal_achieved).count(),
            total_xp_earned: records.iter().map(|r| u64::from(r.xp_earned)).sum(),
        }
    }
}
