//! Core progression rules: goal-achievement transitions and the level curve.
//!
//! Both entry points are pure state transitions over the caller-supplied
//! record or ledger; persistence happens in the engine facade afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::avatar::{AvatarId, unlock_for_level};
use crate::config::ProgressionConfig;
use crate::goal::Goal;
use crate::ledger::ProgressionLedger;
use crate::record::DailyRecord;

/// The two tracked consumption metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Water,
    Calories,
}

impl Metric {
    /// Fixed XP award for completing this metric's daily goal.
    #[must_use]
    pub const fn xp_award(self, config: &ProgressionConfig) -> u32 {
        match self {
            Self::Water => config.xp_award_water,
            Self::Calories => config.xp_award_calories,
        }
    }
}

/// One level transition, in the order it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
    /// Set when the unlock table has an entry for the new level.
    pub new_avatar: Option<AvatarId>,
}

/// Level-up events from one award. Almost always empty or a single entry.
pub type LevelUpEvents = SmallVec<[LevelUp; 1]>;

/// Apply a consumption update to the day's record.
///
/// `new_total` is the day's cumulative total, not a delta; the caller
/// accumulates before calling. The stored total is replaced, the achieved
/// flag transitions false-to-true when the goal target is reached, and the
/// returned XP award is non-zero exactly on that transition.
///
/// The ledger is untouched here; a positive award must be fed to
/// [`apply_xp`] as a separate, explicit step.
pub fn apply_consumption(
    record: &mut DailyRecord,
    goal: &Goal,
    metric: Metric,
    new_total: u32,
    config: &ProgressionConfig,
) -> u32 {
    let achieved_now = new_total >= goal.target_for(metric);
    let was_achieved = record.achieved(metric);

    record.set_consumed(metric, new_total);
    record.set_achieved(metric, achieved_now);

    if achieved_now && !was_achieved {
        let award = metric.xp_award(config);
        record.xp_earned = record.xp_earned.saturating_add(award);
        log::info!(
            "{metric:?} goal achieved on {}: +{award} xp",
            record.date
        );
        award
    } else {
        log::debug!(
            "{metric:?} total now {new_total} on {} (achieved={achieved_now})",
            record.date
        );
        0
    }
}

/// Credit an XP award to the ledger and resolve level transitions.
///
/// The threshold subtraction loops, so an award spanning several levels
/// yields one event per level in ascending order and leaves `current_xp`
/// strictly below the threshold for the final level. A zero award is a
/// no-op.
pub fn apply_xp(
    ledger: &mut ProgressionLedger,
    award: u32,
    config: &ProgressionConfig,
) -> LevelUpEvents {
    let mut events = LevelUpEvents::new();
    if award == 0 || config.xp_per_level_step == 0 {
        return events;
    }

    ledger.current_xp = ledger.current_xp.saturating_add(award);
    ledger.total_xp = ledger.total_xp.saturating_add(u64::from(award));

    while ledger.current_xp >= config.xp_threshold(ledger.current_level) {
        ledger.current_xp -= config.xp_threshold(ledger.current_level);
        ledger.current_level += 1;

        let unlocked = unlock_for_level(ledger.current_level);
        if let Some(avatar) = unlocked {
            ledger.avatar = avatar;
        }
        log::info!(
            "level up: now level {} ({} xp carried over)",
            ledger.current_level,
            ledger.current_xp
        );
        events.push(LevelUp {
            new_level: ledger.current_level,
            new_avatar: unlocked,
        });
    }

    events
}
