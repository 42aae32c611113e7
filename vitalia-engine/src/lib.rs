//! Vitalia Progression Engine
//!
//! Platform-agnostic core logic for the Vitalia health dashboard's
//! gamification layer: daily water/calorie goals, experience awards, level
//! transitions, and avatar unlocks. This crate carries no UI or
//! platform-specific dependencies; the web layer consumes it through the
//! [`DashboardEngine`] facade and a [`ProgressStorage`] implementation.

pub mod avatar;
pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod goal;
pub mod history;
pub mod ledger;
pub mod progression;
pub mod record;

// Re-export commonly used types
pub use avatar::{AvatarId, unlock_for_level};
pub use calendar::{DATE_KEY_FORMAT, format_key, parse_key, today_key, window_start};
pub use config::ProgressionConfig;
pub use error::{EngineError, ValidationError};
pub use goal::Goal;
pub use history::HistorySummary;
pub use ledger::ProgressionLedger;
pub use progression::{LevelUp, LevelUpEvents, Metric, apply_consumption, apply_xp};
pub use record::DailyRecord;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Explicit user identity threaded through every engine call.
/// There is no ambient "current user" anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trait for abstracting persistence of goals, records, and ledgers.
/// Platform-specific implementations should provide this.
pub trait ProgressStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the user's active goal, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn active_goal(&self, user: &UserId) -> Result<Option<Goal>, Self::Error>;

    /// Persist a replacement active goal.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn save_goal(&self, user: &UserId, goal: &Goal) -> Result<Goal, Self::Error>;

    /// Fetch the record for the date, creating an all-zero one if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn load_or_create_record(
        &self,
        user: &UserId,
        date: NaiveDate,
    ) -> Result<DailyRecord, Self::Error>;

    /// Fetch the user's ledger, creating level-1 defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn load_or_create_ledger(&self, user: &UserId) -> Result<ProgressionLedger, Self::Error>;

    /// Persist a daily record.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn save_record(&self, user: &UserId, record: &DailyRecord) -> Result<DailyRecord, Self::Error>;

    /// Persist the user's ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn save_ledger(
        &self,
        user: &UserId,
        ledger: &ProgressionLedger,
    ) -> Result<ProgressionLedger, Self::Error>;

    /// Most recent daily records, newest first, at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage call fails.
    fn recent_records(&self, user: &UserId, limit: usize)
    -> Result<Vec<DailyRecord>, Self::Error>;

    /// Persist a record and ledger together after an XP award.
    ///
    /// The provided implementation issues the two writes in order.
    /// Transactional backends should override this so both writes commit
    /// as one atomic unit; a failure between them must roll back the
    /// record write.
    ///
    /// # Errors
    ///
    /// Returns an error if either storage call fails.
    fn save_day(
        &self,
        user: &UserId,
        record: &DailyRecord,
        ledger: &ProgressionLedger,
    ) -> Result<(), Self::Error> {
        self.save_record(user, record)?;
        self.save_ledger(user, ledger)?;
        Ok(())
    }
}

/// Everything the dashboard needs to render one user's day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub goal: Goal,
    pub record: DailyRecord,
    pub ledger: ProgressionLedger,
}

/// Result of one consumption update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionOutcome {
    pub record: DailyRecord,
    /// Updated ledger, present only when an XP award was applied.
    pub ledger: Option<ProgressionLedger>,
    pub xp_award: u32,
    pub level_ups: LevelUpEvents,
}

impl ConsumptionOutcome {
    /// Latest level transition, the one the UI animation surfaces.
    #[must_use]
    pub fn latest_level_up(&self) -> Option<&LevelUp> {
        self.level_ups.last()
    }

    #[must_use]
    pub fn leveled_up(&self) -> bool {
        !self.level_ups.is_empty()
    }
}

/// Main engine facade binding progression rules to a storage backend.
///
/// Every operation is one synchronous read-modify-write over a single
/// user's cells; after an XP award the record and ledger are committed
/// together through [`ProgressStorage::save_day`].
pub struct DashboardEngine<S>
where
    S: ProgressStorage,
{
    storage: S,
    config: ProgressionConfig,
}

impl<S> DashboardEngine<S>
where
    S: ProgressStorage,
{
    /// Create an engine with the shipped default tuning.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            config: ProgressionConfig::default_config(),
        }
    }

    /// Create an engine with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn with_config(storage: S, config: ProgressionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { storage, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Record a new cumulative consumption total for today.
    ///
    /// # Errors
    ///
    /// Returns an error if the total is invalid or a storage call fails.
    pub fn log_consumption(
        &self,
        user: &UserId,
        metric: Metric,
        new_total: i64,
    ) -> Result<ConsumptionOutcome, EngineError> {
        self.log_consumption_on(user, calendar::today_key(), metric, new_total)
    }

    /// Record a new cumulative consumption total for an explicit date.
    ///
    /// `new_total` replaces the stored total for the metric; callers
    /// accumulate before calling. Well-formed callers never pass a total
    /// smaller than the stored one.
    ///
    /// # Errors
    ///
    /// Returns an error if the total is invalid or a storage call fails.
    pub fn log_consumption_on(
        &self,
        user: &UserId,
        date: NaiveDate,
        metric: Metric,
        new_total: i64,
    ) -> Result<ConsumptionOutcome, EngineError> {
        let total = validate_amount(new_total)?;
        let goal = self.active_goal_or_default(user)?;
        let mut record = self
            .storage
            .load_or_create_record(user, date)
            .map_err(EngineError::persistence)?;

        let xp_award = progression::apply_consumption(&mut record, &goal, metric, total, &self.config);

        if xp_award == 0 {
            let record = self
                .storage
                .save_record(user, &record)
                .map_err(EngineError::persistence)?;
            return Ok(ConsumptionOutcome {
                record,
                ledger: None,
                xp_award: 0,
                level_ups: LevelUpEvents::new(),
            });
        }

        let mut ledger = self
            .storage
            .load_or_create_ledger(user)
            .map_err(EngineError::persistence)?;
        let level_ups = progression::apply_xp(&mut ledger, xp_award, &self.config);
        self.storage
            .save_day(user, &record, &ledger)
            .map_err(EngineError::persistence)?;

        Ok(ConsumptionOutcome {
            record,
            ledger: Some(ledger),
            xp_award,
            level_ups,
        })
    }

    /// Replace the user's active goal with new targets.
    ///
    /// # Errors
    ///
    /// Returns an error if a target is not positive or storage fails.
    pub fn update_goal(
        &self,
        user: &UserId,
        water_target_ml: i64,
        calorie_target: i64,
    ) -> Result<Goal, EngineError> {
        let goal = Goal::new(water_target_ml, calorie_target)?;
        self.storage
            .save_goal(user, &goal)
            .map_err(EngineError::persistence)
    }

    /// Load everything the dashboard renders for today, creating defaults
    /// on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage call fails.
    pub fn daily_snapshot(&self, user: &UserId) -> Result<DailySnapshot, EngineError> {
        self.snapshot_on(user, calendar::today_key())
    }

    /// Load the snapshot for an explicit date.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage call fails.
    pub fn snapshot_on(&self, user: &UserId, date: NaiveDate) -> Result<DailySnapshot, EngineError> {
        let goal = self.active_goal_or_default(user)?;
        let record = self
            .storage
            .load_or_create_record(user, date)
            .map_err(EngineError::persistence)?;
        let ledger = self
            .storage
            .load_or_create_ledger(user)
            .map_err(EngineError::persistence)?;
        Ok(DailySnapshot {
            goal,
            record,
            ledger,
        })
    }

    /// Summarize the user's recent history window.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage call fails.
    pub fn history(&self, user: &UserId) -> Result<HistorySummary, EngineError> {
        let records = self
            .storage
            .recent_records(user, self.config.history_window_days)
            .map_err(EngineError::persistence)?;
        Ok(HistorySummary::from_records(&records))
    }

    fn active_goal_or_default(&self, user: &UserId) -> Result<Goal, EngineError> {
        if let Some(goal) = self
            .storage
            .active_goal(user)
            .map_err(EngineError::persistence)?
        {
            return Ok(goal);
        }
        let goal = Goal::default_for(&self.config);
        log::debug!("no active goal for {}; creating defaults", user.as_str());
        self.storage
            .save_goal(user, &goal)
            .map_err(EngineError::persistence)
    }
}

fn validate_amount(value: i64) -> Result<u32, EngineError> {
    if value < 0 {
        return Err(ValidationError::NegativeAmount { value }.into());
    }
    u32::try_from(value).map_err(|_| ValidationError::AmountOutOfRange { value }.into())
}
