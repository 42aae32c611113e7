//! Centralized balance constants for Vitalia progression logic.
//!
//! These values define the deterministic math for the gamification layer.
//! Keeping them together ensures that progression tuning can only be
//! adjusted via code changes reviewed in version control.

// Experience awards ---------------------------------------------------------
/// XP granted when the daily water goal flips to achieved.
pub(crate) const XP_AWARD_WATER: u32 = 50;
/// XP granted when the daily calorie goal flips to achieved.
/// Higher than water: calorie tracking is treated as the harder goal.
pub(crate) const XP_AWARD_CALORIES: u32 = 75;

// Level curve ---------------------------------------------------------------
/// Linear threshold slope: level N requires N * this much XP to advance.
pub(crate) const XP_PER_LEVEL_STEP: u32 = 100;
pub(crate) const BASE_LEVEL: u32 = 1;

// Default goals -------------------------------------------------------------
pub(crate) const DEFAULT_WATER_TARGET_ML: u32 = 2_000;
pub(crate) const DEFAULT_CALORIE_TARGET: u32 = 2_000;

// History -------------------------------------------------------------------
/// The history feed summarizes at most this many recent daily records.
pub(crate) const HISTORY_WINDOW_DAYS: usize = 30;
