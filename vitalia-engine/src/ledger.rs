//! Per-user progression ledger: level, experience, avatar.

use serde::{Deserialize, Serialize};

use crate::avatar::AvatarId;
use crate::config::ProgressionConfig;
use crate::constants::BASE_LEVEL;

/// Singleton per user. `current_xp` stays strictly below the threshold for
/// `current_level`; an award that reaches the threshold triggers a level
/// transition before the ledger is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionLedger {
    pub current_level: u32,
    pub current_xp: u32,
    /// Lifetime sum of all awarded experience. Never decreases.
    pub total_xp: u64,
    pub avatar: AvatarId,
}

impl Default for ProgressionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionLedger {
    /// Ledger created on first access: level 1, no experience, base avatar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_level: BASE_LEVEL,
            current_xp: 0,
            total_xp: 0,
            avatar: AvatarId::Sprout,
        }
    }

    /// XP still needed to reach the next level.
    #[must_use]
    pub const fn xp_to_next_level(&self, config: &ProgressionConfig) -> u32 {
        config
            .xp_threshold(self.current_level)
            .saturating_sub(self.current_xp)
    }

    /// Fill fraction for the XP bar, in `[0.0, 1.0)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self, config: &ProgressionConfig) -> f32 {
        let threshold = config.xp_threshold(self.current_level);
        if threshold == 0 {
            return 0.0;
        }
        self.current_xp as f32 / threshold as f32
    }
}
