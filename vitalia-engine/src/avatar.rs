//! Avatar identifiers and the level-based unlock table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the fixed avatar images shipped with the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvatarId {
    #[default]
    #[serde(rename = "avatar-1")]
    Sprout,
    #[serde(rename = "avatar-2")]
    Seedling,
    #[serde(rename = "avatar-3")]
    Walker,
    #[serde(rename = "avatar-4")]
    Runner,
    #[serde(rename = "avatar-5")]
    Athlete,
    #[serde(rename = "avatar-6")]
    Champion,
}

impl AvatarId {
    /// Asset key the presentation layer uses to resolve the image.
    #[must_use]
    pub const fn asset_key(self) -> &'static str {
        match self {
            Self::Sprout => "avatar-1",
            Self::Seedling => "avatar-2",
            Self::Walker => "avatar-3",
            Self::Runner => "avatar-4",
            Self::Athlete => "avatar-5",
            Self::Champion => "avatar-6",
        }
    }
}

impl fmt::Display for AvatarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_key())
    }
}

/// Sparse unlock table. Levels without an entry keep the previous avatar.
#[must_use]
pub const fn unlock_for_level(level: u32) -> Option<AvatarId> {
    match level {
        2 => Some(AvatarId::Seedling),
        4 => Some(AvatarId::Walker),
        6 => Some(AvatarId::Runner),
        8 => Some(AvatarId::Athlete),
        10 => Some(AvatarId::Champion),
        _ => None,
    }
}
