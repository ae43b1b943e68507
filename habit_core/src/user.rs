//! UserSnapshot - a fully enriched view of one player's account state
//!
//! Snapshots arrive from an upstream enrichment layer with gear and
//! quest references already resolved into full records. Everything
//! derived from a snapshot (stats, quest flags) is computed explicitly
//! rather than recomputed behind live accessors.

use crate::stats::{self, Stats};
use crate::types::{AttributeSet, EquipSlot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A piece of gear with per-dimension stat bonuses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GearItem {
    /// Display name
    #[serde(default)]
    pub text: String,
    /// Stat bonuses granted while equipped
    #[serde(flatten)]
    pub stats: AttributeSet,
    /// Primary class restriction, if any
    #[serde(default)]
    pub klass: Option<String>,
    /// Secondary class restriction for special event gear
    #[serde(rename = "specialClass", default)]
    pub special_class: Option<String>,
}

impl GearItem {
    /// Whether this item grants the flat 50% class bonus to a hero of
    /// the given class (primary or special restriction match)
    pub fn grants_class_bonus(&self, class_name: &str) -> bool {
        self.klass.as_deref() == Some(class_name)
            || self.special_class.as_deref() == Some(class_name)
    }
}

/// Active temporary stat modifiers, plus the stealth counter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Buffs {
    #[serde(flatten)]
    pub stats: AttributeSet,
    /// Remaining dailies this hero can evade without damage
    #[serde(default)]
    pub stealth: u32,
}

/// Strength of the boss on an active boss quest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossInfo {
    #[serde(rename = "str")]
    pub strength: f64,
}

/// Party quest state at snapshot time
///
/// Resolved once when the snapshot is built; collection quests are
/// `Active` with no boss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestState {
    #[default]
    Inactive,
    Active {
        #[serde(default)]
        boss: Option<BossInfo>,
    },
}

impl QuestState {
    /// Whether any quest is active
    pub fn is_active(&self) -> bool {
        matches!(self, QuestState::Active { .. })
    }

    /// The boss of the active quest, if this is a boss quest
    pub fn boss(&self) -> Option<&BossInfo> {
        match self {
            QuestState::Active { boss } => boss.as_ref(),
            QuestState::Inactive => None,
        }
    }

    /// Whether the active quest has a boss taking party damage
    pub fn has_boss(&self) -> bool {
        self.boss().is_some()
    }
}

/// One player's account state, already enriched upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Class name used for gear class-bonus matching
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub level: u32,
    /// Allocated base stat points
    #[serde(default)]
    pub points: AttributeSet,
    #[serde(default)]
    pub buffs: Buffs,
    /// Equipped battle gear; missing slots contribute nothing
    #[serde(default)]
    pub equipped: HashMap<EquipSlot, GearItem>,
    /// Cosmetic costume gear; never contributes to stats
    #[serde(default)]
    pub costume: HashMap<EquipSlot, GearItem>,
    #[serde(default)]
    pub prefers_costume: bool,
    #[serde(default)]
    pub quest: QuestState,
}

impl UserSnapshot {
    /// Aggregate gear, buffs, points, and the level bonus into totals
    pub fn compute_stats(&self) -> Stats {
        stats::aggregate(self)
    }

    /// The gear mapping this hero is displayed in
    pub fn outfit(&self) -> &HashMap<EquipSlot, GearItem> {
        if self.prefers_costume {
            &self.costume
        } else {
            &self.equipped
        }
    }

    /// Remaining stealth charges
    pub fn stealth(&self) -> u32 {
        self.buffs.stealth
    }
}
