//! habit_core - stat and daily-damage calculation for a gamified
//! habit-tracking service
//!
//! This library provides:
//! - Stats: per-dimension attribute totals aggregated from gear,
//!   buffs, allocated points, and level
//! - Constitution mitigation: the damage-reduction factor derived
//!   from total constitution
//! - DailyDamageSimulator: self- and boss-damage from due, incomplete
//!   dailies, with stealth evasion and checklist partial credit
//! - Todo filtering: due one-off tasks relative to a cutoff instant
//!
//! Everything operates on already-materialized, already-enriched
//! snapshots; fetching and content resolution live upstream.

pub mod config;
pub mod damage;
pub mod mitigation;
pub mod stats;
pub mod task;
pub mod todos;
pub mod types;
pub mod user;

// Re-export core types for convenience
pub use config::{ConfigError, SimConstants};
pub use damage::{DailyDamageSimulator, DailyStats};
pub use mitigation::constitution_bonus;
pub use stats::{aggregate, Stats};
pub use task::{ChecklistItem, Task, TaskError, TaskType};
pub use todos::{todos_due_before, todos_due_today};
pub use types::{Attribute, AttributeSet, EquipSlot};
pub use user::{BossInfo, Buffs, GearItem, QuestState, UserSnapshot};
