//! Stats - aggregated attribute totals for one snapshot

mod aggregator;

pub use aggregator::{aggregate, CLASS_GEAR_BONUS};

use crate::mitigation;
use crate::types::AttributeSet;
use serde::{Deserialize, Serialize};

/// Per-dimension attribute totals with their contributing layers
///
/// Rebuilt wholesale from a snapshot by [`aggregate`]; never patched
/// incrementally and never mutated after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Armor + buffs + points + level bonus, per dimension
    pub totals: AttributeSet,
    /// Contribution from equipped gear, class bonus included
    pub armor: AttributeSet,
    /// Contribution from active buffs
    pub buffs: AttributeSet,
    /// Contribution from allocated stat points
    pub points: AttributeSet,
}

impl Stats {
    /// Damage mitigation factor derived from total constitution
    pub fn constitution_bonus(&self) -> f64 {
        mitigation::constitution_bonus(self.totals.constitution)
    }
}
