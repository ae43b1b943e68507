//! Stat aggregation - gear, buffs, points, and level into totals

use super::Stats;
use crate::types::{Attribute, AttributeSet};
use crate::user::UserSnapshot;

/// Extra share of an item's stats granted when its class restriction
/// matches the wearer (applies across all four dimensions)
pub const CLASS_GEAR_BONUS: f64 = 0.5;

/// Aggregate a snapshot into per-dimension totals
///
/// For each dimension: sum equipped gear bonuses (class-matched items
/// count an extra 50% of every dimension, not only their nominal
/// stat), then add buffs, allocated points, and the level bonus
/// (`level / 2`, floored). Missing gear slots contribute zero.
pub fn aggregate(user: &UserSnapshot) -> Stats {
    let mut armor = AttributeSet::default();
    for item in user.equipped.values() {
        let class_matched = item.grants_class_bonus(&user.class_name);
        for &attribute in Attribute::all() {
            let bonus = item.stats.get(attribute);
            armor.add(attribute, bonus);
            if class_matched {
                armor.add(attribute, CLASS_GEAR_BONUS * bonus);
            }
        }
    }

    let level_bonus = (user.level / 2) as f64;
    let mut totals = AttributeSet::default();
    for &attribute in Attribute::all() {
        totals.set(
            attribute,
            armor.get(attribute)
                + user.buffs.stats.get(attribute)
                + user.points.get(attribute)
                + level_bonus,
        );
    }

    Stats {
        totals,
        armor,
        buffs: user.buffs.stats,
        points: user.points,
    }
}
