//! Daily damage - simulation of self- and boss-damage from dailies

mod simulator;

pub use simulator::DailyDamageSimulator;

use serde::{Deserialize, Serialize};

/// Outcome of one daily-damage simulation run
///
/// Produced wholesale by [`DailyDamageSimulator::simulate`]; a failed
/// run returns an error without publishing a partial result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Due, incomplete dailies that actually dealt damage
    pub due_count: u32,
    /// Due, incomplete dailies fully evaded by stealth
    pub dailies_evaded: u32,
    /// Sum of per-task self damage, each rounded to the nearest tenth
    pub daily_damage_to_self: f64,
    /// Party boss damage, rounded up to the nearest tenth
    pub boss_damage: f64,
    /// Self plus boss damage, rounded up to the nearest tenth
    pub total_damage_to_self: f64,
}
