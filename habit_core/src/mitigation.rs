//! Constitution-based damage mitigation
//!
//! Total constitution reduces the self-damage taken from neglected
//! dailies. Mitigation saturates: past the soft cap the factor stays
//! at its floor no matter how high constitution grows.
//!
//! Formula: `bonus = max(0.1, 1 - con / 250)`

/// Constitution at which mitigation saturates
pub const CON_SOFT_CAP: f64 = 250.0;

/// Smallest mitigation factor (90% damage reduction)
pub const MITIGATION_FLOOR: f64 = 0.1;

/// Calculate the damage multiplier from total constitution
///
/// 1.0 at zero constitution, shrinking linearly to the 0.1 floor at
/// the soft cap and beyond.
pub fn constitution_bonus(constitution: f64) -> f64 {
    let bonus = 1.0 - constitution / CON_SOFT_CAP;
    bonus.max(MITIGATION_FLOOR)
}
