//! Stat totals - combining base, equipment, percent and flat bonuses

use serde::{Deserialize, Serialize};

/// Components of a single stat total
///
/// Final value is calculated as:
/// `(base_value + equipment_base_value) × (1 + percent_bonus) + flat_bonus`
///
/// All fields are plain real numbers; negative bonuses represent debuffs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatInputs {
    /// The character's innate base value
    pub base_value: f64,
    /// Base value contributed by equipment
    pub equipment_base_value: f64,
    /// Sum of all percentage bonuses (as decimal, e.g. 0.48 = 48%)
    pub percent_bonus: f64,
    /// Sum of all flat bonuses
    pub flat_bonus: f64,
}

impl StatInputs {
    /// Combine the components into the stat's total value
    pub fn total(&self) -> f64 {
        aggregate_stat(
            self.base_value,
            self.equipment_base_value,
            self.percent_bonus,
            self.flat_bonus,
        )
    }
}

/// Combine a stat's components into its total value
///
/// Used identically for Attack, HP and Defense. Non-finite inputs propagate
/// per normal floating-point semantics.
pub fn aggregate_stat(
    base_value: f64,
    equipment_base_value: f64,
    percent_bonus: f64,
    flat_bonus: f64,
) -> f64 {
    (base_value + equipment_base_value) * (1.0 + percent_bonus) + flat_bonus
}

/// Total Attack from character base, equipment base, percent and flat bonuses
pub fn aggregate_attack(
    base_value: f64,
    equipment_base_value: f64,
    percent_bonus: f64,
    flat_bonus: f64,
) -> f64 {
    aggregate_stat(base_value, equipment_base_value, percent_bonus, flat_bonus)
}

/// Total HP from character base, equipment base, percent and flat bonuses
pub fn aggregate_hp(
    base_value: f64,
    equipment_base_value: f64,
    percent_bonus: f64,
    flat_bonus: f64,
) -> f64 {
    aggregate_stat(base_value, equipment_base_value, percent_bonus, flat_bonus)
}

/// Total Defense from character base, equipment base, percent and flat bonuses
pub fn aggregate_defense(
    base_value: f64,
    equipment_base_value: f64,
    percent_bonus: f64,
    flat_bonus: f64,
) -> f64 {
    aggregate_stat(base_value, equipment_base_value, percent_bonus, flat_bonus)
}
