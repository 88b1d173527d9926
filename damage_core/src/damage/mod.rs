//! Damage composition - modifier inputs and the outgoing damage formula

mod calculation;

pub use calculation::compute_outgoing_damage;

use serde::{Deserialize, Serialize};

/// All modifiers feeding one outgoing damage instance
///
/// Percentages are decimals (0.258 = 25.8%). No field is range-checked:
/// negative values represent debuffs and are accepted everywhere except the
/// clamped resistance term and the floored defense term. The record is built
/// immediately before a calculation and holds no state afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageInputs {
    /// The skill's damage multiplier (e.g. 0.6 for a 60% skill)
    pub skill_multiplier: f64,
    /// Additional damage multiplier added to the skill's
    pub extra_multiplier: f64,
    /// Flat damage added after scaling
    pub extra_flat_damage: f64,
    /// The scaling attribute's total value (Attack, HP or Defense)
    pub scaling_attribute_value: f64,

    /// Elemental damage bonus
    pub elemental_damage_bonus: f64,
    /// All-type damage bonus
    pub all_type_damage_bonus: f64,
    /// Damage-over-time bonus
    pub dot_damage_bonus: f64,
    /// Other damage bonus (e.g. basic attack bonuses)
    pub other_damage_bonus: f64,

    /// The attacker's character level
    pub attacker_level: i32,
    /// The enemy's base defense value
    pub enemy_base_defense: f64,
    /// Enemy defense buffs and debuffs (0.2 = 20% buff, -0.1 = 10% debuff)
    pub enemy_defense_buffs_debuffs: f64,
    /// Defense reduction applied to the enemy
    pub defense_reduction: f64,
    /// Defense ignored by the attacker
    pub defense_ignore: f64,

    /// The enemy's current resistance (0.2 = neutral, 0 = weakness)
    pub enemy_resistance: f64,
    /// The attacker's resistance penetration
    pub resistance_penetration: f64,

    /// Elemental damage taken bonus on the defender
    pub elemental_damage_taken_bonus: f64,
    /// All-type damage taken bonus on the defender
    pub all_type_damage_taken_bonus: f64,

    /// Independent universal damage reduction sources, multiplied together
    pub universal_damage_reduction_sources: Vec<f64>,
    /// Weaken debuff on the attacker
    pub weaken: f64,
}
