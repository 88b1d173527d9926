//! Damage calculation - turning one set of modifiers into a damage value

use super::DamageInputs;
use crate::defense::{
    calculate_defense_multiplier, calculate_final_defense, calculate_resistance_multiplier,
};

/// Compute the outgoing damage for a single hit
///
/// Deterministic and side-effect free: the same inputs always produce the
/// same value. All arithmetic is plain IEEE double precision and no rounding
/// is applied here; formatting for display is the caller's concern.
pub fn compute_outgoing_damage(inputs: &DamageInputs) -> f64 {
    // Step 1: Base damage from multipliers and the scaling attribute
    let base_damage = (inputs.skill_multiplier + inputs.extra_multiplier)
        * inputs.scaling_attribute_value
        + inputs.extra_flat_damage;

    // Step 2: Additive damage bonus percentages
    let damage_percent_multiplier = 1.0
        + inputs.elemental_damage_bonus
        + inputs.all_type_damage_bonus
        + inputs.dot_damage_bonus
        + inputs.other_damage_bonus;

    // Steps 3-4: Enemy defense after modifiers, then the mitigation curve.
    // The final defense value feeds the curve only; it does not multiply
    // into the result itself.
    let enemy_final_defense = calculate_final_defense(
        inputs.enemy_base_defense,
        inputs.enemy_defense_buffs_debuffs,
        inputs.defense_reduction,
        inputs.defense_ignore,
    );
    let defense_multiplier =
        calculate_defense_multiplier(enemy_final_defense, inputs.attacker_level);

    // Step 5: Resistance after penetration
    let resistance_multiplier =
        calculate_resistance_multiplier(inputs.enemy_resistance, inputs.resistance_penetration);

    // Step 6: Damage taken bonuses on the defender
    let damage_taken_multiplier =
        1.0 + inputs.elemental_damage_taken_bonus + inputs.all_type_damage_taken_bonus;

    // Step 7: Stacked universal reductions, one independent factor per source.
    // An empty list yields exactly 1.0.
    let universal_reduction_multiplier: f64 = inputs
        .universal_damage_reduction_sources
        .iter()
        .map(|reduction| 1.0 - reduction)
        .product();

    // Step 8: Weaken debuff on the attacker
    let weaken_multiplier = 1.0 - inputs.weaken;

    base_damage
        * damage_percent_multiplier
        * defense_multiplier
        * resistance_multiplier
        * damage_taken_multiplier
        * universal_reduction_multiplier
        * weaken_multiplier
}
