//! Defense mitigation - the level-scaled defense curve
//!
//! Formula:
//! - final_def = base_def * (1 + buffs_debuffs - (reduction + ignore)), floored at 0
//! - multiplier = 1 - final_def / (final_def + base_offset + per_level_offset * level)

use crate::config::constants;

/// Calculate the enemy's final defense after buffs, debuffs, reduction and ignore
///
/// Defense cannot go below 0 regardless of how large the combined reduction
/// and ignore terms are.
pub fn calculate_final_defense(
    base_defense: f64,
    buffs_debuffs: f64,
    reduction: f64,
    ignore: f64,
) -> f64 {
    let modified = base_defense * (1.0 + buffs_debuffs - (reduction + ignore));
    modified.max(0.0)
}

/// Calculate the damage multiplier from the enemy's final defense
///
/// A zero denominator (reachable only when the curve constants are zeroed
/// out) yields a multiplier of 1, i.e. defense has no mitigating effect.
pub fn calculate_defense_multiplier(final_defense: f64, attacker_level: i32) -> f64 {
    let def_constants = &constants().defense;
    let denominator = final_defense
        + def_constants.base_offset
        + def_constants.per_level_offset * f64::from(attacker_level);

    if denominator == 0.0 {
        return 1.0;
    }

    1.0 - final_defense / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ensure_constants_initialized;

    fn setup() {
        ensure_constants_initialized();
    }

    #[test]
    fn test_zero_defense_is_no_mitigation() {
        setup();
        let multiplier = calculate_defense_multiplier(0.0, 50);
        assert!((multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_50_vs_700_defense_halves_damage() {
        setup();
        // 1 - 700 / (700 + 200 + 500) = 0.5
        let multiplier = calculate_defense_multiplier(700.0, 50);
        assert!((multiplier - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_higher_level_weakens_defense() {
        setup();
        let low = calculate_defense_multiplier(700.0, 10);
        let high = calculate_defense_multiplier(700.0, 80);
        assert!(high > low);
    }

    #[test]
    fn test_final_defense_applies_buffs_and_reductions() {
        // 700 * (1 + 0.2 - (0.15 + 0.1)) = 735
        let final_def = calculate_final_defense(700.0, 0.2, 0.15, 0.1);
        assert!((final_def - 735.0).abs() < 0.01);
    }

    #[test]
    fn test_final_defense_floors_at_zero() {
        // Reduction + ignore far beyond 100%
        let final_def = calculate_final_defense(700.0, 0.0, 0.8, 0.5);
        assert!((final_def - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multiplier_never_exceeds_one_for_real_defense() {
        setup();
        for defense in [0.0, 1.0, 350.0, 700.0, 5000.0, 1.0e9] {
            let multiplier = calculate_defense_multiplier(defense, 0);
            assert!(multiplier <= 1.0);
            assert!(multiplier > 0.0);
        }
    }
}
