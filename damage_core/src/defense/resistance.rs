//! Resistance - elemental resistance with penetration
//!
//! Effective resistance is clamped to a configurable interval (default
//! [-1.0, 0.9]): resistance may be overcome and driven negative down to
//! -100%, amplifying damage, while penetration can never lower the damage
//! floor implied by the cap, i.e. this term alone never reduces damage
//! below 10% of its pre-resistance value.
//!
//! Formula:
//! - effective_res = clamp(resistance - penetration, min_effective, max_effective)
//! - multiplier = 1 - effective_res

use crate::config::constants;

/// Calculate effective resistance after penetration
///
/// # Arguments
/// * `resistance` - The defender's current resistance (as decimal, can be negative)
/// * `penetration` - The attacker's resistance penetration
///
/// # Returns
/// The clamped effective resistance
pub fn calculate_effective_resistance(resistance: f64, penetration: f64) -> f64 {
    let res_constants = &constants().resistance;
    (resistance - penetration).clamp(res_constants.min_effective, res_constants.max_effective)
}

/// Calculate the damage multiplier from resistance and penetration
pub fn calculate_resistance_multiplier(resistance: f64, penetration: f64) -> f64 {
    1.0 - calculate_effective_resistance(resistance, penetration)
}
