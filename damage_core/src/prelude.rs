//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Stat totals
pub use crate::stats::{aggregate_attack, aggregate_defense, aggregate_hp, aggregate_stat, StatInputs};

// Damage system
pub use crate::damage::{compute_outgoing_damage, DamageInputs};

// Mitigation terms
pub use crate::defense::{
    calculate_defense_multiplier, calculate_effective_resistance, calculate_final_defense,
    calculate_resistance_multiplier,
};

// Config
pub use crate::config::{
    constants, ensure_constants_initialized, init_constants, init_constants_default,
    GameConstants,
};
