//! damage_core - Outgoing damage calculation for turn-based combat
//!
//! This library provides:
//! - Stat totals: combining character base, equipment base, percent and flat
//!   bonuses into a single Attack, HP or Defense value
//! - DamageInputs: the full set of modifiers for one damage instance
//! - compute_outgoing_damage: the single-hit outgoing damage formula
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use damage_core::prelude::*;
//!
//! ensure_constants_initialized();
//!
//! let attack = aggregate_attack(523.0, 476.0, 0.48, 352.0);
//! let inputs = DamageInputs {
//!     skill_multiplier: 0.6,
//!     scaling_attribute_value: attack,
//!     enemy_base_defense: 700.0,
//!     attacker_level: 50,
//!     ..Default::default()
//! };
//! println!("Dealt {:.2} damage!", compute_outgoing_damage(&inputs));
//! ```

pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod stats;

// Core API - what most users need
pub use damage::{compute_outgoing_damage, DamageInputs};
pub use stats::{aggregate_attack, aggregate_defense, aggregate_hp, aggregate_stat, StatInputs};

// Mitigation terms (for callers that want the intermediate quantities)
pub use defense::{
    calculate_defense_multiplier, calculate_effective_resistance, calculate_final_defense,
    calculate_resistance_multiplier,
};

// Configuration
pub use config::{
    constants, init_constants, init_constants_default, ConfigError, GameConstants,
};
