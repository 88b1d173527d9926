//! Game constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global game constants instance
static GAME_CONSTANTS: OnceLock<GameConstants> = OnceLock::new();

/// Initialize the global game constants from a TOML file
///
/// Must be called once at startup before any damage calculations.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = GameConstants::load_from_path(path)?;
    GAME_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Initialize the global game constants with default values
///
/// Useful for tests or when no config file is available.
pub fn init_constants_default() -> Result<(), ConfigError> {
    GAME_CONSTANTS
        .set(GameConstants::default())
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Get a reference to the global game constants
///
/// Panics if constants have not been initialized via `init_constants()` or `init_constants_default()`.
pub fn constants() -> &'static GameConstants {
    GAME_CONSTANTS
        .get()
        .expect("GameConstants not initialized - call init_constants() or init_constants_default() first")
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    GAME_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
///
/// If constants are already initialized, this does nothing.
/// If not initialized, initializes with default values.
pub fn ensure_constants_initialized() {
    GAME_CONSTANTS.get_or_init(GameConstants::default);
}

/// Tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub defense: DefenseConstants,
    #[serde(default)]
    pub resistance: ResistanceConstants,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            defense: DefenseConstants::default(),
            resistance: ResistanceConstants::default(),
        }
    }
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let constants: GameConstants = toml::from_str(&content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check structural sanity of the loaded values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.resistance.min_effective > self.resistance.max_effective {
            return Err(ConfigError::ValidationError(format!(
                "resistance.min_effective ({}) must not exceed resistance.max_effective ({})",
                self.resistance.min_effective, self.resistance.max_effective
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseConstants {
    /// Flat term in the mitigation curve denominator
    #[serde(default = "default_base_offset")]
    pub base_offset: f64,
    /// Denominator growth per attacker level
    #[serde(default = "default_per_level_offset")]
    pub per_level_offset: f64,
}

impl Default for DefenseConstants {
    fn default() -> Self {
        DefenseConstants {
            base_offset: 200.0,
            per_level_offset: 10.0,
        }
    }
}

fn default_base_offset() -> f64 {
    200.0
}
fn default_per_level_offset() -> f64 {
    10.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistanceConstants {
    /// Lowest effective resistance penetration can produce (-1.0 = +100% damage)
    #[serde(default = "default_min_effective")]
    pub min_effective: f64,
    /// Highest effective resistance after clamping (0.9 = damage floor of 10%)
    #[serde(default = "default_max_effective")]
    pub max_effective: f64,
}

impl Default for ResistanceConstants {
    fn default() -> Self {
        ResistanceConstants {
            min_effective: -1.0,
            max_effective: 0.9,
        }
    }
}

fn default_min_effective() -> f64 {
    -1.0
}
fn default_max_effective() -> f64 {
    0.9
}
