//! Interactive front-end for the outgoing damage calculator
//!
//! Prompts for each modifier with re-prompt on invalid input and default
//! substitution on empty input, or computes a scenario from a JSON file.
//! All formula logic lives in damage_core; this binary only collects inputs
//! and formats the result.

use clap::Parser;
use damage_core::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "damage_cli")]
#[command(about = "Outgoing damage calculator for turn-based combat")]
struct Cli {
    /// Compute a DamageInputs scenario from a JSON file instead of prompting
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Path to the mitigation constants file
    #[arg(long, default_value = "config/constants.toml")]
    constants: PathBuf,
}

/// Error loading a scenario file
#[derive(Debug, Error)]
enum ScenarioError {
    #[error("IO error reading '{path:?}': {error}")]
    Io { error: io::Error, path: PathBuf },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: serde_json::Error,
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let init_result = if cli.constants.exists() {
        init_constants(&cli.constants)
    } else {
        init_constants_default()
    };
    if let Err(error) = init_result {
        eprintln!("Failed to load constants: {error}");
        std::process::exit(1);
    }

    if let Some(path) = cli.scenario.as_deref() {
        match load_scenario(path) {
            Ok(inputs) => println!("{:.2}", compute_outgoing_damage(&inputs)),
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
        return;
    }

    run_interactive();
}

/// Read a DamageInputs record from a JSON file; missing fields default to zero
fn load_scenario(path: &Path) -> Result<DamageInputs, ScenarioError> {
    let content = std::fs::read_to_string(path).map_err(|error| ScenarioError::Io {
        error,
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&content).map_err(|error| ScenarioError::Parse {
        error,
        path: path.to_path_buf(),
    })
}

fn run_interactive() {
    println!("Welcome to the damage calculator!");

    let mut scaling_attribute_value = 0.0;

    let Some(answer) =
        read_trimmed_line("Calculate a character's ATK, HP or DEF first? (yes/no, default: no): ")
    else {
        return;
    };
    if answer.eq_ignore_ascii_case("yes") {
        let choice = read_stat_choice();
        let label = choice.label();
        let base = read_f64(&format!("Enter character base {label}: "), None);
        let equipment = read_f64(&format!("Enter equipment base {label}: "), None);
        let percent = read_f64(
            &format!("Enter total {label} percent bonus (e.g. 0.48 for 48%): "),
            None,
        );
        let flat = read_f64(&format!("Enter total flat {label} bonus: "), None);

        scaling_attribute_value = match choice {
            StatChoice::Attack => aggregate_attack(base, equipment, percent, flat),
            StatChoice::Hp => aggregate_hp(base, equipment, percent, flat),
            StatChoice::Defense => aggregate_defense(base, equipment, percent, flat),
        };
        println!("Total {label}: {scaling_attribute_value:.2}");
        println!("{}", "-".repeat(30));
    }

    println!();
    println!("Enter parameters for the outgoing damage calculation:");

    if scaling_attribute_value == 0.0 {
        scaling_attribute_value = read_f64("Enter scaling attribute value (ATK, HP or DEF): ", None);
    }

    let skill_multiplier = read_f64("Enter skill multiplier (e.g. 0.6 for 60%): ", None);
    let extra_multiplier = read_f64("Enter extra multiplier (default: 0): ", Some(0.0));
    let extra_flat_damage = read_f64("Enter flat extra damage (default: 0): ", Some(0.0));
    let elemental_damage_bonus = read_f64(
        "Enter elemental damage bonus (e.g. 0.389 for 38.9%): ",
        None,
    );
    let all_type_damage_bonus = read_f64("Enter all-type damage bonus (default: 0): ", Some(0.0));
    let dot_damage_bonus = read_f64("Enter DoT damage bonus (default: 0): ", Some(0.0));
    let other_damage_bonus = read_f64("Enter other damage bonus (default: 0): ", Some(0.0));

    let attacker_level = read_i32("Enter attacker level: ", None);
    let enemy_base_defense = read_f64("Enter enemy base DEF: ", None);
    let enemy_defense_buffs_debuffs = read_f64(
        "Enter enemy DEF buffs/debuffs (0.2 for a buff, -0.1 for a debuff, default: 0): ",
        Some(0.0),
    );
    let defense_reduction = read_f64("Enter DEF reduction (default: 0): ", Some(0.0));
    let defense_ignore = read_f64("Enter DEF ignore (default: 0): ", Some(0.0));

    let enemy_resistance = read_f64(
        "Enter enemy current RES (e.g. 0.2 for neutral, 0 for weakness): ",
        None,
    );
    let resistance_penetration = read_f64("Enter RES penetration (default: 0): ", Some(0.0));

    let elemental_damage_taken_bonus = read_f64(
        "Enter elemental damage taken bonus (default: 0): ",
        Some(0.0),
    );
    let all_type_damage_taken_bonus = read_f64(
        "Enter all-type damage taken bonus (default: 0): ",
        Some(0.0),
    );

    let universal_damage_reduction_sources = read_f64_list(
        "Enter universal damage reduction sources (comma-separated, default: '0.1' for enemy toughness): ",
        "0.1",
    );
    let weaken = read_f64("Enter weaken (e.g. 0.15 for 15%, default: 0): ", Some(0.0));

    let inputs = DamageInputs {
        skill_multiplier,
        extra_multiplier,
        extra_flat_damage,
        scaling_attribute_value,
        elemental_damage_bonus,
        all_type_damage_bonus,
        dot_damage_bonus,
        other_damage_bonus,
        attacker_level,
        enemy_base_defense,
        enemy_defense_buffs_debuffs,
        defense_reduction,
        defense_ignore,
        enemy_resistance,
        resistance_penetration,
        elemental_damage_taken_bonus,
        all_type_damage_taken_bonus,
        universal_damage_reduction_sources,
        weaken,
    };

    let damage = compute_outgoing_damage(&inputs);
    println!("{}", "-".repeat(30));
    println!("Calculated outgoing damage: {damage:.2}");
}

/// Which stat total to calculate before the damage step
#[derive(Clone, Copy)]
enum StatChoice {
    Attack,
    Hp,
    Defense,
}

impl StatChoice {
    fn label(self) -> &'static str {
        match self {
            StatChoice::Attack => "ATK",
            StatChoice::Hp => "HP",
            StatChoice::Defense => "DEF",
        }
    }
}

fn read_stat_choice() -> StatChoice {
    loop {
        let Some(input) = read_trimmed_line("Which stat? (atk/hp/def): ") else {
            std::process::exit(0);
        };
        match input.to_ascii_lowercase().as_str() {
            "atk" => return StatChoice::Attack,
            "hp" => return StatChoice::Hp,
            "def" => return StatChoice::Defense,
            _ => println!("Invalid stat type. Please choose 'atk', 'hp' or 'def'."),
        }
    }
}

/// Print a prompt and read one trimmed line; None on end of input
fn read_trimmed_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut buffer = String::new();
    match io::stdin().read_line(&mut buffer) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buffer.trim().to_string()),
    }
}

fn read_f64(prompt: &str, default: Option<f64>) -> f64 {
    loop {
        let Some(input) = read_trimmed_line(prompt) else {
            std::process::exit(0);
        };
        if input.is_empty() {
            if let Some(value) = default {
                return value;
            }
        }
        match input.parse::<f64>() {
            Ok(value) => return value,
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn read_i32(prompt: &str, default: Option<i32>) -> i32 {
    loop {
        let Some(input) = read_trimmed_line(prompt) else {
            std::process::exit(0);
        };
        if input.is_empty() {
            if let Some(value) = default {
                return value;
            }
        }
        match input.parse::<i32>() {
            Ok(value) => return value,
            Err(_) => println!("Invalid input. Please enter an integer."),
        }
    }
}

fn read_f64_list(prompt: &str, default: &str) -> Vec<f64> {
    loop {
        let Some(mut input) = read_trimmed_line(prompt) else {
            std::process::exit(0);
        };
        if input.is_empty() {
            input = default.to_string();
        }
        if input.is_empty() {
            return Vec::new();
        }
        match parse_f64_list(&input) {
            Ok(values) => return values,
            Err(_) => println!(
                "Invalid input. Please enter a comma-separated list of numbers (e.g. 0.1,0.05)."
            ),
        }
    }
}

/// Parse a comma-separated list of numbers, whitespace-tolerant
fn parse_f64_list(input: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    input
        .split(',')
        .map(|item| item.trim().parse::<f64>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_f64_list() {
        let values = parse_f64_list("0.1, 0.05").unwrap();
        assert_eq!(values.len(), 2);
        assert!((values[0] - 0.1).abs() < f64::EPSILON);
        assert!((values[1] - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_f64_list_single_value() {
        let values = parse_f64_list("0.1").unwrap();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_parse_f64_list_rejects_garbage() {
        assert!(parse_f64_list("0.1,abc").is_err());
        assert!(parse_f64_list("").is_err());
    }

    #[test]
    fn test_load_scenario_with_partial_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skill_multiplier": 0.6, "scaling_attribute_value": 1062.0}}"#
        )
        .unwrap();

        let inputs = load_scenario(file.path()).unwrap();
        assert!((inputs.skill_multiplier - 0.6).abs() < f64::EPSILON);
        assert!((inputs.scaling_attribute_value - 1062.0).abs() < f64::EPSILON);
        assert_eq!(inputs.attacker_level, 0);
        assert!(inputs.universal_damage_reduction_sources.is_empty());
    }

    #[test]
    fn test_load_scenario_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = load_scenario(file.path());
        assert!(matches!(result, Err(ScenarioError::Parse { .. })));
    }

    #[test]
    fn test_load_scenario_missing_file() {
        let result = load_scenario(Path::new("no/such/scenario.json"));
        assert!(matches!(result, Err(ScenarioError::Io { .. })));
    }
}
