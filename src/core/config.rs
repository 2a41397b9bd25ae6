//! Tuning configuration.
//!
//! Every field defaults to the value in [`super::constants`], so a partial
//! `config.json` only overrides what it names.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shortest duration any action can be scaled down to
    pub min_action_duration_ms: u64,
    /// Speed bonus per stat point (0.1 = stat 10 doubles speed)
    pub stat_speed_per_point: f64,
    pub max_crew: usize,
    pub starting_money: u64,
    pub business_cycle_ms: u64,
    /// Income stops accruing after this many uncollected cycles
    pub max_pending_cycles: u64,
    pub heat_decay_interval_ms: u64,
    pub heat_decay_amount: u32,
    pub raid_heat_threshold: u32,
    pub raid_check_interval_ms: u64,
    pub raid_money_loss_percent: u64,
    pub raid_heat_floor: u32,
    pub max_offline_seconds: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_action_duration_ms: MIN_ACTION_DURATION_MS,
            stat_speed_per_point: STAT_SPEED_PER_POINT,
            max_crew: MAX_CREW,
            starting_money: STARTING_MONEY,
            business_cycle_ms: BUSINESS_CYCLE_MS,
            max_pending_cycles: MAX_PENDING_CYCLES,
            heat_decay_interval_ms: HEAT_DECAY_INTERVAL_MS,
            heat_decay_amount: HEAT_DECAY_AMOUNT,
            raid_heat_threshold: RAID_HEAT_THRESHOLD,
            raid_check_interval_ms: RAID_CHECK_INTERVAL_MS,
            raid_money_loss_percent: RAID_MONEY_LOSS_PERCENT,
            raid_heat_floor: RAID_HEAT_FLOOR,
            max_offline_seconds: MAX_OFFLINE_SECONDS,
        }
    }
}

impl GameConfig {
    /// Speed-run tuning for the headless simulator and tests
    pub fn fast() -> Self {
        Self {
            business_cycle_ms: 1_000,
            heat_decay_interval_ms: 1_000,
            raid_check_interval_ms: 1_000,
            ..Default::default()
        }
    }

    /// Parses a config document, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Loads a config file, returning defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

/// Location of `config.json` in the platform config directory
pub fn config_path() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "gangster").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;
    Ok(project_dirs.config_dir().join("config.json"))
}

/// Loads the user's config, or defaults when none is present
pub fn load_config() -> GameConfig {
    match config_path() {
        Ok(path) => GameConfig::load_from(&path),
        Err(_) => GameConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "max_crew": 3 }"#).unwrap();
        assert_eq!(config.max_crew, 3);
        assert_eq!(config.starting_money, STARTING_MONEY);
        assert_eq!(config.min_action_duration_ms, MIN_ACTION_DURATION_MS);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = std::env::temp_dir().join("gangster-config-test-missing/config.json");
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("gangster-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = GameConfig {
            raid_heat_threshold: 50,
            ..GameConfig::fast()
        };
        config.save_to(&path).unwrap();
        assert_eq!(GameConfig::load_from(&path), config);
        let _ = fs::remove_dir_all(dir);
    }
}
