//! Run configuration: roster size, seed and loot scaling.

use std::path::Path;

use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

/// Roster size used when nothing else is configured.
pub const DEFAULT_ENEMY_COUNT: usize = 10;

/// How each monster's loot is valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LootScaling {
    /// Every loot item uses the same level.
    Fixed { level: i64 },
    /// Loot level is `ceil(attackPower / 10)` of the monster holding it.
    #[default]
    AttackLinked,
    /// Loot level drawn uniformly from `[min, max)`.
    RandomLevel { min: i64, max: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    pub enemy_count: usize,
    /// Fixed seed for a reproducible run; entropy when absent.
    pub seed: Option<u64>,
    pub loot_scaling: LootScaling,
    /// Overrides the generated player name.
    pub player_name: Option<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            enemy_count: DEFAULT_ENEMY_COUNT,
            seed: None,
            loot_scaling: LootScaling::default(),
            player_name: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_json_str(json: &str) -> GameResult<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.loot_scaling {
            LootScaling::Fixed { level } if level < 1 => Err(GameError::InvalidConfig(format!(
                "fixed loot level must be at least 1, got {}",
                level
            ))),
            LootScaling::RandomLevel { min, max } if min < 1 || max <= min => {
                Err(GameError::InvalidConfig(format!(
                    "random loot level range [{}, {}) must be non-empty and start at 1 or above",
                    min, max
                )))
            }
            _ => Ok(()),
        }?;

        if matches!(&self.player_name, Some(name) if name.trim().is_empty()) {
            return Err(GameError::InvalidConfig(
                "player name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ArenaConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.enemy_count, 10);
        assert_eq!(config.loot_scaling, LootScaling::AttackLinked);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "enemy_count": 3,
            "seed": 42,
            "loot_scaling": { "mode": "random_level", "min": 1, "max": 10 },
            "player_name": "Iris Lightfoot"
        }"#;
        let config = ArenaConfig::from_json_str(json).unwrap();
        assert_eq!(config.enemy_count, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.loot_scaling, LootScaling::RandomLevel { min: 1, max: 10 });
        assert_eq!(config.player_name.as_deref(), Some("Iris Lightfoot"));
    }

    #[test]
    fn test_rejects_bad_scaling() {
        let err = ArenaConfig::from_json_str(r#"{"loot_scaling":{"mode":"fixed","level":0}}"#)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = ArenaConfig::from_json_str(
            r#"{"loot_scaling":{"mode":"random_level","min":5,"max":5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            ArenaConfig::from_json_str(r#"{"enemies": 3}"#),
            Err(GameError::Config(_))
        ));
        assert!(ArenaConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"enemy_count": 2, "seed": 7}}"#).unwrap();
        let config = ArenaConfig::load(file.path()).unwrap();
        assert_eq!(config.enemy_count, 2);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ArenaConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
