use std::path::PathBuf;

use super::gameplay::{ConfigError, DEFAULT_COLLISION_REACH_PX};

const SEED_ENV_VAR: &str = "REBEL_RUN_SEED";
const CATALOG_ENV_VAR: &str = "REBEL_RUN_CATALOG";
const COLLISION_REACH_ENV_VAR: &str = "REBEL_RUN_COLLISION_REACH";

/// Game settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GameConfig {
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`.
    pub(crate) seed: Option<u64>,
    /// JSON level catalog replacing the built-in one.
    pub(crate) catalog_path: Option<PathBuf>,
    pub(crate) collision_reach_px: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            catalog_path: None,
            collision_reach_px: DEFAULT_COLLISION_REACH_PX,
        }
    }
}

impl GameConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let seed = lookup(SEED_ENV_VAR)
            .map(|raw| parse_seed(&raw))
            .transpose()?;
        let catalog_path = lookup(CATALOG_ENV_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let collision_reach_px = lookup(COLLISION_REACH_ENV_VAR)
            .map(|raw| parse_collision_reach(&raw))
            .transpose()?
            .unwrap_or(defaults.collision_reach_px);

        Ok(Self {
            seed,
            catalog_path,
            collision_reach_px,
        })
    }
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: SEED_ENV_VAR,
        value: raw.to_string(),
    })
}

fn parse_collision_reach(raw: &str) -> Result<f32, ConfigError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|reach| reach.is_finite() && *reach > 0.0)
        .ok_or_else(|| ConfigError::InvalidEnv {
            var: COLLISION_REACH_ENV_VAR,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<GameConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        GameConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]).expect("config"), GameConfig::default());
    }

    #[test]
    fn reads_all_overrides() {
        let config = config_from(&[
            (SEED_ENV_VAR, " 42 "),
            (CATALOG_ENV_VAR, "levels/custom.json"),
            (COLLISION_REACH_ENV_VAR, "60.5"),
        ])
        .expect("config");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.catalog_path, Some(PathBuf::from("levels/custom.json")));
        assert_eq!(config.collision_reach_px, 60.5);
    }

    #[test]
    fn blank_catalog_path_is_ignored() {
        let config = config_from(&[(CATALOG_ENV_VAR, "  ")]).expect("config");
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = config_from(&[(SEED_ENV_VAR, "-7")]).expect_err("negative seed");
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { var: SEED_ENV_VAR, ref value } if value == "-7"
        ));
    }

    #[test]
    fn rejects_non_positive_collision_reach() {
        for raw in ["0", "-5", "NaN", "inf", "wide"] {
            let err = config_from(&[(COLLISION_REACH_ENV_VAR, raw)]).expect_err(raw);
            assert!(
                matches!(err, ConfigError::InvalidEnv { var: COLLISION_REACH_ENV_VAR, .. }),
                "raw={raw}"
            );
        }
    }
}
