use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::collectible::CollectibleKind;
use super::error::ConfigError;
use super::geometry::GRID_CELL_COUNT;
use super::hazard::HazardKind;

/// Upper bound on hazards in one level. The standard campaign peaks at seven.
pub(crate) const MAX_HAZARDS_PER_LEVEL: usize = 64;

/// Population of one level: which variants appear and how many of each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LevelSpec {
    pub(crate) hazards: Vec<(HazardKind, usize)>,
    pub(crate) collectibles: Vec<(CollectibleKind, usize)>,
}

impl LevelSpec {
    /// Saturates, so an absurd file count still fails [`LevelSpec::check`].
    pub(crate) fn hazard_count(&self) -> usize {
        self.hazards
            .iter()
            .fold(0, |total, (_, count)| total.saturating_add(*count))
    }

    pub(crate) fn collectible_count(&self) -> usize {
        self.collectibles
            .iter()
            .fold(0, |total, (_, count)| total.saturating_add(*count))
    }

    /// Collectibles must fit on the grid and hazards stay under the per-level cap.
    pub(crate) fn check(&self, level: usize) -> Result<(), ConfigError> {
        let requested = self.collectible_count();
        if requested > GRID_CELL_COUNT {
            return Err(ConfigError::TooManyCollectibles {
                level,
                requested,
                available: GRID_CELL_COUNT,
            });
        }
        let requested = self.hazard_count();
        if requested > MAX_HAZARDS_PER_LEVEL {
            return Err(ConfigError::TooManyHazards {
                level,
                requested,
                max: MAX_HAZARDS_PER_LEVEL,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    pub(crate) fn new(levels: Vec<LevelSpec>) -> Result<Self, ConfigError> {
        let catalog = Self { levels };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The three-level campaign the game ships with.
    pub(crate) fn standard() -> Self {
        use CollectibleKind::{JediOrder, Phoenix, RebelSymbol};
        use HazardKind::{KyloRen, Stormtrooper, Vader};

        let later_collectibles = vec![(RebelSymbol, 3), (Phoenix, 2), (JediOrder, 1)];
        Self {
            levels: vec![
                LevelSpec {
                    hazards: vec![(Stormtrooper, 5)],
                    collectibles: vec![(RebelSymbol, 3), (Phoenix, 2)],
                },
                LevelSpec {
                    hazards: vec![(Stormtrooper, 5), (Vader, 1)],
                    collectibles: later_collectibles.clone(),
                },
                LevelSpec {
                    hazards: vec![(Stormtrooper, 6), (KyloRen, 1)],
                    collectibles: later_collectibles,
                },
            ],
        }
    }

    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadCatalog {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw, path)?;
        info!(
            path = %path.display(),
            levels = catalog.total_levels(),
            "level_catalog_loaded"
        );
        Ok(catalog)
    }

    pub(crate) fn from_json_str(raw: &str, source_path: &Path) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let file: CatalogFile =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
                let json_path = error.path().to_string();
                let inner = error.into_inner();
                let message = if json_path.is_empty() || json_path == "." {
                    inner.to_string()
                } else {
                    format!("at {json_path}: {inner}")
                };
                ConfigError::ParseCatalog {
                    path: source_path.to_path_buf(),
                    message,
                }
            })?;

        let levels = file
            .levels
            .into_iter()
            .enumerate()
            .map(|(index, level)| level.resolve(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    /// Every level must pass [`LevelSpec::check`]. Runs before any level is
    /// built so a bad late level cannot start a session.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, level) in self.levels.iter().enumerate() {
            level.check(index + 1)?;
        }
        Ok(())
    }

    pub(crate) fn total_levels(&self) -> usize {
        self.levels.len()
    }

    /// Levels are numbered from 1.
    pub(crate) fn level(&self, level: usize) -> Option<&LevelSpec> {
        level.checked_sub(1).and_then(|index| self.levels.get(index))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    levels: Vec<LevelFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFile {
    #[serde(default)]
    hazards: Vec<GroupFile>,
    #[serde(default)]
    collectibles: Vec<GroupFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupFile {
    kind: String,
    count: usize,
}

impl LevelFile {
    fn resolve(self, level: usize) -> Result<LevelSpec, ConfigError> {
        let hazards = self
            .hazards
            .into_iter()
            .map(|group| {
                HazardKind::from_name(&group.kind)
                    .map(|kind| (kind, group.count))
                    .ok_or(ConfigError::UnknownVariant {
                        level,
                        category: "hazard",
                        name: group.kind,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let collectibles = self
            .collectibles
            .into_iter()
            .map(|group| {
                CollectibleKind::from_name(&group.kind)
                    .map(|kind| (kind, group.count))
                    .ok_or(ConfigError::UnknownVariant {
                        level,
                        category: "collectible",
                        name: group.kind,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LevelSpec {
            hazards,
            collectibles,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn source() -> PathBuf {
        PathBuf::from("catalog.json")
    }

    #[test]
    fn standard_catalog_has_three_valid_levels() {
        let catalog = LevelCatalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.total_levels(), 3);

        let first = catalog.level(1).expect("level 1");
        assert_eq!(first.hazard_count(), 5);
        assert_eq!(first.collectible_count(), 5);
        let third = catalog.level(3).expect("level 3");
        assert_eq!(third.hazard_count(), 7);
        assert_eq!(third.collectible_count(), 6);
        assert!(catalog.level(0).is_none());
        assert!(catalog.level(4).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            LevelCatalog::new(Vec::new()),
            Err(ConfigError::EmptyCatalog)
        ));
    }

    #[test]
    fn overfull_late_level_is_rejected() {
        let mut levels = vec![LevelSpec::default(), LevelSpec::default()];
        levels.push(LevelSpec {
            hazards: vec![(HazardKind::Stormtrooper, 1)],
            collectibles: vec![(CollectibleKind::RebelSymbol, 20), (CollectibleKind::Phoenix, 5)],
        });

        match LevelCatalog::new(levels) {
            Err(ConfigError::TooManyCollectibles {
                level,
                requested,
                available,
            }) => {
                assert_eq!((level, requested, available), (3, 25, 24));
            }
            other => panic!("expected TooManyCollectibles, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_collectible_counts_are_rejected() {
        let raw = format!(
            r#"{{ "levels": [ {{ "collectibles": [
                {{ "kind": "rebelSymbol", "count": {} }},
                {{ "kind": "phoenix", "count": 1 }}
            ] }} ] }}"#,
            usize::MAX
        );
        match LevelCatalog::from_json_str(&raw, &source()) {
            Err(ConfigError::TooManyCollectibles { level, requested, .. }) => {
                assert_eq!((level, requested), (1, usize::MAX));
            }
            other => panic!("expected TooManyCollectibles, got {other:?}"),
        }
    }

    #[test]
    fn oversized_hazard_count_is_rejected() {
        let raw = format!(
            r#"{{ "levels": [
                {{ "hazards": [{{ "kind": "stormtrooper", "count": 5 }}] }},
                {{ "hazards": [{{ "kind": "vader", "count": {} }}] }}
            ] }}"#,
            usize::MAX
        );
        match LevelCatalog::from_json_str(&raw, &source()) {
            Err(ConfigError::TooManyHazards {
                level,
                requested,
                max,
            }) => {
                assert_eq!((level, requested, max), (2, usize::MAX, MAX_HAZARDS_PER_LEVEL));
            }
            other => panic!("expected TooManyHazards, got {other:?}"),
        }
    }

    #[test]
    fn hazard_cap_is_inclusive() {
        let at_cap = LevelSpec {
            hazards: vec![(HazardKind::Stormtrooper, MAX_HAZARDS_PER_LEVEL)],
            collectibles: Vec::new(),
        };
        assert!(at_cap.check(1).is_ok());

        let over = LevelSpec {
            hazards: vec![
                (HazardKind::Stormtrooper, MAX_HAZARDS_PER_LEVEL),
                (HazardKind::KyloRen, 1),
            ],
            collectibles: Vec::new(),
        };
        assert!(matches!(
            over.check(1),
            Err(ConfigError::TooManyHazards { requested: 65, .. })
        ));
    }

    #[test]
    fn parses_catalog_json() {
        let raw = r#"{
            "levels": [
                {
                    "hazards": [{ "kind": "stormtrooper", "count": 2 }, { "kind": "kyloRen", "count": 1 }],
                    "collectibles": [{ "kind": "jediOrder", "count": 4 }]
                },
                { "hazards": [{ "kind": "vader", "count": 3 }] }
            ]
        }"#;
        let catalog = LevelCatalog::from_json_str(raw, &source()).expect("catalog");

        assert_eq!(catalog.total_levels(), 2);
        let first = catalog.level(1).expect("level 1");
        assert_eq!(
            first.hazards,
            vec![(HazardKind::Stormtrooper, 2), (HazardKind::KyloRen, 1)]
        );
        assert_eq!(first.collectibles, vec![(CollectibleKind::JediOrder, 4)]);
        assert!(catalog.level(2).expect("level 2").collectibles.is_empty());
    }

    #[test]
    fn unknown_variant_names_the_level() {
        let raw = r#"{ "levels": [
            { "hazards": [{ "kind": "stormtrooper", "count": 1 }] },
            { "collectibles": [{ "kind": "deathStarPlans", "count": 1 }] }
        ] }"#;
        match LevelCatalog::from_json_str(raw, &source()) {
            Err(ConfigError::UnknownVariant {
                level,
                category,
                name,
            }) => {
                assert_eq!(level, 2);
                assert_eq!(category, "collectible");
                assert_eq!(name, "deathStarPlans");
            }
            other => panic!("expected UnknownVariant, got {other:?}"),
        }
    }

    #[test]
    fn parse_errors_carry_json_path() {
        let raw = r#"{ "levels": [ { "hazards": [{ "kind": "vader", "count": -1 }] } ] }"#;
        match LevelCatalog::from_json_str(raw, &source()) {
            Err(ConfigError::ParseCatalog { message, .. }) => {
                assert!(message.contains("levels[0].hazards[0].count"), "{message}");
            }
            other => panic!("expected ParseCatalog, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_catalog_from_disk() {
        let temp = TempDir::new().expect("temp");
        let path = temp.path().join("levels.json");
        fs::write(
            &path,
            r#"{ "levels": [ { "collectibles": [{ "kind": "phoenix", "count": 24 }] } ] }"#,
        )
        .expect("write catalog");

        let catalog = LevelCatalog::load(&path).expect("load");
        assert_eq!(catalog.level(1).expect("level").collectible_count(), 24);
    }

    #[test]
    fn missing_catalog_file_is_a_read_error() {
        let temp = TempDir::new().expect("temp");
        let result = LevelCatalog::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::ReadCatalog { .. })));
    }
}
