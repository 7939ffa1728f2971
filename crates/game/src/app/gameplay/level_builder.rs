use rand::Rng;
use tracing::info;

use super::catalog::LevelSpec;
use super::collectible::Collectible;
use super::error::ConfigError;
use super::geometry::GridCell;
use super::hazard::Hazard;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BuiltLevel {
    pub(crate) hazards: Vec<Hazard>,
    pub(crate) collectibles: Vec<Collectible>,
    /// Sum of every collectible's points for this level.
    pub(crate) max_score: u32,
}

/// Instantiates a level's hazards and places its collectibles on distinct
/// random grid cells.
pub(crate) fn build_level<R: Rng + ?Sized>(
    level: usize,
    spec: &LevelSpec,
    rng: &mut R,
) -> Result<BuiltLevel, ConfigError> {
    spec.check(level)?;

    let mut hazards = Vec::with_capacity(spec.hazard_count());
    for &(kind, count) in &spec.hazards {
        for _ in 0..count {
            hazards.push(Hazard::spawn(kind, rng));
        }
    }

    let mut free_cells: Vec<GridCell> = GridCell::all().collect();
    let mut collectibles = Vec::with_capacity(spec.collectible_count());
    let mut max_score = 0u32;
    for &(kind, count) in &spec.collectibles {
        for _ in 0..count {
            let cell = free_cells.swap_remove(rng.gen_range(0..free_cells.len()));
            collectibles.push(Collectible::new(kind, cell));
            max_score = max_score.saturating_add(kind.points());
        }
    }

    info!(
        level,
        hazards = hazards.len(),
        collectibles = collectibles.len(),
        free_cells = free_cells.len(),
        max_score,
        "level_built"
    );
    Ok(BuiltLevel {
        hazards,
        collectibles,
        max_score,
    })
}
