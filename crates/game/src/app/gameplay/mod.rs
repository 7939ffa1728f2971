mod actor;
mod catalog;
mod collectible;
mod entity;
mod error;
mod events;
mod geometry;
mod hazard;
mod level_builder;
mod session;
mod simulation;

pub(crate) use actor::ActorKind;
pub(crate) use catalog::LevelCatalog;
pub(crate) use error::ConfigError;
pub(crate) use events::{dispatch, AudioPlayer, Presenter, THEME_SOUND};
pub(crate) use geometry::{
    Direction, CANVAS_HEIGHT, CANVAS_WIDTH, GRID_COLUMNS, HOME_ROW_Y, LANE_ROWS,
};
pub(crate) use session::{Session, SessionState};
pub(crate) use simulation::{SimulationLoop, DEFAULT_COLLISION_REACH_PX};

/// Every sprite the board can draw, for preloading.
pub(crate) fn sprite_manifest() -> Vec<&'static str> {
    let mut sprites: Vec<&'static str> = Vec::new();
    sprites.extend(hazard::HazardKind::ALL.map(hazard::HazardKind::sprite));
    sprites.extend(collectible::CollectibleKind::ALL.map(collectible::CollectibleKind::sprite));
    sprites.extend(ActorKind::ALL.map(ActorKind::sprite));
    sprites
}
