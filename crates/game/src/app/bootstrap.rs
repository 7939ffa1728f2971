use engine::LoopConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::GameConfig;
use super::gameplay::{
    ConfigError, LevelCatalog, Session, SimulationLoop, CANVAS_HEIGHT, CANVAS_WIDTH,
};
use super::scene_impl::RebelRunScene;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: RebelRunScene,
}

pub(crate) fn build_app() -> Result<AppWiring, ConfigError> {
    init_tracing();
    info!("=== Rebel Run Startup ===");

    let game_config = GameConfig::from_env()?;
    let catalog = match &game_config.catalog_path {
        Some(path) => LevelCatalog::load(path)?,
        None => LevelCatalog::standard(),
    };
    let rng = match game_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        seed = ?game_config.seed,
        catalog = ?game_config.catalog_path,
        collision_reach_px = game_config.collision_reach_px,
        "game_config"
    );

    let session = Session::new(catalog, rng)?;
    let scene = RebelRunScene::new(session, SimulationLoop::new(game_config.collision_reach_px));
    let config = LoopConfig {
        window_width: CANVAS_WIDTH as u32,
        window_height: CANVAS_HEIGHT as u32,
        ..LoopConfig::default()
    };

    Ok(AppWiring { config, scene })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
