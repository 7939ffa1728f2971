mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use rendering::{DrawTarget, RectPx, Rgba, SpriteHandle, SpriteResources};
pub use scene::{InputSnapshot, Scene, SceneCommand, Vec2};
