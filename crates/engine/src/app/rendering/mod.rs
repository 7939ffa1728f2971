mod canvas;
mod renderer;
mod resources;
mod text;

pub use canvas::{DrawTarget, RectPx, Rgba};
pub(crate) use renderer::{CanvasSize, Renderer};
pub use resources::{SpriteHandle, SpriteResources};

/// Placeholder boxes sit where the figure would be inside a 101x171 sprite tile.
pub(crate) const PLACEHOLDER_RECT_OFFSET: (i32, i32) = (10, 60);
pub(crate) const PLACEHOLDER_RECT_SIZE: (i32, i32) = (81, 80);
