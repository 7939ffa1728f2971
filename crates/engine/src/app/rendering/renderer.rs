use std::collections::HashSet;
use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::canvas::{DrawTarget, FrameCanvas};
use super::resources::SpriteResources;

/// Logical canvas size; the window surface scales it to the real window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanvasSize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

pub(crate) struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    canvas: CanvasSize,
    warned_unknown_sprites: HashSet<String>,
}

impl Renderer {
    pub(crate) fn new(window: Arc<Window>, canvas: CanvasSize) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height, canvas)?;
        Ok(Self {
            window,
            pixels,
            canvas,
            warned_unknown_sprites: HashSet::new(),
        })
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height, self.canvas)?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
        canvas: CanvasSize,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(canvas.width, canvas.height, surface)
    }

    pub(crate) fn render_frame<F>(
        &mut self,
        sprites: &SpriteResources,
        draw: F,
    ) -> Result<(), Error>
    where
        F: FnOnce(&mut dyn DrawTarget),
    {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Ok(());
        }
        let frame = self.pixels.frame_mut();
        let mut canvas = FrameCanvas::new(
            frame,
            self.canvas.width,
            self.canvas.height,
            sprites,
            &mut self.warned_unknown_sprites,
        );
        draw(&mut canvas);
        self.pixels.render()
    }
}
