use std::collections::HashSet;

use tracing::warn;

use super::resources::{SpriteHandle, SpriteResources};
use super::text::{draw_text_clipped, text_width_px};
use super::{PLACEHOLDER_RECT_OFFSET, PLACEHOLDER_RECT_SIZE};
use crate::app::Vec2;

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPx {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RectPx {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Surface that scenes draw onto each frame. Coordinates are canvas pixels.
pub trait DrawTarget {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Rgba);
    /// Draws the sprite with its top-left corner at `position`.
    fn draw_sprite(&mut self, sprite_id: &str, position: Vec2);
    /// Fills `rect`, blending by the color's alpha channel.
    fn fill_rect(&mut self, rect: RectPx, color: Rgba);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgba);
    fn text_width(&self, text: &str) -> i32 {
        text_width_px(text)
    }
}

pub(crate) struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    sprites: &'a SpriteResources,
    warned_unknown: &'a mut HashSet<String>,
}

impl<'a> FrameCanvas<'a> {
    pub(crate) fn new(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        sprites: &'a SpriteResources,
        warned_unknown: &'a mut HashSet<String>,
    ) -> Self {
        Self {
            frame,
            width,
            height,
            sprites,
            warned_unknown,
        }
    }
}

impl DrawTarget for FrameCanvas<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    fn draw_sprite(&mut self, sprite_id: &str, position: Vec2) {
        let left = position.x.round() as i32;
        let top = position.y.round() as i32;
        match self.sprites.get(sprite_id) {
            Some(SpriteHandle::Image {
                width,
                height,
                rgba,
            }) => blit_rgba(
                self.frame,
                self.width,
                self.height,
                left,
                top,
                *width,
                *height,
                rgba,
            ),
            Some(SpriteHandle::Placeholder { tint }) => {
                draw_placeholder(self.frame, self.width, self.height, left, top, *tint)
            }
            None => {
                if self.warned_unknown.insert(sprite_id.to_string()) {
                    warn!(sprite_id, "sprite_not_in_manifest_using_placeholder");
                }
                draw_placeholder(
                    self.frame,
                    self.width,
                    self.height,
                    left,
                    top,
                    UNKNOWN_SPRITE_TINT,
                );
            }
        }
    }

    fn fill_rect(&mut self, rect: RectPx, color: Rgba) {
        fill_rect_clipped(self.frame, self.width, self.height, rect, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgba) {
        draw_text_clipped(self.frame, self.width, self.height, x, y, text, color);
    }
}

const UNKNOWN_SPRITE_TINT: Rgba = [220, 220, 240, 255];

fn draw_placeholder(frame: &mut [u8], width: u32, height: u32, left: i32, top: i32, tint: Rgba) {
    let rect = RectPx::new(
        left + PLACEHOLDER_RECT_OFFSET.0,
        top + PLACEHOLDER_RECT_OFFSET.1,
        PLACEHOLDER_RECT_SIZE.0,
        PLACEHOLDER_RECT_SIZE.1,
    );
    fill_rect_clipped(frame, width, height, rect, tint);
}

pub(crate) fn write_pixel_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: Rgba,
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let offset = (y as usize * width as usize + x as usize) * 4;
    let Some(pixel) = frame.get_mut(offset..offset + 4) else {
        return;
    };
    pixel.copy_from_slice(&color);
}

fn fill_rect_clipped(frame: &mut [u8], width: u32, height: u32, rect: RectPx, color: Rgba) {
    let alpha = color[3];
    if alpha == 0 || rect.width <= 0 || rect.height <= 0 {
        return;
    }
    let left = rect.x.max(0);
    let top = rect.y.max(0);
    let right = rect.x.saturating_add(rect.width).min(width as i32);
    let bottom = rect.y.saturating_add(rect.height).min(height as i32);
    if left >= right || top >= bottom {
        return;
    }
    for y in top..bottom {
        let row_offset = y as usize * width as usize * 4;
        for x in left..right {
            let offset = row_offset + x as usize * 4;
            let Some(pixel) = frame.get_mut(offset..offset + 4) else {
                return;
            };
            if alpha == u8::MAX {
                pixel.copy_from_slice(&color);
            } else {
                blend_into(pixel, color);
            }
        }
    }
}

fn blend_into(pixel: &mut [u8], color: Rgba) {
    let alpha = u16::from(color[3]);
    let inverse = 255 - alpha;
    for channel in 0..3 {
        let blended =
            (u16::from(color[channel]) * alpha + u16::from(pixel[channel]) * inverse) / 255;
        pixel[channel] = blended as u8;
    }
    pixel[3] = u8::MAX;
}

#[allow(clippy::too_many_arguments)]
fn blit_rgba(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    sprite_width: u32,
    sprite_height: u32,
    rgba: &[u8],
) {
    if sprite_width == 0 || sprite_height == 0 || width == 0 || height == 0 {
        return;
    }
    let expected_len = sprite_width as usize * sprite_height as usize * 4;
    if rgba.len() < expected_len {
        return;
    }
    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = left.saturating_add(sprite_width as i32).min(width as i32);
    let draw_bottom = top.saturating_add(sprite_height as i32).min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let frame_width = width as usize;
    let sprite_width = sprite_width as usize;
    for out_y in draw_top..draw_bottom {
        let src_row_offset = (out_y - top) as usize * sprite_width * 4;
        let dst_row_offset = out_y as usize * frame_width * 4;
        for out_x in draw_left..draw_right {
            let src_offset = src_row_offset + (out_x - left) as usize * 4;
            let alpha = rgba[src_offset + 3];
            if alpha == 0 {
                continue;
            }
            let dst_offset = dst_row_offset + out_x as usize * 4;
            let source = [
                rgba[src_offset],
                rgba[src_offset + 1],
                rgba[src_offset + 2],
                alpha,
            ];
            if alpha == u8::MAX {
                frame[dst_offset..dst_offset + 4].copy_from_slice(&source);
            } else {
                blend_into(&mut frame[dst_offset..dst_offset + 4], source);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const BLACK: Rgba = [0, 0, 0, 255];

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> Rgba {
        let offset = ((y * width + x) * 4) as usize;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    #[test]
    fn fill_rect_is_clipped_to_the_frame() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        fill_rect_clipped(&mut frame, 4, 4, RectPx::new(-2, 2, 10, 10), RED);
        assert_eq!(pixel(&frame, 4, 0, 1), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 4, 0, 2), RED);
        assert_eq!(pixel(&frame, 4, 3, 3), RED);
    }

    #[test]
    fn translucent_fill_blends_with_existing_pixels() {
        let mut frame = BLACK.repeat(4);
        fill_rect_clipped(&mut frame, 2, 2, RectPx::new(0, 0, 1, 1), [255, 255, 255, 128]);
        let blended = pixel(&frame, 2, 0, 0);
        assert_eq!(blended[0], 128);
        assert_eq!(blended[3], 255);
        assert_eq!(pixel(&frame, 2, 1, 0), BLACK);
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut frame = BLACK.repeat(4);
        let rgba = [RED, [0, 255, 0, 0]].concat();
        blit_rgba(&mut frame, 2, 2, 0, 1, 2, 1, &rgba);
        assert_eq!(pixel(&frame, 2, 0, 1), RED);
        assert_eq!(pixel(&frame, 2, 1, 1), BLACK);
        assert_eq!(pixel(&frame, 2, 0, 0), BLACK);
    }

    #[test]
    fn blit_handles_offscreen_origin() {
        let mut frame = BLACK.repeat(4);
        let rgba = RED.repeat(4);
        blit_rgba(&mut frame, 2, 2, -1, -1, 2, 2, &rgba);
        assert_eq!(pixel(&frame, 2, 0, 0), RED);
        assert_eq!(pixel(&frame, 2, 1, 1), BLACK);

        blit_rgba(&mut frame, 2, 2, -100, 0, 2, 2, &rgba);
        blit_rgba(&mut frame, 2, 2, 505, 0, 2, 2, &rgba);
    }

    #[test]
    fn unknown_sprite_draws_placeholder_and_warns_once() {
        let resources = SpriteResources::new(PathBuf::from("/nonexistent"));
        let mut warned = HashSet::new();
        let mut frame = vec![0u8; 101 * 171 * 4];
        let mut canvas = FrameCanvas::new(&mut frame, 101, 171, &resources, &mut warned);

        canvas.draw_sprite("vader-color", Vec2::new(0.0, 0.0));
        canvas.draw_sprite("vader-color", Vec2::new(0.0, 0.0));
        drop(canvas);

        assert_eq!(warned.len(), 1);
        let inside = pixel(
            &frame,
            101,
            PLACEHOLDER_RECT_OFFSET.0 as u32,
            PLACEHOLDER_RECT_OFFSET.1 as u32,
        );
        assert_eq!(inside, UNKNOWN_SPRITE_TINT);
        assert_eq!(pixel(&frame, 101, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn clear_paints_every_pixel() {
        let resources = SpriteResources::new(PathBuf::from("/nonexistent"));
        let mut warned = HashSet::new();
        let mut frame = vec![0u8; 3 * 3 * 4];
        let mut canvas = FrameCanvas::new(&mut frame, 3, 3, &resources, &mut warned);
        canvas.clear(RED);
        assert_eq!(canvas.size(), (3, 3));
        drop(canvas);
        assert!(frame.chunks_exact(4).all(|chunk| chunk == RED));
    }
}
