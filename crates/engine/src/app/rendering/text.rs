//! 3x5 bitmap font for HUD and prompt text.
//!
//! Lowercase input is drawn with the uppercase glyphs; characters without a
//! glyph advance like a space.

use super::canvas::{write_pixel_clipped, Rgba};

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: usize = 5;
pub(crate) const TEXT_SCALE: i32 = 2;
pub(crate) const GLYPH_ADVANCE: i32 = (GLYPH_WIDTH + 1) * TEXT_SCALE;

type GlyphRows = [u8; GLYPH_HEIGHT];

#[rustfmt::skip]
const FONT: &[(char, GlyphRows)] = &[
    ('A', [2, 5, 7, 5, 5]), ('B', [6, 5, 6, 5, 6]), ('C', [7, 4, 4, 4, 7]),
    ('D', [6, 5, 5, 5, 6]), ('E', [7, 4, 6, 4, 7]), ('F', [7, 4, 6, 4, 4]),
    ('G', [7, 4, 5, 5, 7]), ('H', [5, 5, 7, 5, 5]), ('I', [7, 2, 2, 2, 7]),
    ('J', [1, 1, 1, 5, 7]), ('K', [5, 5, 6, 5, 5]), ('L', [4, 4, 4, 4, 7]),
    ('M', [5, 7, 7, 5, 5]), ('N', [6, 5, 5, 5, 5]), ('O', [7, 5, 5, 5, 7]),
    ('P', [6, 5, 6, 4, 4]), ('Q', [7, 5, 5, 7, 1]), ('R', [6, 5, 6, 5, 5]),
    ('S', [7, 4, 7, 1, 7]), ('T', [7, 2, 2, 2, 2]), ('U', [5, 5, 5, 5, 7]),
    ('V', [5, 5, 5, 5, 2]), ('W', [5, 5, 7, 7, 5]), ('X', [5, 5, 2, 5, 5]),
    ('Y', [5, 5, 2, 2, 2]), ('Z', [7, 1, 2, 4, 7]),
    ('0', [7, 5, 5, 5, 7]), ('1', [2, 6, 2, 2, 7]), ('2', [7, 1, 7, 4, 7]),
    ('3', [7, 1, 7, 1, 7]), ('4', [5, 5, 7, 1, 1]), ('5', [7, 4, 7, 1, 7]),
    ('6', [7, 4, 7, 5, 7]), ('7', [7, 1, 2, 2, 2]), ('8', [7, 5, 7, 5, 7]),
    ('9', [7, 5, 7, 1, 7]),
    ('.', [0, 0, 0, 0, 2]), (',', [0, 0, 0, 2, 4]), ('!', [2, 2, 2, 0, 2]),
    ('?', [7, 1, 3, 0, 2]), (':', [0, 2, 0, 2, 0]), ('-', [0, 0, 7, 0, 0]),
    ('/', [1, 1, 2, 4, 4]), ('\'', [2, 2, 0, 0, 0]), ('(', [1, 2, 2, 2, 1]),
    (')', [4, 2, 2, 2, 4]), ('+', [0, 2, 7, 2, 0]), ('>', [4, 2, 1, 2, 4]),
    ('<', [1, 2, 4, 2, 1]),
];

fn glyph_for(ch: char) -> Option<GlyphRows> {
    let upper = ch.to_ascii_uppercase();
    FONT.iter()
        .find(|(glyph_char, _)| *glyph_char == upper)
        .map(|(_, rows)| *rows)
}

pub(crate) fn text_width_px(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE
}

pub(crate) fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    text: &str,
    color: Rgba,
) {
    for ch in text.chars() {
        if let Some(rows) = glyph_for(ch) {
            draw_glyph(frame, width, height, x, y, rows, color);
        }
        x += GLYPH_ADVANCE;
    }
}

fn draw_glyph(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    rows: GlyphRows,
    color: Rgba,
) {
    for (row_index, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let left = x + col * TEXT_SCALE;
            let top = y + row_index as i32 * TEXT_SCALE;
            for sy in 0..TEXT_SCALE {
                for sx in 0..TEXT_SCALE {
                    write_pixel_clipped(frame, width, height, left + sx, top + sy, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [255, 255, 255, 255];

    #[test]
    fn letters_digits_and_prompt_punctuation_have_glyphs() {
        for ch in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,!?:-/'()+<>".chars() {
            assert!(glyph_for(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph_for('m'), glyph_for('M'));
    }

    #[test]
    fn width_counts_every_character() {
        assert_eq!(text_width_px("Try Again"), 9 * GLYPH_ADVANCE);
    }

    #[test]
    fn drawing_outside_the_frame_is_safe() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        draw_text_clipped(&mut frame, 8, 8, -20, -20, "GAME OVER", WHITE);
        draw_text_clipped(&mut frame, 8, 8, 6, 6, "LEVEL 3", WHITE);
        assert_eq!(frame.len(), 8 * 8 * 4);
    }

    #[test]
    fn glyph_pixels_are_written_at_scale() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        draw_text_clipped(&mut frame, 16, 16, 0, 0, "I", WHITE);
        // Top row of 'I' is solid, so the first scaled pixel block is lit.
        assert_eq!(&frame[0..4], &WHITE);
        let below = (TEXT_SCALE as usize * 16) * 4;
        assert_eq!(&frame[below..below + 4], &[0, 0, 0, 0]);
    }
}
