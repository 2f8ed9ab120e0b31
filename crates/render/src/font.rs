//! Built-in 5x7 bitmap font for poster titles.
//!
//! Titles are short captions, so a tiny block font drawn with
//! [`Surface::fill_rect`] is enough and keeps rendering free of font files.
//! The font has capitals only: lower-case input is upper-cased, so a title
//! such as "Interactive Poster • pastel Blob" is shown in all caps.
//! Characters without a glyph render as blank space.

use poster_core::Srgb;

use crate::surface::Surface;

const GLYPH_COLUMNS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Horizontal advance in cells, including one column of spacing.
const ADVANCE: f32 = 6.0;
/// Lit cells are widened by this factor to fake a bold weight.
const BOLD_WIDEN: f32 = 1.35;
/// Cap height as a fraction of the font size.
const CAP_HEIGHT: f64 = 0.7;

/// One glyph: seven rows, the high bit of each 5-bit row is the left column.
type Glyph = [u8; GLYPH_ROWS];

fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '•' => [0x00, 0x00, 0x0E, 0x0E, 0x0E, 0x00, 0x00],
        _ => [0; GLYPH_ROWS],
    }
}

/// Cell edge length in pixels for a font size given in pixels.
pub fn cell_size(font_px: f64) -> f32 {
    (font_px * CAP_HEIGHT / GLYPH_ROWS as f64).max(1.0) as f32
}

/// Width of `text` in pixels at the given cell size, without trailing spacing.
pub fn text_width(text: &str, cell: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n as f32 * ADVANCE - 1.0) * cell
}

/// Height of a line of text in pixels at the given cell size.
pub fn text_height(cell: f32) -> f32 {
    GLYPH_ROWS as f32 * cell
}

/// Draws `text` with its top-left corner at `(x, top)` in pixels.
///
/// Returns the number of rectangles painted.
pub fn draw_text(
    surface: &mut dyn Surface,
    text: &str,
    x: f32,
    top: f32,
    cell: f32,
    color: Srgb,
) -> usize {
    let mut painted = 0;
    for (i, c) in text.chars().enumerate() {
        let left = x + i as f32 * ADVANCE * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                    continue;
                }
                surface.fill_rect(
                    left + col as f32 * cell,
                    top + row as f32 * cell,
                    cell * BOLD_WIDEN,
                    cell,
                    color,
                    1.0,
                );
                painted += 1;
            }
        }
    }
    painted
}
