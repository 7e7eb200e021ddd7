//! Built-in 5x7 pixel font for captions and placeholder names.
//!
//! Each glyph is seven rows of five bits, most significant bit on the left.
//! Lowercase letters render as uppercase; anything without a glyph renders
//! as `?`.

use image::{Rgb, RgbImage};

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs, in font pixels.
const SPACING: u32 = 1;

/// Bitmap rows for a character.
#[rustfmt::skip]
pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '/' => [0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        _ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
    }
}

/// Width in canvas pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * (GLYPH_WIDTH + SPACING) - SPACING) * scale
}

/// Largest scale (at most `max_scale`, at least 1) at which `text` fits in `max_width`.
pub fn fit_scale(text: &str, max_width: u32, max_scale: u32) -> u32 {
    (1..=max_scale.max(1))
        .rev()
        .find(|&s| text_width(text, s) <= max_width)
        .unwrap_or(1)
}

/// Draw `text` with its top-left corner at (`x`, `y`). Pixels off the canvas are clipped.
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: i64, y: i64, color: Rgb<u8>, scale: u32) {
    let scale = i64::from(scale.max(1));
    let advance = i64::from(GLYPH_WIDTH + SPACING) * scale;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i64 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = origin_x + i64::from(col) * scale;
                let py = y + row as i64 * scale;
                fill_block(canvas, px, py, scale, color);
            }
        }
    }
}

/// Draw `text` centered on (`cx`, `cy`), shrinking to fit inside `max_width`.
///
/// Text that does not fit even at scale 1 is cut to the characters that do.
pub fn draw_text_centered(
    canvas: &mut RgbImage,
    text: &str,
    cx: u32,
    cy: u32,
    max_width: u32,
    color: Rgb<u8>,
    max_scale: u32,
) {
    let scale = fit_scale(text, max_width, max_scale);
    let fitted: String = if text_width(text, scale) <= max_width {
        text.to_string()
    } else {
        let per_char = (GLYPH_WIDTH + SPACING) * scale;
        let keep = ((max_width + SPACING * scale) / per_char) as usize;
        text.chars().take(keep).collect()
    };
    let width = i64::from(text_width(&fitted, scale));
    let height = i64::from(GLYPH_HEIGHT * scale);
    let x = i64::from(cx) - width / 2;
    let y = i64::from(cy) - height / 2;
    draw_text(canvas, &fitted, x, y, color, scale);
}

fn fill_block(canvas: &mut RgbImage, x: i64, y: i64, size: i64, color: Rgb<u8>) {
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for py in y.max(0)..(y + size).min(h) {
        for px in x.max(0)..(x + size).min(w) {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([255, 255, 255]);
    const PAPER: Rgb<u8> = Rgb([0, 0, 0]);

    fn inked(canvas: &RgbImage) -> usize {
        canvas.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn unknown_renders_question_mark() {
        assert_eq!(glyph('~'), glyph('?'));
        assert_eq!(glyph('é'), glyph('?'));
    }

    #[test]
    fn glyph_rows_fit_width() {
        for c in (' '..='~').chain(['é']) {
            for row in glyph(c) {
                assert!(row < 1 << GLYPH_WIDTH, "{c:?}");
            }
        }
    }

    #[test]
    fn width_calculation() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 2), 22);
    }

    #[test]
    fn fit_scale_shrinks() {
        assert_eq!(fit_scale("ABC", 100, 2), 2);
        assert_eq!(fit_scale("ABC", 20, 2), 1);
        assert_eq!(fit_scale("ABCDEFGHIJ", 5, 2), 1);
    }

    #[test]
    fn draws_expected_pixel_count() {
        let mut canvas = RgbImage::from_pixel(20, 20, PAPER);
        draw_text(&mut canvas, "I", 0, 0, INK, 1);
        let bits: u32 = glyph('I').iter().map(|r| r.count_ones()).sum();
        assert_eq!(inked(&canvas), bits as usize);

        let mut canvas = RgbImage::from_pixel(20, 20, PAPER);
        draw_text(&mut canvas, "I", 0, 0, INK, 2);
        assert_eq!(inked(&canvas), bits as usize * 4);
    }

    #[test]
    fn clips_off_canvas() {
        let mut canvas = RgbImage::from_pixel(4, 4, PAPER);
        draw_text(&mut canvas, "W", -1, -1, INK, 2);
        assert!(inked(&canvas) > 0);
    }

    #[test]
    fn centered_text_is_symmetric_for_symmetric_glyph() {
        let mut canvas = RgbImage::from_pixel(41, 21, PAPER);
        draw_text_centered(&mut canvas, "O", 20, 10, 40, INK, 1);
        // "O" is 5 wide: columns 18..=22
        assert_eq!(*canvas.get_pixel(18, 10), INK);
        assert_eq!(*canvas.get_pixel(22, 10), INK);
        assert_eq!(*canvas.get_pixel(17, 10), PAPER);
        assert_eq!(*canvas.get_pixel(23, 10), PAPER);
    }

    #[test]
    fn overlong_text_is_cut() {
        let mut canvas = RgbImage::from_pixel(30, 10, PAPER);
        draw_text_centered(&mut canvas, "MMMMMMMMMM", 15, 5, 11, INK, 2);
        // only two glyphs fit in 11 pixels at scale 1
        for x in 0..9 {
            for y in 0..10 {
                assert_eq!(*canvas.get_pixel(x, y), PAPER, "({x}, {y})");
            }
        }
    }
}
