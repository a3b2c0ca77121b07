//! Bitmap glyphs: score digits and the title banner
//!
//! Glyphs are row-major on/off cells; each "on" cell is painted as a filled
//! `size`x`size` square.

use super::pixels::{Color, PixelBuffer};
use super::shapes::fill_square;
use crate::Position;

pub const DIGIT_COLUMNS: usize = 3;
pub const DIGIT_ROWS: usize = 5;

/// 3x5 digits 0-9
#[rustfmt::skip]
pub const DIGIT_GLYPHS: [[u8; DIGIT_COLUMNS * DIGIT_ROWS]; 10] = [
    [1, 1, 1,
     1, 0, 1,
     1, 0, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 0,
     0, 1, 0,
     0, 1, 0,
     0, 1, 0,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     1, 1, 1,
     1, 0, 0,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     0, 1, 1,
     0, 0, 1,
     1, 1, 1],
    [1, 0, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     0, 0, 1],
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1],
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
];

pub const TITLE_COLUMNS: usize = 19;
pub const TITLE_ROWS: usize = 5;

/// "START", 19x5
#[rustfmt::skip]
pub const TITLE_GLYPH: [u8; TITLE_COLUMNS * TITLE_ROWS] = [
    1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1,
    1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0,
    1, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 0,
    0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0,
    1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0,
];

/// Paint `cells` as a grid `columns` wide with its top-left at `(start_x, start_y)`
fn draw_cells(
    buf: &mut PixelBuffer,
    cells: &[u8],
    columns: usize,
    start_x: i32,
    start_y: i32,
    size: i32,
    color: Color,
) {
    let mut x = start_x;
    let mut y = start_y;
    for (i, &cell) in cells.iter().enumerate() {
        if cell == 1 {
            fill_square(buf, x, y, size, color);
        }
        x += size;
        if (i + 1) % columns == 0 {
            y += size;
            x -= size * columns as i32;
        }
    }
}

/// Draw a single digit centered at `pos`. Values above 9 draw nothing.
pub fn draw_digit(buf: &mut PixelBuffer, pos: Position, color: Color, size: i32, digit: u32) {
    let Some(cells) = DIGIT_GLYPHS.get(digit as usize) else {
        return;
    };
    let start_x = pos.x as i32 - (size * DIGIT_COLUMNS as i32) / 2;
    let start_y = pos.y as i32 - (size * DIGIT_ROWS as i32) / 2;
    draw_cells(buf, cells, DIGIT_COLUMNS, start_x, start_y, size, color);
}

/// Draw the title banner centered on the canvas, in white
pub fn draw_title(buf: &mut PixelBuffer, size: i32) {
    let start_x = (buf.width() as i32 - TITLE_COLUMNS as i32 * size) / 2;
    let start_y = (buf.height() as i32 - TITLE_ROWS as i32 * size) / 2;
    draw_cells(buf, &TITLE_GLYPH, TITLE_COLUMNS, start_x, start_y, size, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Sample the center of every cell of a glyph drawn at `(start_x, start_y)`
    fn sample_cells(
        buf: &PixelBuffer,
        columns: usize,
        rows: usize,
        start_x: i32,
        start_y: i32,
        size: i32,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(columns * rows);
        for row in 0..rows as i32 {
            for col in 0..columns as i32 {
                let x = start_x + col * size + size / 2;
                let y = start_y + row * size + size / 2;
                out.push(buf.is_lit(x as usize, y as usize) as u8);
            }
        }
        out
    }

    #[test]
    fn test_digit_zero_pattern() {
        let mut buf = PixelBuffer::new(800, 600);
        draw_digit(&mut buf, Vec2::new(120.0, 60.0), Color::WHITE, 15, 0);

        // 120 - 45/2 = 98, 60 - 75/2 = 23
        let cells = sample_cells(&buf, 3, 5, 98, 23, 15);
        assert_eq!(cells, DIGIT_GLYPHS[0].to_vec());
        #[rustfmt::skip]
        let expected = [
            1, 1, 1,
            1, 0, 1,
            1, 0, 1,
            1, 0, 1,
            1, 1, 1,
        ];
        assert_eq!(cells, expected.to_vec());
    }

    #[test]
    fn test_digit_cells_are_full_squares() {
        let mut buf = PixelBuffer::new(800, 600);
        draw_digit(&mut buf, Vec2::new(120.0, 60.0), Color::WHITE, 15, 7);

        let lit = buf.pixels().iter().filter(|c| c.r != 0).count();
        let on = DIGIT_GLYPHS[7].iter().filter(|&&c| c == 1).count();
        assert_eq!(lit, on * 15 * 15);
        // Bounding box corners
        assert!(buf.is_lit(98, 23));
        assert!(buf.is_lit(98 + 44, 23));
        assert!(!buf.is_lit(97, 23));
        assert!(!buf.is_lit(98 + 45, 23));
    }

    #[test]
    fn test_every_digit_round_trips_through_pixels() {
        for digit in 0..10u32 {
            let mut buf = PixelBuffer::new(200, 200);
            draw_digit(&mut buf, Vec2::new(100.0, 100.0), Color::WHITE, 4, digit);
            // 100 - 12/2 = 94, 100 - 20/2 = 90
            let cells = sample_cells(&buf, 3, 5, 94, 90, 4);
            assert_eq!(cells, DIGIT_GLYPHS[digit as usize].to_vec(), "digit {digit}");
        }
    }

    #[test]
    fn test_digit_out_of_table_is_skipped() {
        let mut buf = PixelBuffer::new(200, 200);
        draw_digit(&mut buf, Vec2::new(100.0, 100.0), Color::WHITE, 4, 10);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_digit_uses_given_color() {
        let mut buf = PixelBuffer::new(200, 200);
        let green = Color::new(0, 255, 0, 255);
        draw_digit(&mut buf, Vec2::new(100.0, 100.0), green, 4, 1);
        assert_eq!(buf.pixel(94, 90), Some(Color::new(0, 255, 0, 0)));
    }

    #[test]
    fn test_title_centered_on_canvas() {
        let mut buf = PixelBuffer::new(800, 600);
        draw_title(&mut buf, 15);

        // (800 - 285) / 2 = 257, (600 - 75) / 2 = 262
        let cells = sample_cells(&buf, 19, 5, 257, 262, 15);
        assert_eq!(cells, TITLE_GLYPH.to_vec());

        let lit = buf.pixels().iter().filter(|c| c.r != 0).count();
        let on = TITLE_GLYPH.iter().filter(|&&c| c == 1).count();
        assert_eq!(lit, on * 15 * 15);
        assert!(buf.is_lit(257, 262));
        assert!(!buf.is_lit(256, 262));
    }
}
