//! Bitmap Text Rendering
//!
//! Procedural 5x7 bitmap font drawn with filled rectangles, plus the scrolling
//! white-to-gold gradient used for the stats readout while a golden buff is
//! active.
//!
//! Every glyph occupies a `6 * scale` pixel wide cell (5 pixels + 1 spacing)
//! and is `7 * scale` pixels tall. Lowercase letters render as uppercase.

use crate::surface::{DrawSurface, lerp_color};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Width of one glyph cell in font pixels, including spacing
pub const GLYPH_ADVANCE: u32 = 6;
/// Height of one glyph in font pixels
pub const GLYPH_HEIGHT: u32 = 7;

pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const GOLD: Color = Color::RGB(255, 215, 0);

const UNKNOWN_GLYPH: [u8; 7] = [0b11111; 7];

/// Row bitmaps for `c`, most significant of the low 5 bits is the leftmost pixel
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        _ => UNKNOWN_GLYPH,
    }
}

/// Width and height in screen pixels of `text` drawn at `scale`
pub fn measure_text(text: &str, scale: u32) -> (u32, u32) {
    let glyphs = text.chars().count() as u32;
    (glyphs * GLYPH_ADVANCE * scale, GLYPH_HEIGHT * scale)
}

fn draw_glyph<S: DrawSurface + ?Sized>(
    surface: &mut S,
    c: char,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let pixel = scale as i32;
    for (row, bits) in glyph(c).iter().enumerate() {
        for col in 0..5 {
            if (bits >> (4 - col)) & 1 == 1 {
                surface.fill_rect(
                    Rect::new(x + col * pixel, y + row as i32 * pixel, scale, scale),
                    color,
                )?;
            }
        }
    }
    Ok(())
}

/// Draws `text` with its top-left corner at (`x`, `y`)
pub fn draw_text<S: DrawSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let advance = (GLYPH_ADVANCE * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        if c != ' ' {
            draw_glyph(surface, c, x + i as i32 * advance, y, color, scale)?;
        }
    }
    Ok(())
}

/// Per-glyph colours for the scrolling gradient
///
/// Each glyph's position along the string (its x offset over the total
/// width) is shifted by `time * speed` and wrapped into `[0, 1)`, then used to
/// interpolate from `from` to `to`.
pub fn gradient_colors(text: &str, time: f64, speed: f64, from: Color, to: Color) -> Vec<Color> {
    let count = text.chars().count();
    if count == 0 {
        return Vec::new();
    }
    let scroll = (time * speed).rem_euclid(1.0);
    (0..count)
        .map(|i| {
            let offset = i as f64 / count as f64;
            let rel = (offset + scroll).rem_euclid(1.0);
            lerp_color(from, to, rel as f32)
        })
        .collect()
}

/// Draws `text` with the white-to-gold scrolling gradient
pub fn draw_gradient_text<S: DrawSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    scale: u32,
    time: f64,
    speed: f64,
) -> Result<(), String> {
    let advance = (GLYPH_ADVANCE * scale) as i32;
    let colors = gradient_colors(text, time, speed, WHITE, GOLD);
    for (i, (c, color)) in text.chars().zip(colors).enumerate() {
        if c != ' ' {
            draw_glyph(surface, c, x + i as i32 * advance, y, color, scale)?;
        }
    }
    Ok(())
}
