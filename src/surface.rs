//! Drawing surface abstraction
//!
//! Game code never touches the SDL2 canvas directly. It issues primitive draw
//! calls against a [`DrawSurface`], which keeps rendering logic testable: the
//! SDL2-backed [`SdlSurface`] is used by the game, and tests use a recording
//! surface that just logs the calls.
//!
//! # Primitives
//!
//! - Filled rectangles (optionally rounded)
//! - Filled circles
//! - Lines
//! - Sprite blits with rotation and scaling (via the destination rect)
//!
//! All colors may carry alpha; the SDL2 surface blends them over what is
//! already drawn.

use crate::assets::SpriteBank;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Sprites the game can blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Big pickle in the middle of the screen
    MainPickle,
    /// Decorative falling pickle
    FallingPickle,
    /// Clickable bonus pickle
    GoldenPickle,
}

/// Primitive drawing operations consumed by the renderer
pub trait DrawSurface {
    /// Logical size of the drawable area in pixels
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String>;

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), String>;

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), String>;

    /// Draws `sprite` stretched to `dest`, rotated `angle` degrees about its centre
    fn blit(&mut self, sprite: SpriteId, dest: Rect, angle: f32) -> Result<(), String>;

    /// Shows the finished frame
    fn present(&mut self);
}

/// Linear interpolation between two colours, `t` clamped to `[0, 1]`
///
/// Channels are truncated toward zero, so `t = 1` lands exactly on `to`.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color::RGBA(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    )
}

/// SDL2-backed surface: a window canvas plus the loaded sprites
pub struct SdlSurface<'a> {
    canvas: Canvas<Window>,
    sprites: SpriteBank<'a>,
}

impl<'a> SdlSurface<'a> {
    pub fn new(mut canvas: Canvas<Window>, sprites: SpriteBank<'a>) -> Self {
        canvas.set_blend_mode(BlendMode::Blend);
        SdlSurface { canvas, sprites }
    }
}

fn to_i16(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

impl DrawSurface for SdlSurface<'_> {
    fn size(&self) -> (u32, u32) {
        match self.canvas.logical_size() {
            (0, 0) => self.canvas.window().size(),
            size => size,
        }
    }

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String> {
        self.canvas.rounded_box(
            to_i16(rect.left()),
            to_i16(rect.top()),
            to_i16(rect.right() - 1),
            to_i16(rect.bottom() - 1),
            to_i16(radius as i32),
            color,
        )
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), String> {
        self.canvas
            .filled_circle(to_i16(center.x()), to_i16(center.y()), to_i16(radius as i32), color)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_line(from, to)
    }

    fn blit(&mut self, sprite: SpriteId, dest: Rect, angle: f32) -> Result<(), String> {
        let texture = self.sprites.texture(sprite);
        self.canvas
            .copy_ex(texture, None, Some(dest), angle as f64, None, false, false)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
