// Render pass
//
// Draws the whole frame back to front from a shared borrow of the game, so
// nothing can change while it runs. Layer order:
//
// 1. Background gradient
// 2. Falling pickles, then golden pickles
// 3. Buff glow behind the main pickle
// 4. Main pickle (scaled by the press pulse)
// 5. Stats text
// 6. Shop panel and shop button
// 7. Win banner

use super::state::Game;
use crate::economy::format_amount;
use crate::surface::{DrawSurface, SpriteId, lerp_color};
use crate::text::{GOLD, WHITE, draw_gradient_text, draw_text, measure_text};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Height of each background gradient band in pixels
const BACKGROUND_BAND: u32 = 4;
const PRESS_GROW: f32 = 0.1;
const GRADIENT_SPEED: f64 = 0.3;
const WIN_BANNER_SECS: f64 = 4.0;

const BALANCE_POS: (i32, i32) = (20, 20);
const BALANCE_SCALE: u32 = 4;
const RATES_POS: (i32, i32) = (20, 60);
const RATES_SCALE: u32 = 2;
const BANNER_SCALE: u32 = 3;

/// Top and bottom background colours at time `t`, slowly cycling
pub fn background_stops(t: f64) -> (Color, Color) {
    let wave = |base: f64, offset: f64| (base + 20.0 * (t * 0.1 + offset).sin()).clamp(0.0, 255.0) as u8;
    (
        Color::RGB(wave(30.0, 0.0), wave(30.0, 2.0), wave(50.0, 4.0)),
        Color::RGB(wave(10.0, 1.0), wave(10.0, 3.0), wave(30.0, 5.0)),
    )
}

/// Radius and colour of the pulsing glow while boosted
pub fn glow(t: f64) -> (u32, Color) {
    let phase = t * 1000.0 / 300.0;
    let radius = 80.0 + 20.0 * phase.sin();
    let alpha = 120.0 + 80.0 * (phase * 1.5).sin();
    (radius as u32, Color::RGBA(255, 255, 0, alpha as u8))
}

impl Game {
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        self.draw_background(surface)?;

        for entity in self.pools.decorative() {
            surface.blit(SpriteId::FallingPickle, entity.draw_rect(), entity.angle)?;
        }
        for entity in self.pools.golden() {
            surface.blit(SpriteId::GoldenPickle, entity.draw_rect(), entity.angle)?;
        }

        if self.buff.is_boosted() {
            let (radius, color) = glow(self.now);
            surface.fill_circle(self.main_rect.center(), radius, color)?;
        }

        let scale = 1.0 + PRESS_GROW * self.press;
        let main = Rect::from_center(
            self.main_rect.center(),
            (self.main_rect.width() as f32 * scale) as u32,
            (self.main_rect.height() as f32 * scale) as u32,
        );
        surface.blit(SpriteId::MainPickle, main, 0.0)?;

        self.draw_stats(surface)?;

        self.shop.draw(surface)?;
        self.shop_button.draw(surface)?;

        self.draw_win_banner(surface)?;

        surface.present();
        Ok(())
    }

    fn draw_background<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        let (width, height) = surface.size();
        let (top, bottom) = background_stops(self.now);
        surface.clear(bottom);

        let mut y = 0;
        while y < height {
            let ratio = y as f32 / height as f32;
            let band = BACKGROUND_BAND.min(height - y);
            surface.fill_rect(Rect::new(0, y as i32, width, band), lerp_color(top, bottom, ratio))?;
            y += BACKGROUND_BAND;
        }
        Ok(())
    }

    fn draw_stats<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        let balance = format!("Pickles: {}", format_amount(self.economy.balance()));
        let rates = format!(
            "PPC: {} x{}   PPS: {}",
            self.economy.click_power(),
            self.buff.click_multiplier() as u64,
            format_amount(self.economy.total_production_rate() * self.buff.production_multiplier())
        );

        if self.buff.is_boosted() {
            let (x, y) = BALANCE_POS;
            draw_gradient_text(surface, &balance, x, y, BALANCE_SCALE, self.now, GRADIENT_SPEED)?;
            let (x, y) = RATES_POS;
            draw_gradient_text(surface, &rates, x, y, RATES_SCALE, self.now, GRADIENT_SPEED)
        } else {
            let (x, y) = BALANCE_POS;
            draw_text(surface, &balance, x, y, WHITE, BALANCE_SCALE)?;
            let (x, y) = RATES_POS;
            draw_text(surface, &rates, x, y, WHITE, RATES_SCALE)
        }
    }

    fn draw_win_banner<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        let Some(won_at) = self.won_at else {
            return Ok(());
        };
        let elapsed = self.now - won_at;
        if !(0.0..WIN_BANNER_SECS).contains(&elapsed) {
            return Ok(());
        }

        let fade = 1.0 - elapsed / WIN_BANNER_SECS;
        let alpha = (255.0 * fade) as u8;
        let message = format!("{} PICKLES!", format_amount(self.config.economy.win_threshold));
        let (text_width, text_height) = measure_text(&message, BANNER_SCALE);
        let (width, height) = surface.size();
        let origin = Point::new(
            (width as i32 - text_width as i32) / 2,
            height as i32 - 100,
        );

        let backdrop = Rect::new(origin.x() - 12, origin.y() - 12, text_width + 24, text_height + 24);
        surface.fill_rounded_rect(backdrop, 8, Color::RGBA(0, 0, 0, alpha / 2))?;
        let color = Color::RGBA(GOLD.r, GOLD.g, GOLD.b, alpha);
        draw_text(surface, &message, origin.x(), origin.y(), color, BANNER_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::game;
    use super::*;
    use crate::falling::{FallingEntity, FallingKind};
    use crate::surface::testing::{DrawCall, RecordingSurface};

    fn render(game: &super::Game) -> RecordingSurface {
        let mut surface = RecordingSurface::new(800, 600);
        game.render(&mut surface).unwrap();
        surface
    }

    fn blit_of(sprite: SpriteId) -> impl Fn(&DrawCall) -> bool {
        move |call| matches!(call, DrawCall::Blit(id, ..) if *id == sprite)
    }

    #[test]
    fn test_layer_order() {
        let mut game = game();
        game.pools.push(FallingEntity::new(FallingKind::Decorative, 100.0, 100.0, 0.0, 0.0, 0.0, 40));
        game.pools.push(FallingEntity::new(FallingKind::Golden, 200.0, 100.0, 0.0, 0.0, 0.0, 40));
        game.buff.activate(0.0);
        game.shop.toggle(&game.economy);
        game.update(0.5, 1.0 / 60.0);

        let surface = render(&game);

        let background = surface.position(|c| matches!(c, DrawCall::Rect(r, _) if r.y() == 0 && r.width() == 800)).unwrap();
        let falling = surface.position(blit_of(SpriteId::FallingPickle)).unwrap();
        let golden = surface.position(blit_of(SpriteId::GoldenPickle)).unwrap();
        let glow = surface.position(|c| matches!(c, DrawCall::Circle(..))).unwrap();
        let main = surface.position(blit_of(SpriteId::MainPickle)).unwrap();
        let stats = surface.position(|c| matches!(c, DrawCall::Rect(r, _) if r.y() >= 20 && r.width() == 4)).unwrap();
        let panel = surface.position(|c| matches!(c, DrawCall::Line(..))).unwrap();
        let shop_button = surface
            .position(|c| matches!(c, DrawCall::RoundedRect(r, _) if r.contains_point(Point::new(750, 40))))
            .unwrap();
        let present = surface.position(|c| *c == DrawCall::Present).unwrap();

        assert_eq!(surface.calls[0], DrawCall::Clear(background_stops(0.5).1));
        assert!(background < falling);
        assert!(falling < golden);
        assert!(golden < glow);
        assert!(glow < main);
        assert!(main < stats);
        assert!(stats < panel);
        assert!(panel < shop_button);
        assert_eq!(present, surface.calls.len() - 1);
    }

    #[test]
    fn test_no_glow_without_buff() {
        let game = game();
        let surface = render(&game);
        assert!(surface.position(|c| matches!(c, DrawCall::Circle(..))).is_none());
    }

    #[test]
    fn test_press_pulse_scales_main_sprite() {
        let mut game = game();
        game.press = 1.0;

        let surface = render(&game);
        let main = surface.blits(SpriteId::MainPickle);

        assert_eq!(main.len(), 1);
        assert_eq!(main[0].size(), (165, 165));
        assert_eq!(main[0].center(), game.main_rect.center());
    }

    #[test]
    fn test_culled_entities_not_drawn() {
        let mut game = game();
        let limit = game.pools.cull_line();
        game.pools.push(FallingEntity::new(FallingKind::Decorative, 10.0, limit - 1.0, 120.0, 0.0, 0.0, 40));
        game.pools.push(FallingEntity::new(FallingKind::Decorative, 50.0, 100.0, 0.0, 0.0, 0.0, 40));

        game.update(1.0, 1.0 / 60.0);
        let surface = render(&game);

        assert_eq!(surface.blits(SpriteId::FallingPickle).len(), 1);
    }

    #[test]
    fn test_boosted_stats_use_gradient() {
        let mut game = game();
        game.buff.activate(0.0);
        game.update(0.0, 0.0);

        let surface = render(&game);
        let text_colours: Vec<Color> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(rect, color) if rect.width() == BALANCE_SCALE && rect.y() < 60 => Some(*color),
                _ => None,
            })
            .collect();

        assert!(text_colours.iter().any(|c| *c != WHITE));
    }

    #[test]
    fn test_win_banner_fades_out() {
        let mut game = game();
        game.economy.earn(1_000_000.0);
        game.update(10.0, 0.0);

        let surface = render(&game);
        let banner = surface
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::Rect(rect, color) if rect.width() == BANNER_SCALE && color.g == GOLD.g && color.a == 255));
        assert!(banner);

        game.update(10.0 + WIN_BANNER_SECS, 0.0);
        let surface = render(&game);
        assert!(!surface.calls.iter().any(|call| matches!(call, DrawCall::RoundedRect(_, color) if color.a < 255 && color.r == 0)));
    }

    #[test]
    fn test_glow_pulses_within_bounds() {
        for step in 0..200 {
            let (radius, color) = glow(step as f64 * 0.037);
            assert!((60..=100).contains(&radius));
            assert!((40..=200).contains(&color.a));
        }
    }

    #[test]
    fn test_background_stops_stay_dark() {
        for step in 0..100 {
            let (top, bottom) = background_stops(step as f64 * 3.1);
            assert!(top.r <= 50 && top.b <= 70);
            assert!(bottom.r <= 30 && bottom.b <= 50);
        }
    }
}
