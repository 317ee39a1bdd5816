//! Sliding shop panel
//!
//! The shop is a dark panel on the right edge of the screen holding one button
//! for the click upgrade and one per generator. Opening and closing slides the
//! panel in and out with the same exponential easing the buttons use for hover.
//!
//! Button labels show live costs, so they are regenerated from the economy
//! after every successful purchase and whenever the panel is toggled. While
//! closed the panel ignores input entirely, so off-screen buttons can never be
//! pressed.

use super::button::Button;
use crate::config::WidgetConfig;
use crate::economy::{Economy, format_amount};
use crate::input::InputEvent;
use crate::surface::DrawSurface;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Commands produced by shop widgets, executed by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    /// Open or close the shop panel
    Toggle,
    BuyClick,
    /// Buy one unit of the generator at this roster index
    BuyGenerator(usize),
}

const BUTTON_INSET: i32 = 50;
const BUTTON_SIZE: (u32, u32) = (200, 60);
const CLICK_BUTTON_Y: i32 = 100;
const FIRST_GENERATOR_Y: i32 = 180;
const GENERATOR_SPACING: i32 = 80;
const PANEL_COLOR: Color = Color::RGBA(30, 30, 30, 230);
const EDGE_COLOR: Color = Color::RGBA(100, 200, 100, 160);

fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format_amount(rate)
    } else {
        format!("{:.1}", rate)
    }
}

fn click_label(economy: &Economy) -> String {
    format!("Click +1\nCost: {}", format_amount(economy.click_cost()))
}

fn generator_label(economy: &Economy, index: usize) -> String {
    let generator = &economy.generators()[index];
    format!(
        "{} x{} +{} PPS\nCost: {}",
        generator.name,
        generator.count(),
        format_rate(generator.production),
        format_amount(generator.cost())
    )
}

pub struct Shop {
    open: bool,
    x: f32,
    width: u32,
    screen_width: u32,
    screen_height: u32,
    slide_rate: f32,
    buttons: Vec<Button<ShopAction>>,
}

impl Shop {
    /// Creates a closed shop parked just off the right edge of the screen
    pub fn new(screen_width: u32, screen_height: u32, config: &WidgetConfig, economy: &Economy) -> Self {
        let x = screen_width as f32;
        let button_x = x as i32 + BUTTON_INSET;
        let button = |label: String, y: i32, action: ShopAction| {
            Button::new(
                label,
                Rect::new(button_x, y, BUTTON_SIZE.0, BUTTON_SIZE.1),
                action,
                config.hover_rate,
            )
        };

        let mut buttons = Vec::with_capacity(economy.generators().len() + 1);
        buttons.push(button(click_label(economy), CLICK_BUTTON_Y, ShopAction::BuyClick));
        for index in 0..economy.generators().len() {
            let y = FIRST_GENERATOR_Y + index as i32 * GENERATOR_SPACING;
            buttons.push(button(generator_label(economy, index), y, ShopAction::BuyGenerator(index)));
        }

        let mut shop = Shop {
            open: false,
            x,
            width: config.shop_width,
            screen_width,
            screen_height,
            slide_rate: config.shop_slide_rate,
            buttons,
        };
        shop.refresh_affordability(economy);
        shop
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub(crate) fn buttons(&self) -> &[Button<ShopAction>] {
        &self.buttons
    }

    pub fn toggle(&mut self, economy: &Economy) {
        self.open = !self.open;
        self.rebuild(economy);
    }

    /// Regenerates every label from current economy values
    pub fn rebuild(&mut self, economy: &Economy) {
        for button in &mut self.buttons {
            let label = match button.action() {
                ShopAction::BuyClick => click_label(economy),
                ShopAction::BuyGenerator(index) => generator_label(economy, index),
                ShopAction::Toggle => continue,
            };
            button.set_label(label);
        }
        self.refresh_affordability(economy);
    }

    fn refresh_affordability(&mut self, economy: &Economy) {
        for button in &mut self.buttons {
            let affordable = match button.action() {
                ShopAction::BuyClick => economy.can_afford(economy.click_cost()),
                ShopAction::BuyGenerator(index) => economy.can_afford_generator(index),
                ShopAction::Toggle => true,
            };
            button.set_enabled(affordable);
        }
    }

    /// Whether `point` lies on the panel as currently drawn
    pub fn covers(&self, point: Point) -> bool {
        self.panel_rect().contains_point(point)
    }

    fn panel_rect(&self) -> Rect {
        Rect::new(self.x.round() as i32, 0, self.width, self.screen_height)
    }

    /// Forwards the event to every button while open; returns the first action
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ShopAction> {
        if !self.open {
            return None;
        }
        self.buttons
            .iter_mut()
            .fold(None, |fired, button| fired.or(button.handle_event(event)))
    }

    /// Slides the panel, moves the buttons with it, and eases their hover
    pub fn update(&mut self, dt: f32, economy: &Economy) {
        let target = if self.open {
            self.screen_width as f32 - self.width as f32
        } else {
            self.screen_width as f32
        };
        let step = (dt * self.slide_rate).min(1.0);
        self.x += (target - self.x) * step;

        let button_x = self.x.round() as i32 + BUTTON_INSET;
        for button in &mut self.buttons {
            button.set_x(button_x);
            button.update(dt);
        }
        self.refresh_affordability(economy);
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        let panel = self.panel_rect();
        if panel.left() >= self.screen_width as i32 {
            return Ok(());
        }
        surface.fill_rect(panel, PANEL_COLOR)?;
        surface.draw_line(
            Point::new(panel.left(), 0),
            Point::new(panel.left(), self.screen_height as i32),
            EDGE_COLOR,
        )?;

        if self.open {
            for button in &self.buttons {
                button.draw(surface)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EconomyConfig;
    use crate::input::PointerButton;
    use crate::surface::testing::{DrawCall, RecordingSurface};

    fn setup() -> (Shop, Economy) {
        let economy = Economy::new(&EconomyConfig::default());
        let shop = Shop::new(800, 600, &WidgetConfig::default(), &economy);
        (shop, economy)
    }

    fn settle(shop: &mut Shop, economy: &Economy) {
        for _ in 0..120 {
            shop.update(1.0 / 60.0, economy);
        }
    }

    fn click_at(shop: &mut Shop, point: Point) -> Option<ShopAction> {
        shop.handle_event(&InputEvent::PointerMove(point));
        shop.handle_event(&InputEvent::PointerDown {
            button: PointerButton::Left,
            position: point,
        })
    }

    #[test]
    fn test_one_button_per_purchasable() {
        let (shop, _) = setup();
        let actions: Vec<ShopAction> = shop.buttons().iter().map(|b| b.action()).collect();
        assert_eq!(
            actions,
            vec![
                ShopAction::BuyClick,
                ShopAction::BuyGenerator(0),
                ShopAction::BuyGenerator(1),
                ShopAction::BuyGenerator(2),
                ShopAction::BuyGenerator(3),
            ]
        );
    }

    #[test]
    fn test_labels_show_costs() {
        let (shop, _) = setup();
        assert_eq!(shop.buttons()[0].label(), "Click +1\nCost: 50");
        assert_eq!(shop.buttons()[1].label(), "Jar x0 +1 PPS\nCost: 100");
        assert_eq!(shop.buttons()[4].label(), "Plant x0 +1,000 PPS\nCost: 100,000");
    }

    #[test]
    fn test_rebuild_after_purchase() {
        let (mut shop, mut economy) = setup();
        economy.earn(100.0);
        economy.purchase_generator(0);
        shop.rebuild(&economy);

        assert_eq!(shop.buttons()[1].label(), "Jar x1 +1 PPS\nCost: 115");
    }

    #[test]
    fn test_closed_shop_ignores_input() {
        let (mut shop, economy) = setup();
        settle(&mut shop, &economy);
        assert_eq!(shop.x, 800.0);
        assert_eq!(click_at(&mut shop, Point::new(860, 120)), None);
    }

    #[test]
    fn test_slides_open_and_buttons_follow() {
        let (mut shop, economy) = setup();
        shop.toggle(&economy);

        shop.update(1.0 / 60.0, &economy);
        assert!(shop.x < 800.0 && shop.x > 500.0);

        settle(&mut shop, &economy);
        assert!((shop.x - 500.0).abs() < 0.5);
        assert_eq!(shop.buttons()[0].rect().x(), 550);
        assert_eq!(click_at(&mut shop, Point::new(560, 120)), Some(ShopAction::BuyClick));
        assert_eq!(click_at(&mut shop, Point::new(560, 270)), Some(ShopAction::BuyGenerator(1)));
    }

    #[test]
    fn test_closing_panel_drops_stale_hover() {
        let (mut shop, economy) = setup();
        shop.toggle(&economy);
        settle(&mut shop, &economy);
        shop.handle_event(&InputEvent::PointerMove(Point::new(560, 120)));

        // Slide shut, then reopen for input without another pointer move
        shop.toggle(&economy);
        settle(&mut shop, &economy);
        shop.open = true;

        let press = InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(560, 120),
        };
        assert_eq!(shop.handle_event(&press), None);
    }

    #[test]
    fn test_affordability_tracks_balance() {
        let (mut shop, mut economy) = setup();
        assert!(!shop.buttons()[0].is_enabled());

        economy.earn(50.0);
        shop.update(0.0, &economy);
        assert!(shop.buttons()[0].is_enabled());
        assert!(!shop.buttons()[1].is_enabled());
    }

    #[test]
    fn test_closed_draws_panel_only() {
        let (mut shop, economy) = setup();
        shop.toggle(&economy);
        shop.update(1.0 / 60.0, &economy);
        shop.toggle(&economy);

        let mut surface = RecordingSurface::new(800, 600);
        shop.draw(&mut surface).unwrap();

        assert!(matches!(surface.calls[0], DrawCall::Rect(_, color) if color == PANEL_COLOR));
        assert!(!surface.calls.iter().any(|c| matches!(c, DrawCall::RoundedRect(..))));
    }

    #[test]
    fn test_open_draws_buttons() {
        let (mut shop, economy) = setup();
        shop.toggle(&economy);
        settle(&mut shop, &economy);

        let mut surface = RecordingSurface::new(800, 600);
        shop.draw(&mut surface).unwrap();

        let buttons = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::RoundedRect(..)))
            .count();
        assert_eq!(buttons, 5);
    }
}
