//! Animated push button
//!
//! A button owns a label, a hit rectangle, and a hover intensity in `[0, 1]`
//! that eases toward 1 while the pointer is over it and back to 0 when it
//! leaves. The intensity drives both the size (up to 5% larger) and the
//! background colour.
//!
//! Buttons do not run callbacks. `handle_event` returns the button's action
//! value and the frame loop decides what to do with it.

use crate::input::InputEvent;
use crate::surface::{DrawSurface, lerp_color};
use crate::text::{GLYPH_HEIGHT, WHITE, draw_text, measure_text};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Visual configuration for a button
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub base_color: Color,
    pub hover_color: Color,
    /// Used instead of `base_color` while the button is disabled
    pub disabled_color: Color,
    pub disabled_hover_color: Color,
    pub text_color: Color,
    pub corner_radius: u32,
    pub text_scale: u32,
    /// Extra scale at full hover intensity (0.05 = 5% larger)
    pub hover_grow: f32,
    /// Distance from the top edge to the first text line
    pub padding_top: i32,
    pub line_spacing: i32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            base_color: Color::RGB(100, 200, 100),
            hover_color: Color::RGB(120, 220, 120),
            disabled_color: Color::RGB(90, 110, 90),
            disabled_hover_color: Color::RGB(105, 125, 105),
            text_color: WHITE,
            corner_radius: 8,
            text_scale: 2,
            hover_grow: 0.05,
            padding_top: 10,
            line_spacing: 2,
        }
    }
}

/// Push button that reports `action` when pressed
pub struct Button<A> {
    label: String,
    rect: Rect,
    action: A,
    hovered: bool,
    hover: f32,
    enabled: bool,
    hover_rate: f32,
    style: ButtonStyle,
}

impl<A: Copy> Button<A> {
    pub fn new(label: impl Into<String>, rect: Rect, action: A, hover_rate: f32) -> Self {
        Button {
            label: label.into(),
            rect,
            action,
            hovered: false,
            hover: 0.0,
            enabled: true,
            hover_rate,
            style: ButtonStyle::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn action(&self) -> A {
        self.action
    }

    /// Disabled buttons still fire; they only render dimmed
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_x(&mut self, x: i32) {
        self.rect.set_x(x);
    }

    /// Updates hover from pointer motion and returns the action on a primary
    /// press while hovered. Each press event fires at most once.
    ///
    /// The press position is checked against the current rect as well, since
    /// the button may have moved under a still pointer since the last motion.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<A> {
        if let InputEvent::PointerMove(position) = event {
            self.hovered = self.rect.contains_point(*position);
            return None;
        }
        let position = event.primary_press()?;
        self.hovered = self.hovered && self.rect.contains_point(position);
        self.hovered.then_some(self.action)
    }

    /// Eases the hover intensity toward its target
    pub fn update(&mut self, dt: f32) {
        let target = if self.hovered { 1.0 } else { 0.0 };
        let step = (dt * self.hover_rate).min(1.0);
        self.hover += (target - self.hover) * step;
    }

    /// Screen rectangle at the current hover scale, centred on the hit rect
    pub fn draw_rect(&self) -> Rect {
        let scale = 1.0 + self.style.hover_grow * self.hover;
        let width = (self.rect.width() as f32 * scale).round() as u32;
        let height = (self.rect.height() as f32 * scale).round() as u32;
        Rect::from_center(self.rect.center(), width, height)
    }

    pub fn fill_color(&self) -> Color {
        let (base, hover) = if self.enabled {
            (self.style.base_color, self.style.hover_color)
        } else {
            (self.style.disabled_color, self.style.disabled_hover_color)
        };
        lerp_color(base, hover, self.hover)
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        let rect = self.draw_rect();
        surface.fill_rounded_rect(rect, self.style.corner_radius, self.fill_color())?;

        let scale = self.style.text_scale;
        let line_height = (GLYPH_HEIGHT * scale) as i32 + self.style.line_spacing;
        for (index, line) in self.label.split('\n').enumerate() {
            let (text_width, _) = measure_text(line, scale);
            let origin = Point::new(
                rect.x() + (rect.width() as i32 - text_width as i32) / 2,
                rect.y() + self.style.padding_top + index as i32 * line_height,
            );
            draw_text(surface, line, origin.x(), origin.y(), self.style.text_color, scale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;
    use crate::surface::testing::{DrawCall, RecordingSurface};

    fn button() -> Button<u8> {
        Button::new("Shop", Rect::new(710, 20, 80, 40), 7, 10.0)
    }

    fn press(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_requires_hover() {
        let mut button = button();
        assert_eq!(button.handle_event(&press(720, 30)), None);

        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));
        assert!(button.hovered);
        assert_eq!(button.handle_event(&press(720, 30)), Some(7));
    }

    #[test]
    fn test_single_press_fires_once() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));

        let events = [press(720, 30), InputEvent::PointerMove(Point::new(721, 30))];
        let fired: Vec<u8> = events.iter().filter_map(|e| button.handle_event(e)).collect();
        assert_eq!(fired, vec![7]);
    }

    #[test]
    fn test_press_after_button_moved_away_is_ignored() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));
        button.set_x(900);

        assert_eq!(button.handle_event(&press(720, 30)), None);
        assert!(!button.hovered);
    }

    #[test]
    fn test_right_click_ignored() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));
        let right = InputEvent::PointerDown {
            button: PointerButton::Right,
            position: Point::new(720, 30),
        };
        assert_eq!(button.handle_event(&right), None);
    }

    #[test]
    fn test_hover_eases_toward_target() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));

        button.update(0.05);
        assert!((button.hover - 0.5).abs() < 1e-6);
        button.update(0.05);
        assert!((button.hover - 0.75).abs() < 1e-6);

        button.handle_event(&InputEvent::PointerMove(Point::new(0, 0)));
        button.update(0.05);
        assert!((button.hover - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_large_dt_does_not_overshoot() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));
        button.update(1.0);
        assert_eq!(button.hover, 1.0);
    }

    #[test]
    fn test_draw_rect_grows_with_hover() {
        let mut button = button();
        assert_eq!(button.draw_rect(), button.rect());

        button.handle_event(&InputEvent::PointerMove(Point::new(720, 30)));
        button.update(1.0);
        let grown = button.draw_rect();
        assert_eq!((grown.width(), grown.height()), (84, 42));
        assert_eq!(grown.center(), button.rect().center());
        assert_eq!(button.fill_color(), Color::RGB(120, 220, 120));
    }

    #[test]
    fn test_disabled_renders_dimmed() {
        let mut button = button();
        button.set_enabled(false);
        assert_eq!(button.fill_color(), ButtonStyle::default().disabled_color);
    }

    #[test]
    fn test_draw_background_then_text() {
        let button = Button::new("A\nB", Rect::new(0, 0, 200, 60), 0u8, 10.0);
        let mut surface = RecordingSurface::new(800, 600);
        button.draw(&mut surface).unwrap();

        assert!(matches!(surface.calls[0], DrawCall::RoundedRect(rect, _) if rect == Rect::new(0, 0, 200, 60)));
        // second line starts 7 * 2 + 2 = 16 px below the first
        let second_line_top = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(rect, _) => Some(rect.y()),
                _ => None,
            })
            .max()
            .unwrap();
        assert_eq!(second_line_top, 10 + 16 + 6 * 2);
    }
}
