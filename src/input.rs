use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Point;

/// Pointer buttons the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

/// Input events the game consumes
///
/// This decouples the frame loop from SDL2: the loop drains SDL events into
/// `InputEvent`s, and everything downstream (widgets, world clicks) only sees
/// these three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerMove(Point),
    PointerDown { button: PointerButton, position: Point },
}

impl InputEvent {
    /// Translates an SDL event, or `None` for events the game ignores
    ///
    /// Both the window close button and Escape request a quit.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => Some(InputEvent::Quit),
            Event::MouseMotion { x, y, .. } => Some(InputEvent::PointerMove(Point::new(x, y))),
            Event::MouseButtonDown { mouse_btn, x, y, .. } => Some(InputEvent::PointerDown {
                button: mouse_btn.into(),
                position: Point::new(x, y),
            }),
            _ => None,
        }
    }

    /// Position of a primary (left) button press, if this is one
    pub fn primary_press(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } => Some(position),
            _ => None,
        }
    }
}
