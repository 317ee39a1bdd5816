//! Screen-Space GUI Widgets
//!
//! UI elements drawn on top of the game scene at fixed screen positions.
//!
//! # Architecture
//!
//! - Widgets use screen coordinates (pixels from the window's top-left)
//! - Animations are exponential easing driven by `update(dt)`
//! - Rendering is procedural, through [`crate::surface::DrawSurface`]
//! - Widgets never mutate game state; they hand back an action value that the
//!   frame loop executes
//!
//! # Available Components
//!
//! - [`Button`] - Hover-animated push button returning an action (styled by
//!   [`button::ButtonStyle`])
//! - [`Shop`] - Sliding panel of purchase buttons
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::gui::{Shop, ShopAction};
//!
//! let mut shop = Shop::new(800, 600, &config.widgets, &economy);
//!
//! // Input
//! if let Some(ShopAction::BuyGenerator(index)) = shop.handle_event(&event) {
//!     economy.purchase_generator(index);
//!     shop.rebuild(&economy);
//! }
//!
//! // Animate, then draw
//! shop.update(dt, &economy);
//! shop.draw(&mut surface)?;
//! ```

pub mod button;
pub mod shop;

pub use button::Button;
pub use shop::{Shop, ShopAction};
