// Game context struct
//
// Every piece of mutable game state lives in one owned `Game` value. The frame
// loop passes it explicitly through the event, update, and render phases, which
// are implemented in sibling modules (events.rs, update.rs, rendering.rs).

use crate::buff::BuffTimer;
use crate::config::GameConfig;
use crate::economy::Economy;
use crate::falling::EntityPools;
use crate::gui::{Button, Shop, ShopAction};
use crate::input::InputEvent;
use crate::surface::DrawSurface;
use rand::rngs::StdRng;
use sdl2::rect::{Point, Rect};
use tracing::{debug, info};

/// Shop toggle button geometry, anchored to the top-right corner
const SHOP_BUTTON_SIZE: (u32, u32) = (80, 40);
const SHOP_BUTTON_MARGIN: (i32, i32) = (90, 20);
/// The main pickle sits this far above the window centre
const MAIN_SPRITE_LIFT: i32 = 30;

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// All state for one running game
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) economy: Economy,
    pub(super) buff: BuffTimer,
    pub(super) pools: EntityPools,
    pub(super) rng: StdRng,
    pub(super) shop: Shop,
    pub(super) shop_button: Button<ShopAction>,
    /// Hit area of the main pickle at rest
    pub(super) main_rect: Rect,
    /// One-shot press pulse, 1.0 right after a click, decays to 0
    pub(super) press: f32,
    pub(super) won: bool,
    /// Game time of the win edge, drives the fading banner
    pub(super) won_at: Option<f64>,
    /// Game time of the last update, read by the render pass
    pub(super) now: f64,
}

impl Game {
    /// Builds a fresh game at time 0
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let (width, height) = (config.window.width, config.window.height);
        let economy = Economy::new(&config.economy);
        let buff = BuffTimer::new(&config.buff);
        let pools = EntityPools::new(&config.spawning, width, height, 0.0, &mut rng);
        let shop = Shop::new(width, height, &config.widgets, &economy);
        let shop_button = Button::new(
            "Shop",
            Rect::new(
                width as i32 - SHOP_BUTTON_MARGIN.0,
                SHOP_BUTTON_MARGIN.1,
                SHOP_BUTTON_SIZE.0,
                SHOP_BUTTON_SIZE.1,
            ),
            ShopAction::Toggle,
            config.widgets.hover_rate,
        );
        let sprite = config.widgets.main_sprite_size;
        let main_rect = Rect::from_center(
            Point::new(width as i32 / 2, height as i32 / 2 - MAIN_SPRITE_LIFT),
            sprite,
            sprite,
        );

        info!(
            width,
            height,
            generators = economy.generators().len(),
            first_golden_at = pools.next_golden_at(),
            "game initialized"
        );

        Game {
            config,
            economy,
            buff,
            pools,
            rng,
            shop,
            shop_button,
            main_rect,
            press: 0.0,
            won: false,
            won_at: None,
            now: 0.0,
        }
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Runs one full frame: drain input, advance state, draw
    ///
    /// `now` is game time in seconds and `dt` the (already clamped) time since
    /// the previous frame. A quit event ends the frame immediately without
    /// drawing.
    pub fn frame<S, I>(&mut self, now: f64, dt: f32, events: I, surface: &mut S) -> Result<FrameOutcome, String>
    where
        S: DrawSurface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if event == InputEvent::Quit {
                info!(balance = self.economy.balance(), "quit requested");
                return Ok(FrameOutcome::Quit);
            }
            self.handle_event(&event, now);
        }

        let report = self.update(now, dt);
        if report.is_notable() {
            debug!(
                accrued = report.accrued,
                won = report.won,
                buff_expired = report.buff_expired,
                golden_spawned = report.pools.golden_spawned,
                golden_missed = report.pools.golden_missed,
                "frame update"
            );
        }
        self.render(surface)?;
        Ok(FrameOutcome::Continue)
    }
}
