// Per-frame simulation
//
// Phases run in a fixed order after input has been drained:
// accrual, buff expiry, entity pools, win check, widget animation.

use super::state::Game;
use crate::economy::format_amount;
use crate::falling::PoolReport;
use tracing::{debug, info};

/// What happened during one update; `Game::frame` logs the notable ones
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpdateReport {
    /// Pickles produced by generators this frame
    pub accrued: f64,
    pub buff_expired: bool,
    /// True only on the frame the win threshold is first reached
    pub won: bool,
    pub pools: PoolReport,
}

impl UpdateReport {
    /// Whether the frame changed anything beyond steady accrual
    pub fn is_notable(&self) -> bool {
        self.won
            || self.buff_expired
            || self.pools.golden_spawned > 0
            || self.pools.golden_missed > 0
    }
}

impl Game {
    /// Advances the simulation to game time `now` by `dt` seconds
    pub fn update(&mut self, now: f64, dt: f32) -> UpdateReport {
        self.now = now;
        let rate = self.economy.total_production_rate();

        let accrued = rate * self.buff.production_multiplier() * dt as f64;
        self.economy.earn(accrued);

        let buff_expired = self.buff.update(now);

        let pools = self.pools.update(now, dt, rate, &mut self.rng);
        if pools.golden_spawned > 0 || pools.golden_missed > 0 {
            debug!(
                live = self.pools.golden().len(),
                next_at = self.pools.next_golden_at(),
                "golden pool changed"
            );
        }

        let won = self.check_win(now);

        self.shop_button.update(dt);
        self.shop.update(dt, &self.economy);
        let step = (dt * self.config.widgets.press_decay_rate).min(1.0);
        self.press += (0.0 - self.press) * step;

        UpdateReport {
            accrued,
            buff_expired,
            won,
            pools,
        }
    }

    /// Sets the win flag the first time the balance reaches the threshold
    fn check_win(&mut self, now: f64) -> bool {
        let threshold = self.config.economy.win_threshold;
        if self.won || self.economy.balance() < threshold {
            return false;
        }
        self.won = true;
        self.won_at = Some(now);
        info!(threshold = %format_amount(threshold), at = now, "you've amassed the winning pile of pickles");
        true
    }
}
