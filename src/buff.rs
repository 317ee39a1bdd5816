//! Golden pickle buff timer
//!
//! Two states: **Normal** (both multipliers 1.0) and **Boosted** (click and
//! production multipliers raised until an expiry time). Only a golden pickle
//! click enters Boosted; another click while Boosted pushes the expiry out to
//! `now + duration` without stacking the multipliers.
//!
//! Multipliers are stored as a single `Option<f64>` expiry so they can never be
//! partially elevated.

use crate::config::BuffConfig;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuffState {
    Normal,
    Boosted { expires_at: f64 },
}

/// What a golden click did to the timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuffActivation {
    Started,
    Extended,
}

#[derive(Debug, Clone)]
pub struct BuffTimer {
    state: BuffState,
    click_boost: f64,
    production_boost: f64,
    duration: f64,
}

impl BuffTimer {
    pub fn new(config: &BuffConfig) -> Self {
        BuffTimer {
            state: BuffState::Normal,
            click_boost: config.click_multiplier,
            production_boost: config.production_multiplier,
            duration: config.duration_secs,
        }
    }

    pub fn state(&self) -> BuffState {
        self.state
    }

    pub fn is_boosted(&self) -> bool {
        matches!(self.state(), BuffState::Boosted { .. })
    }

    pub fn click_multiplier(&self) -> f64 {
        if self.is_boosted() { self.click_boost } else { 1.0 }
    }

    pub fn production_multiplier(&self) -> f64 {
        if self.is_boosted() {
            self.production_boost
        } else {
            1.0
        }
    }

    /// Seconds of boost left at `now`, zero when Normal
    pub fn remaining(&self, now: f64) -> f64 {
        match self.state {
            BuffState::Normal => 0.0,
            BuffState::Boosted { expires_at } => (expires_at - now).max(0.0),
        }
    }

    /// Enters (or refreshes) the Boosted window ending at `now + duration`
    pub fn activate(&mut self, now: f64) -> BuffActivation {
        let activation = if self.is_boosted() {
            BuffActivation::Extended
        } else {
            BuffActivation::Started
        };
        let expires_at = now + self.duration;
        self.state = BuffState::Boosted { expires_at };
        info!(?activation, expires_at, "golden buff active");
        activation
    }

    /// Drops back to Normal on the first call where `now >= expiry`.
    /// Returns true on that transition.
    pub fn update(&mut self, now: f64) -> bool {
        if let BuffState::Boosted { expires_at } = self.state {
            if now >= expires_at {
                self.state = BuffState::Normal;
                info!("golden buff expired");
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn timer() -> BuffTimer {
        BuffTimer::new(&BuffConfig::default())
    }

    #[test]
    fn test_starts_normal() {
        let timer = timer();
        assert_eq!(timer.state(), BuffState::Normal);
        assert_eq!(timer.click_multiplier(), 1.0);
        assert_eq!(timer.production_multiplier(), 1.0);
    }

    #[test]
    fn test_activate_boosts_both() {
        let mut timer = timer();
        assert_eq!(timer.activate(10.0), BuffActivation::Started);
        assert_eq!(timer.click_multiplier(), 4.0);
        assert_eq!(timer.production_multiplier(), 2.0);
        assert_eq!(timer.state(), BuffState::Boosted { expires_at: 25.0 });
    }

    #[test]
    fn test_reactivation_resets_expiry_without_stacking() {
        let mut timer = timer();
        timer.activate(10.0);
        assert_eq!(timer.activate(20.0), BuffActivation::Extended);

        assert_eq!(timer.state(), BuffState::Boosted { expires_at: 35.0 });
        assert_eq!(timer.click_multiplier(), 4.0);
        assert_eq!(timer.production_multiplier(), 2.0);
    }

    #[test]
    fn test_expires_at_deadline() {
        let mut timer = timer();
        timer.activate(0.0);

        assert!(!timer.update(14.99));
        assert!(timer.is_boosted());
        assert!(timer.update(15.0));
        assert_eq!(timer.click_multiplier(), 1.0);
        assert_eq!(timer.production_multiplier(), 1.0);
        assert!(!timer.update(16.0));
    }

    #[test]
    fn test_remaining() {
        let mut timer = timer();
        assert_eq!(timer.remaining(3.0), 0.0);
        timer.activate(0.0);
        assert_eq!(timer.remaining(5.0), 10.0);
        assert_eq!(timer.remaining(20.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_boost_iff_before_expiry(start in 0.0f64..1_000.0, offset in 0.0f64..40.0) {
            let mut timer = timer();
            timer.activate(start);
            let t = start + offset;
            timer.update(t);

            let elevated = timer.click_multiplier() == 4.0;
            prop_assert_eq!(elevated, t < start + 15.0);
            // never partially elevated
            prop_assert_eq!(elevated, timer.production_multiplier() == 2.0);
        }
    }
}
