// Input handling
//
// Events go to the UI first. A press that fires a widget, or lands anywhere on
// the open shop panel, is consumed there and never reaches the world. Only
// unconsumed primary presses are tested against the main pickle and the
// golden pickles.

use super::state::Game;
use crate::gui::ShopAction;
use crate::input::InputEvent;
use sdl2::rect::Point;
use tracing::debug;

impl Game {
    /// Dispatches one input event at game time `now`
    pub fn handle_event(&mut self, event: &InputEvent, now: f64) {
        // Both widgets see every event so their hover state stays current
        let toggled = self.shop_button.handle_event(event);
        let bought = self.shop.handle_event(event);

        let mut consumed = false;
        for action in [toggled, bought].into_iter().flatten() {
            self.apply_shop_action(action);
            consumed = true;
        }
        if consumed {
            return;
        }

        if let Some(position) = event.primary_press() {
            if !self.ui_covers(position) {
                self.click_world(position, now);
            }
        }
    }

    fn ui_covers(&self, position: Point) -> bool {
        self.shop.covers(position) || self.shop_button.rect().contains_point(position)
    }

    /// Executes a widget command against the economy
    pub fn apply_shop_action(&mut self, action: ShopAction) {
        match action {
            ShopAction::Toggle => {
                self.shop.toggle(&self.economy);
                debug!(open = self.shop.is_open(), "shop toggled");
            }
            ShopAction::BuyClick => {
                if self.economy.purchase_click_upgrade().succeeded() {
                    self.shop.rebuild(&self.economy);
                }
            }
            ShopAction::BuyGenerator(index) => {
                if self.economy.purchase_generator(index).succeeded() {
                    self.shop.rebuild(&self.economy);
                }
            }
        }
    }

    fn click_world(&mut self, position: Point, now: f64) {
        if self.main_rect.contains_point(position) {
            let gained = self.economy.click(self.buff.click_multiplier());
            self.press = 1.0;
            debug!(gained, balance = self.economy.balance(), "pickle clicked");
        }

        let claimed = self.pools.claim_golden_at(position);
        if claimed > 0 {
            debug!(
                claimed,
                x = position.x(),
                y = position.y(),
                buff_left = self.buff.remaining(now),
                "golden pickle claimed"
            );
            self.buff.activate(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::{click, game};
    use crate::buff::BuffState;
    use crate::falling::{FallingEntity, FallingKind};
    use crate::input::{InputEvent, PointerButton};
    use sdl2::rect::Point;

    fn golden_at(x: f32, y: f32) -> FallingEntity {
        FallingEntity::new(FallingKind::Golden, x, y, 0.0, 0.0, 0.0, 40)
    }

    fn send(game: &mut super::Game, events: Vec<InputEvent>, now: f64) {
        for event in &events {
            game.handle_event(event, now);
        }
    }

    #[test]
    fn test_main_pickle_click_awards_and_pulses() {
        let mut game = game();
        send(&mut game, click(400, 270), 1.0);

        assert_eq!(game.economy().balance(), 1.0);
        assert_eq!(game.press, 1.0);
    }

    #[test]
    fn test_click_off_target_is_noop() {
        let mut game = game();
        send(&mut game, click(50, 500), 1.0);

        assert_eq!(game.economy().balance(), 0.0);
        assert_eq!(game.press, 0.0);
    }

    #[test]
    fn test_boosted_click_uses_multiplier() {
        let mut game = game();
        game.buff.activate(0.0);
        send(&mut game, click(400, 270), 1.0);

        assert_eq!(game.economy().balance(), 4.0);
    }

    #[test]
    fn test_right_click_ignored() {
        let mut game = game();
        game.handle_event(
            &InputEvent::PointerDown {
                button: PointerButton::Right,
                position: Point::new(400, 270),
            },
            1.0,
        );
        assert_eq!(game.economy().balance(), 0.0);
    }

    #[test]
    fn test_golden_click_starts_buff() {
        let mut game = game();
        game.pools.push(golden_at(100.0, 100.0));

        send(&mut game, click(105, 95), 10.0);

        assert!(game.pools.golden().is_empty());
        assert_eq!(game.buff.state(), BuffState::Boosted { expires_at: 25.0 });
    }

    #[test]
    fn test_golden_reclick_resets_without_stacking() {
        let mut game = game();
        game.pools.push(golden_at(100.0, 100.0));
        game.pools.push(golden_at(300.0, 100.0));

        send(&mut game, click(100, 100), 10.0);
        send(&mut game, click(300, 100), 20.0);

        assert_eq!(game.buff.state(), BuffState::Boosted { expires_at: 35.0 });
        assert_eq!(game.buff.click_multiplier(), 4.0);
        assert_eq!(game.buff.production_multiplier(), 2.0);
    }

    #[test]
    fn test_shop_button_toggles_shop() {
        let mut game = game();
        send(&mut game, click(750, 40), 1.0);
        assert!(game.shop.is_open());

        send(&mut game, click(750, 40), 2.0);
        assert!(!game.shop.is_open());
    }

    #[test]
    fn test_shop_click_not_passed_to_world() {
        let mut game = game();
        game.economy.earn(100.0);
        send(&mut game, click(750, 40), 0.0);
        for _ in 0..120 {
            game.update(0.0, 1.0 / 60.0);
        }
        // Golden pickle hidden under the Jar button
        game.pools.push(golden_at(600.0, 210.0));

        send(&mut game, click(600, 210), 1.0);

        assert_eq!(game.economy().generators()[0].count(), 1);
        assert_eq!(game.economy().balance(), 0.0);
        assert_eq!(game.pools.golden().len(), 1);
        assert!(!game.buff.is_boosted());
    }

    #[test]
    fn test_purchase_rebuilds_labels() {
        let mut game = game();
        game.economy.earn(50.0);
        game.apply_shop_action(crate::gui::ShopAction::BuyClick);

        assert_eq!(game.economy().click_power(), 2);
        assert_eq!(game.shop.buttons()[0].label(), "Click +1\nCost: 57");
    }

    #[test]
    fn test_unaffordable_purchase_is_noop() {
        let mut game = game();
        game.apply_shop_action(crate::gui::ShopAction::BuyGenerator(3));

        assert_eq!(game.economy().generators()[3].count(), 0);
        assert_eq!(game.economy().balance(), 0.0);
    }
}
