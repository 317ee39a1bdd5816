//! Pickle economy: balance, click power, and generators
//!
//! The economy is a plain data model with no knowledge of rendering or time.
//! Every cost follows a geometric curve:
//!
//! ```text
//! cost(level) = base_cost * growth^level
//! ```
//!
//! Purchases are total functions. Calling one while the balance is too low
//! leaves everything untouched and reports `PurchaseOutcome::Unaffordable`,
//! so the UI can fire them unconditionally.

use crate::config::{EconomyConfig, GeneratorSpec};
use tracing::debug;

/// Result of a purchase attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseOutcome {
    Bought { cost: f64 },
    Unaffordable { cost: f64 },
}

impl PurchaseOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, PurchaseOutcome::Bought { .. })
    }
}

/// An owned, purchasable producer of pickles
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub name: String,
    pub base_cost: f64,
    pub growth: f64,
    /// Pickles per second per owned unit
    pub production: f64,
    count: u32,
    cost: f64,
}

impl Generator {
    pub fn new(spec: &GeneratorSpec) -> Self {
        Generator {
            name: spec.name.clone(),
            base_cost: spec.base_cost,
            growth: spec.growth,
            production: spec.production,
            count: 0,
            cost: spec.base_cost,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Price of the next unit
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Pickles per second from every owned unit of this generator
    pub fn output(&self) -> f64 {
        self.production * self.count as f64
    }

    fn add_unit(&mut self) {
        self.count += 1;
        self.cost = self.base_cost * self.growth.powi(self.count as i32);
    }
}

/// Currency balance, click upgrade level, and the generator roster
#[derive(Debug, Clone)]
pub struct Economy {
    balance: f64,
    click_power: u64,
    click_level: u32,
    click_base_cost: f64,
    click_growth: f64,
    generators: Vec<Generator>,
}

impl Economy {
    pub fn new(config: &EconomyConfig) -> Self {
        Economy {
            balance: 0.0,
            click_power: config.base_click_power,
            click_level: 0,
            click_base_cost: config.click_base_cost,
            click_growth: config.click_growth,
            generators: config.generators.iter().map(Generator::new).collect(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Pickles per click before any buff multiplier (PPC)
    pub fn click_power(&self) -> u64 {
        self.click_power
    }

    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    /// Cost of the next click upgrade; depends on the click level only
    pub fn click_cost(&self) -> f64 {
        self.click_cost_at(self.click_level)
    }

    pub fn click_cost_at(&self, level: u32) -> f64 {
        self.click_base_cost * self.click_growth.powi(level as i32)
    }

    /// Sum of every generator's output (PPS), before buff multipliers
    pub fn total_production_rate(&self) -> f64 {
        self.generators.iter().map(Generator::output).sum()
    }

    /// Adds currency. Negative or non-finite amounts are ignored so the
    /// balance can never go below zero.
    pub fn earn(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.balance += amount;
        }
    }

    /// Awards one click worth of pickles scaled by `multiplier`
    pub fn click(&mut self, multiplier: f64) -> f64 {
        let gained = self.click_power as f64 * multiplier;
        self.earn(gained);
        gained
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.balance >= cost
    }

    pub fn can_afford_generator(&self, index: usize) -> bool {
        self.generators
            .get(index)
            .is_some_and(|generator| self.can_afford(generator.cost()))
    }

    /// Buys one click upgrade: +1 click power, next cost grows geometrically
    pub fn purchase_click_upgrade(&mut self) -> PurchaseOutcome {
        let cost = self.click_cost();
        if !self.can_afford(cost) {
            return PurchaseOutcome::Unaffordable { cost };
        }

        self.balance -= cost;
        self.click_level += 1;
        self.click_power += 1;
        debug!(level = self.click_level, cost, "bought click upgrade");
        PurchaseOutcome::Bought { cost }
    }

    /// Buys one unit of the generator at `index`
    ///
    /// Out-of-range indices behave like an unaffordable purchase with an
    /// infinite price.
    pub fn purchase_generator(&mut self, index: usize) -> PurchaseOutcome {
        let Some(cost) = self.generators.get(index).map(Generator::cost) else {
            return PurchaseOutcome::Unaffordable { cost: f64::INFINITY };
        };
        if !self.can_afford(cost) {
            return PurchaseOutcome::Unaffordable { cost };
        }

        self.balance -= cost;
        let generator = &mut self.generators[index];
        generator.add_unit();
        debug!(
            generator = %generator.name,
            count = generator.count(),
            cost,
            "bought generator"
        );
        PurchaseOutcome::Bought { cost }
    }
}

/// Formats a currency amount as a whole number with thousands separators
///
/// The fractional part is truncated. A relative nudge of 1e-9 is applied first
/// so values like `100.0 * 1.15` (114.99999999999999) print as 115.
pub fn format_amount(amount: f64) -> String {
    let whole = if amount.is_finite() {
        (amount + amount.abs() * 1e-9).trunc()
    } else {
        0.0
    };
    let digits = format!("{}", whole.abs() as u64);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
