//! Game configuration
//!
//! Every tuning constant of the game lives here with its default value. A JSON
//! file can override any subset of them; sections and fields that are missing
//! from the file fall back to the defaults below.
//!
//! # Lookup order
//!
//! 1. `<user config dir>/pickle_clicker/game.json`
//! 2. `assets/config/game.json`
//! 3. Built-in defaults
//!
//! # Example
//!
//! ```json
//! {
//!     "window": { "fps": 120 },
//!     "buff": { "duration_secs": 30.0 }
//! }
//! ```

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Bundled config path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

/// Top-level configuration, one field per subsystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub economy: EconomyConfig,
    pub buff: BuffConfig,
    pub spawning: SpawnConfig,
    pub widgets: WidgetConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Upper bound on a single frame's dt, in seconds
    pub max_dt: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Pickle Clicker".to_string(),
            width: 800,
            height: 600,
            fps: 60,
            max_dt: 0.1,
        }
    }
}

/// A purchasable generator as described in config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    pub name: String,
    pub base_cost: f64,
    pub growth: f64,
    /// Pickles per second contributed by each owned unit
    pub production: f64,
}

impl GeneratorSpec {
    pub fn new(name: &str, base_cost: f64, growth: f64, production: f64) -> Self {
        GeneratorSpec {
            name: name.to_string(),
            base_cost,
            growth,
            production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub click_base_cost: f64,
    pub click_growth: f64,
    pub base_click_power: u64,
    pub win_threshold: f64,
    pub generators: Vec<GeneratorSpec>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        EconomyConfig {
            click_base_cost: 50.0,
            click_growth: 1.15,
            base_click_power: 1,
            win_threshold: 1_000_000.0,
            generators: vec![
                GeneratorSpec::new("Jar", 100.0, 1.15, 1.0),
                GeneratorSpec::new("Farm", 1_000.0, 1.17, 10.0),
                GeneratorSpec::new("Factory", 10_000.0, 1.20, 100.0),
                GeneratorSpec::new("Plant", 100_000.0, 1.22, 1_000.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffConfig {
    pub click_multiplier: f64,
    pub production_multiplier: f64,
    pub duration_secs: f64,
}

impl Default for BuffConfig {
    fn default() -> Self {
        BuffConfig {
            click_multiplier: 4.0,
            production_multiplier: 2.0,
            duration_secs: 15.0,
        }
    }
}

/// Inclusive `[min, max]` range for uniform sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Decorative spawns per second per unit of production
    pub density_factor: f64,
    pub golden_interval: Range,
    /// Distance below the window an entity may fall before it is culled
    pub cull_margin: f32,
    /// Entities spawn at this y (negative = above the window)
    pub spawn_y: f32,
    pub sprite_size: u32,
    pub decorative_speed: Range,
    pub decorative_spin: Range,
    pub golden_speed: Range,
    pub golden_spin: Range,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            density_factor: 0.2,
            golden_interval: Range::new(45.0, 90.0),
            cull_margin: 20.0,
            spawn_y: -20.0,
            sprite_size: 40,
            decorative_speed: Range::new(100.0, 200.0),
            decorative_spin: Range::new(-90.0, 90.0),
            golden_speed: Range::new(50.0, 100.0),
            golden_spin: Range::new(-180.0, 180.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Smoothing rate of button hover animation (per second)
    pub hover_rate: f32,
    /// Smoothing rate of the shop panel slide (per second)
    pub shop_slide_rate: f32,
    /// Decay rate of the main sprite press pulse (per second)
    pub press_decay_rate: f32,
    pub shop_width: u32,
    pub main_sprite_size: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            hover_rate: 10.0,
            shop_slide_rate: 8.0,
            press_decay_rate: 8.0,
            shop_width: 300,
            main_sprite_size: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub pickle_image: String,
    pub golden_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            pickle_image: "assets/pickle.png".to_string(),
            golden_image: "assets/golden_pickle.png".to_string(),
        }
    }
}

impl GameConfig {
    /// Parses a config file. Missing fields take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|source| GameError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first config file that exists, or the defaults if none does
    pub fn load() -> Result<Self, GameError> {
        for path in Self::search_paths() {
            if path.is_file() {
                info!(path = %path.display(), "loading config");
                return Self::load_from_file(&path);
            }
        }
        info!("no config file found, using built-in defaults");
        Ok(GameConfig::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("pickle_clicker").join("game.json"));
        }
        paths.push(PathBuf::from(DEFAULT_CONFIG_PATH));
        paths
    }

    /// Rejects values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero".to_string());
        }
        if self.window.fps == 0 {
            return invalid("fps must be at least 1".to_string());
        }
        if self.window.max_dt <= 0.0 {
            return invalid("max_dt must be positive".to_string());
        }
        if self.economy.click_base_cost <= 0.0 || self.economy.click_growth <= 1.0 {
            return invalid("click upgrade needs a positive cost and growth > 1".to_string());
        }
        if self.economy.generators.is_empty() {
            return invalid("at least one generator is required".to_string());
        }
        for generator in &self.economy.generators {
            if generator.base_cost <= 0.0 || generator.growth <= 1.0 || generator.production < 0.0 {
                return invalid(format!("generator {} has invalid economics", generator.name));
            }
        }
        if self.buff.duration_secs <= 0.0
            || self.buff.click_multiplier < 1.0
            || self.buff.production_multiplier < 1.0
        {
            return invalid("buff must last a positive time and not reduce output".to_string());
        }
        let spawning = &self.spawning;
        let ranges = [
            ("golden_interval", spawning.golden_interval),
            ("decorative_speed", spawning.decorative_speed),
            ("decorative_spin", spawning.decorative_spin),
            ("golden_speed", spawning.golden_speed),
            ("golden_spin", spawning.golden_spin),
        ];
        for (name, range) in ranges {
            if !range.is_ordered() {
                return invalid(format!("{} has min > max", name));
            }
        }
        if spawning.density_factor < 0.0 || spawning.sprite_size == 0 {
            return invalid("spawn density must be >= 0 and sprite size non-zero".to_string());
        }
        if spawning.cull_margin < 0.0 {
            return invalid("cull_margin must be >= 0".to_string());
        }

        let widgets = &self.widgets;
        let rates = [
            ("hover_rate", widgets.hover_rate),
            ("shop_slide_rate", widgets.shop_slide_rate),
            ("press_decay_rate", widgets.press_decay_rate),
        ];
        for (name, rate) in rates {
            if rate.is_nan() || rate <= 0.0 {
                return invalid(format!("{} must be positive", name));
            }
        }
        if widgets.shop_width == 0 || widgets.shop_width > self.window.width {
            return invalid("shop_width must fit inside the window".to_string());
        }
        Ok(())
    }
}
