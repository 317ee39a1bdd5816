//! Falling pickles: decorative rain and golden bonus pickles
//!
//! Both kinds share the same kinematics. Each frame:
//!
//! ```text
//! y     += speed * dt
//! angle  = (angle + spin * dt) mod 360
//! ```
//!
//! Decorative pickles spawn at a rate proportional to production (PPS), using a
//! fractional accumulator so the rate stays smooth at low production. Golden
//! pickles spawn one at a time on a randomly re-rolled deadline.
//!
//! Anything that falls past the bottom of the window plus a margin is removed.
//! A golden pickle is also removed when a click lands inside its bounding box.

use crate::config::{Range, SpawnConfig};
use rand::Rng;
use sdl2::rect::{Point, Rect};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallingKind {
    Decorative,
    Golden,
}

/// A single falling sprite
#[derive(Debug, Clone, PartialEq)]
pub struct FallingEntity {
    pub kind: FallingKind,
    pub x: f32,
    pub y: f32,
    /// Pixels per second downward
    pub speed: f32,
    /// Degrees, always in `[0, 360)`
    pub angle: f32,
    /// Degrees per second
    pub spin: f32,
    pub size: u32,
    bounds: Rect,
}

impl FallingEntity {
    pub fn new(kind: FallingKind, x: f32, y: f32, speed: f32, angle: f32, spin: f32, size: u32) -> Self {
        let mut entity = FallingEntity {
            kind,
            x,
            y,
            speed,
            angle: angle.rem_euclid(360.0),
            spin,
            size,
            bounds: Rect::new(0, 0, size, size),
        };
        entity.refresh_bounds();
        entity
    }

    pub fn update(&mut self, dt: f32) {
        self.y += self.speed * dt;
        self.angle = (self.angle + self.spin * dt).rem_euclid(360.0);
        self.refresh_bounds();
    }

    /// Screen box of the sprite as drawn in its current pose
    ///
    /// This is the axis-aligned box enclosing the rotated sprite, so it is a
    /// little larger than the sprite itself at diagonal angles.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Unrotated destination rectangle centred on the entity
    pub fn draw_rect(&self) -> Rect {
        Rect::from_center(Point::new(self.x.round() as i32, self.y.round() as i32), self.size, self.size)
    }

    fn refresh_bounds(&mut self) {
        self.bounds = rotated_bounds(self.x, self.y, self.size, self.size, self.angle);
    }
}

/// Axis-aligned box enclosing a `width` x `height` rectangle centred at
/// (`cx`, `cy`) and rotated by `angle` degrees
pub fn rotated_bounds(cx: f32, cy: f32, width: u32, height: u32, angle: f32) -> Rect {
    let radians = angle.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    let w = width as f32 * cos + height as f32 * sin;
    let h = width as f32 * sin + height as f32 * cos;
    Rect::from_center(
        Point::new(cx.round() as i32, cy.round() as i32),
        w.ceil().max(1.0) as u32,
        h.ceil().max(1.0) as u32,
    )
}

fn sample<R: Rng>(rng: &mut R, range: Range) -> f64 {
    if range.min >= range.max {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// What one pool update did, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    pub decorative_spawned: usize,
    pub golden_spawned: usize,
    pub decorative_culled: usize,
    pub golden_missed: usize,
}

/// Owns both collections of falling entities and their spawn schedules
#[derive(Debug, Clone)]
pub struct EntityPools {
    config: SpawnConfig,
    field_width: f32,
    field_height: f32,
    decorative: Vec<FallingEntity>,
    golden: Vec<FallingEntity>,
    spawn_accumulator: f64,
    next_golden_at: f64,
}

impl EntityPools {
    /// Creates empty pools over a `width` x `height` play field and rolls the
    /// first golden deadline relative to `now`
    pub fn new<R: Rng>(config: &SpawnConfig, width: u32, height: u32, now: f64, rng: &mut R) -> Self {
        EntityPools {
            config: config.clone(),
            field_width: width as f32,
            field_height: height as f32,
            decorative: Vec::new(),
            golden: Vec::new(),
            spawn_accumulator: 0.0,
            next_golden_at: now + sample(rng, config.golden_interval),
        }
    }

    pub fn decorative(&self) -> &[FallingEntity] {
        &self.decorative
    }

    pub fn golden(&self) -> &[FallingEntity] {
        &self.golden
    }

    pub fn next_golden_at(&self) -> f64 {
        self.next_golden_at
    }

    /// y beyond which entities are culled
    pub fn cull_line(&self) -> f32 {
        self.field_height + self.config.cull_margin
    }

    /// Spawn, integrate, then cull both pools
    pub fn update<R: Rng>(&mut self, now: f64, dt: f32, production_rate: f64, rng: &mut R) -> PoolReport {
        let decorative_spawned = self.spawn_decorative(production_rate, dt as f64, rng);
        let golden_spawned = usize::from(self.spawn_golden(now, rng));

        for entity in self.decorative.iter_mut().chain(self.golden.iter_mut()) {
            entity.update(dt);
        }

        let (decorative_culled, golden_missed) = self.cull();
        PoolReport {
            decorative_spawned,
            golden_spawned,
            decorative_culled,
            golden_missed,
        }
    }

    /// Feeds `production_rate * density * dt` into the accumulator and spawns
    /// one decorative pickle per whole unit. Returns the number spawned.
    pub fn spawn_decorative<R: Rng>(&mut self, production_rate: f64, dt: f64, rng: &mut R) -> usize {
        let increment = production_rate * self.config.density_factor * dt;
        if increment.is_finite() && increment > 0.0 {
            self.spawn_accumulator += increment;
        }

        let mut spawned = 0;
        while self.spawn_accumulator >= 1.0 {
            let entity = FallingEntity::new(
                FallingKind::Decorative,
                rng.gen_range(0.0..=self.field_width),
                self.config.spawn_y,
                sample(rng, self.config.decorative_speed) as f32,
                rng.gen_range(0.0..360.0),
                sample(rng, self.config.decorative_spin) as f32,
                self.config.sprite_size,
            );
            self.decorative.push(entity);
            self.spawn_accumulator -= 1.0;
            spawned += 1;
        }
        spawned
    }

    /// Spawns a golden pickle once `now` reaches the deadline, then re-rolls
    /// the deadline. Returns true if one spawned.
    pub fn spawn_golden<R: Rng>(&mut self, now: f64, rng: &mut R) -> bool {
        if now < self.next_golden_at {
            return false;
        }
        let entity = FallingEntity::new(
            FallingKind::Golden,
            rng.gen_range(0.0..=self.field_width),
            self.config.spawn_y,
            sample(rng, self.config.golden_speed) as f32,
            0.0,
            sample(rng, self.config.golden_spin) as f32,
            self.config.sprite_size,
        );
        debug!(x = entity.x, "golden pickle spawned");
        self.golden.push(entity);
        self.next_golden_at = now + sample(rng, self.config.golden_interval);
        true
    }

    /// Removes entities past the cull line. Returns (decorative, golden) counts.
    pub fn cull(&mut self) -> (usize, usize) {
        let limit = self.cull_line();
        let before = (self.decorative.len(), self.golden.len());
        self.decorative.retain(|entity| entity.y <= limit);
        self.golden.retain(|entity| entity.y <= limit);

        let missed = before.1 - self.golden.len();
        if missed > 0 {
            debug!(missed, "golden pickle fell off screen");
        }
        (before.0 - self.decorative.len(), missed)
    }

    /// Removes every golden pickle whose last drawn bounds contain `point`.
    /// Returns how many were claimed.
    pub fn claim_golden_at(&mut self, point: Point) -> usize {
        let before = self.golden.len();
        self.golden.retain(|entity| !entity.bounds().contains_point(point));
        before - self.golden.len()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, entity: FallingEntity) {
        match entity.kind {
            FallingKind::Decorative => self.decorative.push(entity),
            FallingKind::Golden => self.golden.push(entity),
        }
    }
}
