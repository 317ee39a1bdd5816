// Game module - frame orchestration
//
// This module contains:
// - state.rs: Game context struct and the per-frame entry point
// - events.rs: Input dispatch (UI first, then world clicks)
// - update.rs: Simulation phases (accrual, buff, pools, win, widgets)
// - rendering.rs: Back-to-front draw pass
// - clock.rs: Frame-rate governor and dt clamping

pub mod clock;
pub mod events;
pub mod rendering;
pub mod state;
pub mod update;

pub use clock::FrameClock;
pub use state::{FrameOutcome, Game};
