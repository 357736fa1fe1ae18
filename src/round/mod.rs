//! Round state machine
//!
//! All quiz logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Time advances only through explicit `tick()` calls
//! - No rendering, timers, or platform dependencies

pub mod controller;
pub mod problem;
pub mod state;

pub use controller::RoundController;
pub use problem::{Operator, Problem};
pub use state::{Feedback, Phase, RoundState};
