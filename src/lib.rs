//! Math Blitz - a timed mental-arithmetic quiz
//!
//! Core modules:
//! - `round`: round state machine (problem generation, countdown, scoring)
//! - `persistence`: best-score storage behind an injected capability
//!
//! The library is driven entirely by events (`start`, `tick`, `submit`,
//! `stop`) from an external presentation layer; the bundled binary is a
//! minimal terminal driver around it.

pub mod persistence;
pub mod round;

pub use persistence::{FileStore, MemoryStore, ScoreStore};
pub use round::{Feedback, Operator, Phase, Problem, RoundController, RoundState};

/// Game configuration constants
pub mod consts {
    /// Round length in seconds
    pub const GAME_DURATION_SECS: u32 = 60;

    /// Addition/subtraction operand range (inclusive)
    pub const ADD_OPERAND_MIN: i32 = 1;
    pub const ADD_OPERAND_MAX: i32 = 20;

    /// Multiplication operand range (inclusive)
    pub const MUL_OPERAND_MIN: i32 = 2;
    pub const MUL_OPERAND_MAX: i32 = 11;
}
