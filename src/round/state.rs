//! Round phases and the read-only state snapshot

use serde::{Deserialize, Serialize};

use super::problem::Problem;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round played yet this session
    NotStarted,
    /// Countdown running, answers accepted
    Playing,
    /// Timer expired or round stopped; summary screen territory
    Ended,
}

/// Transient result of a scored answer
///
/// Returned once by `submit` and never stored; how long it stays on
/// screen is the presentation layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect { expected: i32 },
}

/// Snapshot of everything the presentation layer renders
///
/// `problem` is `Some` exactly while the phase is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    pub score: u32,
    pub time_remaining: u32,
    pub problem: Option<Problem>,
    pub best_score: u32,
}
