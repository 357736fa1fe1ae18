//! The round controller
//!
//! Owns all mutable round state and advances it in response to four
//! events from the external driver: `start`, `tick` (1 Hz while
//! playing), `submit`, and `stop`. The driver is not required to cancel
//! its timer synchronously with the end of a round; `tick` and `submit`
//! outside the `Playing` phase are safe no-ops.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::problem::Problem;
use super::state::{Feedback, Phase, RoundState};
use crate::consts::GAME_DURATION_SECS;
use crate::persistence::ScoreStore;

/// Stateful quiz session driven by external events
pub struct RoundController<S> {
    /// Session seed for reproducibility
    seed: u64,
    rng: Pcg32,
    duration_secs: u32,
    phase: Phase,
    score: u32,
    time_remaining: u32,
    problem: Option<Problem>,
    best_score: u32,
    store: S,
}

impl<S: ScoreStore> RoundController<S> {
    /// Create a controller with the standard 60-second round length
    ///
    /// Loads the persisted best score from `store` up front.
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_duration(seed, GAME_DURATION_SECS, store)
    }

    /// Create a controller with a custom round length in seconds
    pub fn with_duration(seed: u64, duration_secs: u32, store: S) -> Self {
        let best_score = store.load_best();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            duration_secs,
            phase: Phase::NotStarted,
            score: 0,
            time_remaining: duration_secs,
            problem: None,
            best_score,
            store,
        }
    }

    /// Begin a fresh round; valid from any phase (also restarts)
    pub fn start(&mut self) {
        self.score = 0;
        self.time_remaining = self.duration_secs;
        self.problem = Some(Problem::generate(&mut self.rng));
        self.phase = Phase::Playing;
        log::debug!("round started (seed {})", self.seed);
    }

    /// Advance the countdown by one second
    ///
    /// No-op outside `Playing`, so a late-firing external timer cannot
    /// corrupt an ended round. Reaching zero ends the round and runs
    /// the best-score update.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.finish();
        }
    }

    /// Score a raw answer string against the current problem
    ///
    /// Empty or non-numeric input is a no-op returning `None`: no score
    /// change, no feedback, and the current problem stays up. A parsed
    /// answer is scored and the problem is replaced either way; the
    /// round never pauses for feedback.
    pub fn submit(&mut self, raw: &str) -> Option<Feedback> {
        if self.phase != Phase::Playing {
            return None;
        }
        let problem = self.problem?;
        let value: i32 = raw.trim().parse().ok()?;

        let feedback = if problem.check(value) {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: problem.answer,
            }
        };

        self.problem = Some(Problem::generate(&mut self.rng));
        Some(feedback)
    }

    /// End the round early; same persistence rule as timer expiry
    pub fn stop(&mut self) {
        if self.phase == Phase::Playing {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Ended;
        self.problem = None;
        log::debug!(
            "round ended: score {} (best {})",
            self.score,
            self.best_score
        );
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save_best(self.best_score);
        }
    }

    /// Snapshot for the presentation layer
    pub fn state(&self) -> RoundState {
        RoundState {
            phase: self.phase,
            score: self.score,
            time_remaining: self.time_remaining,
            problem: self.problem,
            best_score: self.best_score,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// The problem currently on screen; `Some` exactly while playing
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }
}
