//! Math Blitz entry point
//!
//! Minimal terminal driver around the round state machine. It owns the
//! 1 Hz ticker thread and the stdin reader; both funnel into a single
//! event loop, so all state mutation happens on one thread. The ticker
//! is free-running: `tick()` outside the playing phase is a no-op, so
//! no cancellation handshake is needed.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use math_blitz::consts::GAME_DURATION_SECS;
use math_blitz::persistence::{FileStore, ScoreStore};
use math_blitz::round::{Feedback, Phase, RoundController};

enum Event {
    Tick,
    Line(String),
    Eof,
}

fn main() {
    env_logger::init();

    let store = FileStore::new(FileStore::default_path());
    let seed: u64 = rand::random();
    let mut game = RoundController::new(seed, store);

    let (tx, rx) = mpsc::channel();

    let tick_tx = tx.clone();
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(1));
            if tick_tx.send(Event::Tick).is_err() {
                return;
            }
        }
    });

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Event::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::Eof);
    });

    println!("Math Blitz");
    println!("Answer as many problems as you can in {GAME_DURATION_SECS} seconds.");
    println!("Best score: {}", game.best_score());
    println!("Press Enter to start.");

    let mut last_phase = game.phase();
    while let Ok(event) = rx.recv() {
        let mut reprompt = false;
        match event {
            Event::Tick => {
                game.tick();
                // Countdown warning in the final stretch
                let left = game.time_remaining();
                if game.phase() == Phase::Playing && left <= 5 && left > 0 {
                    println!();
                    println!("{left} seconds left!");
                    reprompt = true;
                }
            }
            Event::Line(line) => match game.phase() {
                Phase::NotStarted | Phase::Ended => game.start(),
                Phase::Playing => {
                    match game.submit(&line) {
                        Some(Feedback::Correct) => println!("Correct!"),
                        Some(Feedback::Incorrect { expected }) => {
                            println!("Wrong! The answer was {expected}.")
                        }
                        None => println!("Enter a whole number."),
                    }
                    reprompt = true;
                }
            },
            Event::Eof => {
                game.stop();
                break;
            }
        }

        let phase = game.phase();
        if phase != last_phase {
            match phase {
                Phase::Playing => {
                    println!("Go!");
                    reprompt = true;
                }
                Phase::Ended => {
                    println!();
                    println!("Time's up! Final score: {}", game.score());
                    println!("Best score: {}", game.best_score());
                    println!("Press Enter to play again.");
                }
                Phase::NotStarted => {}
            }
            last_phase = phase;
        }

        if reprompt {
            prompt(&game);
        }
    }
}

/// Show the current problem with the countdown and score
fn prompt<S: ScoreStore>(game: &RoundController<S>) {
    if let Some(problem) = game.problem() {
        print!(
            "[{:>2}s | {} pts] {} = ",
            game.time_remaining(),
            game.score(),
            problem
        );
        let _ = io::stdout().flush();
    }
}
