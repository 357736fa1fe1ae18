//! Arithmetic problem generation
//!
//! Operand ranges are chosen so every answer is a non-negative integer;
//! subtraction draws the second operand from `[1, operand1]` rather than
//! rejecting and retrying.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arithmetic operator for a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    /// Display glyph for the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
        }
    }

    /// Apply the operator to two operands
    pub fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
        }
    }
}

/// One arithmetic question with its precomputed correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand1: i32,
    pub operand2: i32,
    pub operator: Operator,
    pub answer: i32,
}

impl Problem {
    /// Draw a new problem from the given RNG
    pub fn generate(rng: &mut impl Rng) -> Self {
        let operator = match rng.random_range(0..3) {
            0 => Operator::Add,
            1 => Operator::Sub,
            _ => Operator::Mul,
        };

        let (operand1, operand2) = match operator {
            Operator::Add => (
                rng.random_range(ADD_OPERAND_MIN..=ADD_OPERAND_MAX),
                rng.random_range(ADD_OPERAND_MIN..=ADD_OPERAND_MAX),
            ),
            Operator::Sub => {
                let a = rng.random_range(ADD_OPERAND_MIN..=ADD_OPERAND_MAX);
                // Second operand never exceeds the first, so the answer is never negative
                (a, rng.random_range(1..=a))
            }
            Operator::Mul => (
                rng.random_range(MUL_OPERAND_MIN..=MUL_OPERAND_MAX),
                rng.random_range(MUL_OPERAND_MIN..=MUL_OPERAND_MAX),
            ),
        };

        Self {
            operand1,
            operand2,
            operator,
            answer: operator.apply(operand1, operand2),
        }
    }

    /// True if `value` is the correct answer
    pub fn check(&self, value: i32) -> bool {
        value == self.answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand1,
            self.operator.symbol(),
            self.operand2
        )
    }
}
