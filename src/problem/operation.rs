//! Arithmetic operations offered by the game
//!
//! Each operation carries:
//! - A display symbol and label
//! - Its fixed operand ranges (inclusive)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the four arithmetic operators the player can practise
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations in selector order
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Symbol shown between the operands
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Capitalised name for the operation selector
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    /// Position in `ALL`, used to index per-operation tallies
    pub fn index(self) -> usize {
        match self {
            Operation::Addition => 0,
            Operation::Subtraction => 1,
            Operation::Multiplication => 2,
            Operation::Division => 3,
        }
    }

    /// Following operation in selector order (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding operation in selector order (wraps)
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Inclusive ranges for the two random draws, in draw order.
    ///
    /// For division the draws are the divisor and the quotient; the dividend
    /// is derived from them.
    pub fn draw_ranges(self) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        match self {
            Operation::Addition => (1..=50, 1..=50),
            Operation::Subtraction => (25..=74, 1..=25),
            Operation::Multiplication => (1..=12, 1..=12),
            Operation::Division => (1..=12, 1..=12),
        }
    }

    /// Exact result of `lhs OP rhs`, `None` when it is not a whole number
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Operation::Addition => lhs.checked_add(rhs),
            Operation::Subtraction => lhs.checked_sub(rhs),
            Operation::Multiplication => lhs.checked_mul(rhs),
            Operation::Division => {
                if rhs != 0 && lhs % rhs == 0 {
                    Some(lhs / rhs)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(Operation::Division.next(), Operation::Addition);
        assert_eq!(Operation::Addition.previous(), Operation::Division);
        for op in Operation::ALL {
            assert_eq!(op.next().previous(), op);
            assert_eq!(Operation::ALL[op.index()], op);
        }
    }

    #[test]
    fn test_apply_division_requires_exact_quotient() {
        assert_eq!(Operation::Division.apply(12, 4), Some(3));
        assert_eq!(Operation::Division.apply(13, 4), None);
        assert_eq!(Operation::Division.apply(4, 0), None);
    }

    #[test]
    fn test_serde_names_are_lowercase() {
        let json = serde_json::to_string(&Operation::Multiplication).unwrap();
        assert_eq!(json, "\"multiplication\"");
        let op: Operation = serde_json::from_str("\"division\"").unwrap();
        assert_eq!(op, Operation::Division);
    }
}
