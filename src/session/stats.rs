//! Session statistics for the end-of-session summary
//!
//! Features:
//! - Per-operation attempted/correct counts
//! - Best streak reached
//! - Session clock

use crate::problem::Operation;
use std::time::Instant;

/// Attempts and correct answers for one operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationTally {
    pub attempted: u32,
    pub correct: u32,
}

impl OperationTally {
    /// Fraction correct (0.0-1.0), `None` before the first attempt
    pub fn accuracy(&self) -> Option<f32> {
        if self.attempted == 0 {
            None
        } else {
            Some(self.correct as f32 / self.attempted as f32)
        }
    }
}

/// Cumulative statistics, cleared by a game reset
#[derive(Clone, Debug)]
pub struct SessionStats {
    /// Indexed by `Operation::index()`
    per_operation: [OperationTally; 4],
    best_streak: u32,
    start_time: Instant,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            per_operation: [OperationTally::default(); 4],
            best_streak: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one submitted answer and the streak after it
    pub fn record(&mut self, operation: Operation, correct: bool, streak: u32) {
        let tally = &mut self.per_operation[operation.index()];
        tally.attempted += 1;
        if correct {
            tally.correct += 1;
        }
        self.best_streak = self.best_streak.max(streak);
    }

    pub fn tally(&self, operation: Operation) -> OperationTally {
        self.per_operation[operation.index()]
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Overall accuracy across operations, `None` before the first attempt
    pub fn overall_accuracy(&self) -> Option<f32> {
        let total = self
            .per_operation
            .iter()
            .fold(OperationTally::default(), |acc, t| OperationTally {
                attempted: acc.attempted + t.attempted,
                correct: acc.correct + t.correct,
            });
        total.accuracy()
    }

    /// Seconds since the session (or last reset) began
    pub fn duration_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
