//! Problem generation
//!
//! Draws operands from the fixed per-operation ranges. Division is built
//! backwards from divisor and quotient so the dividend is always an exact
//! multiple.

use super::operation::Operation;
use super::random::RandomSource;

/// One generated arithmetic question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    pub operand1: i32,
    pub operand2: i32,
    pub operation: Operation,
    pub expected_answer: i32,
}

impl Problem {
    /// Question text, e.g. `12 ÷ 4 = ?`
    pub fn question(&self) -> String {
        format!(
            "{} {} {} = ?",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }

    /// Check a parsed answer
    pub fn check_answer(&self, answer: i32) -> bool {
        self.expected_answer == answer
    }
}

/// Stateless problem factory
pub struct ProblemGenerator;

impl ProblemGenerator {
    /// Generate a problem for `operation`. Total: never fails.
    pub fn generate<R: RandomSource + ?Sized>(operation: Operation, rng: &mut R) -> Problem {
        let (first, second) = operation.draw_ranges();
        let a = rng.gen_range(*first.start(), *first.end());
        let b = rng.gen_range(*second.start(), *second.end());

        let problem = match operation {
            Operation::Addition => Problem {
                operand1: a,
                operand2: b,
                operation,
                expected_answer: a + b,
            },
            Operation::Subtraction => Problem {
                operand1: a,
                operand2: b,
                operation,
                expected_answer: a - b,
            },
            Operation::Multiplication => Problem {
                operand1: a,
                operand2: b,
                operation,
                expected_answer: a * b,
            },
            // a = divisor, b = quotient
            Operation::Division => Problem {
                operand1: a * b,
                operand2: a,
                operation,
                expected_answer: b,
            },
        };

        debug_assert_eq!(
            operation.apply(problem.operand1, problem.operand2),
            Some(problem.expected_answer)
        );
        problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::random::{ScriptedRandom, SystemRandom};

    const SAMPLES: usize = 5000;

    #[test]
    fn test_answers_are_exact_for_every_operation() {
        let mut rng = SystemRandom::from_seed(1);
        for op in Operation::ALL {
            for _ in 0..SAMPLES {
                let p = ProblemGenerator::generate(op, &mut rng);
                assert_eq!(p.operation, op);
                assert_eq!(op.apply(p.operand1, p.operand2), Some(p.expected_answer));
            }
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = SystemRandom::from_seed(2);
        for _ in 0..SAMPLES {
            let p = ProblemGenerator::generate(Operation::Subtraction, &mut rng);
            assert!(p.expected_answer >= 0, "{:?}", p);
        }
        // worst case: smallest minuend, largest subtrahend
        let mut worst = ScriptedRandom::new(&[25, 25]);
        let p = ProblemGenerator::generate(Operation::Subtraction, &mut worst);
        assert_eq!(p.expected_answer, 0);
    }

    #[test]
    fn test_division_is_exact() {
        let mut rng = SystemRandom::from_seed(3);
        for _ in 0..SAMPLES {
            let p = ProblemGenerator::generate(Operation::Division, &mut rng);
            assert_eq!(p.operand1 % p.operand2, 0);
            assert_eq!(p.operand1 / p.operand2, p.expected_answer);
            assert!((1..=12).contains(&p.operand2));
            assert!((1..=12).contains(&p.expected_answer));
        }
    }

    #[test]
    fn test_division_draws_divisor_then_quotient() {
        let mut rng = ScriptedRandom::new(&[4, 3]);
        let p = ProblemGenerator::generate(Operation::Division, &mut rng);
        assert_eq!(
            p,
            Problem {
                operand1: 12,
                operand2: 4,
                operation: Operation::Division,
                expected_answer: 3,
            }
        );
        assert_eq!(p.question(), "12 ÷ 4 = ?");
    }

    fn operand_bounds(op: Operation, seed: u64) -> ((i32, i32), (i32, i32)) {
        let mut rng = SystemRandom::from_seed(seed);
        let mut first = (i32::MAX, i32::MIN);
        let mut second = (i32::MAX, i32::MIN);
        for _ in 0..SAMPLES {
            let p = ProblemGenerator::generate(op, &mut rng);
            first = (first.0.min(p.operand1), first.1.max(p.operand1));
            second = (second.0.min(p.operand2), second.1.max(p.operand2));
        }
        (first, second)
    }

    #[test]
    fn test_addition_reaches_both_bounds() {
        let (first, second) = operand_bounds(Operation::Addition, 4);
        assert_eq!(first, (1, 50));
        assert_eq!(second, (1, 50));
    }

    #[test]
    fn test_multiplication_reaches_both_bounds() {
        let (first, second) = operand_bounds(Operation::Multiplication, 5);
        assert_eq!(first, (1, 12));
        assert_eq!(second, (1, 12));
    }

    #[test]
    fn test_subtraction_reaches_both_bounds() {
        let (first, second) = operand_bounds(Operation::Subtraction, 6);
        assert_eq!(first, (25, 74));
        assert_eq!(second, (1, 25));
    }

    #[test]
    fn test_check_answer() {
        let mut rng = ScriptedRandom::new(&[7, 8]);
        let p = ProblemGenerator::generate(Operation::Multiplication, &mut rng);
        assert!(p.check_answer(56));
        assert!(!p.check_answer(54));
    }
}
