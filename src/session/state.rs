//! Session state tracking
//!
//! Maintains:
//! - Current operation and problem
//! - Pending answer text
//! - Score, streak and completed count
//! - Feedback for the round being shown
//!
//! Every new problem opens a new round. Submitting an answer hands back the
//! round id so the delayed follow-up can be matched against the round that is
//! still current when it fires.

use super::stats::SessionStats;
use crate::problem::{Operation, Problem, ProblemGenerator, RandomSource};

/// Points awarded for a correct answer
pub const POINTS_PER_CORRECT: u32 = 10;

/// Result of the last submitted answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Identifies the problem a delayed follow-up belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoundId(u64);

/// Complete game session
#[derive(Clone, Debug)]
pub struct SessionState {
    current_operation: Operation,
    current_problem: Option<Problem>,
    pending_input: String,
    score: u32,
    streak: u32,
    completed_count: u32,
    feedback: Option<Feedback>,
    round: RoundId,
    stats: SessionStats,
}

impl SessionState {
    /// Start a session awaiting input on a fresh problem
    pub fn new(operation: Operation, rng: &mut impl RandomSource) -> Self {
        let mut session = SessionState {
            current_operation: operation,
            ..Self::default()
        };
        session.start_round(rng);
        session
    }

    /// Switch operation. Score, streak and counts carry over.
    pub fn select_operation(&mut self, operation: Operation, rng: &mut impl RandomSource) {
        tracing::info!(from = %self.current_operation, to = %operation, "operation selected");
        self.current_operation = operation;
        self.start_round(rng);
    }

    /// Store the answer text as typed
    pub fn record_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Grade the pending input against the current problem.
    ///
    /// Returns `None` without touching state when there is no problem or the
    /// input is empty. Otherwise returns the round the follow-up
    /// [`advance`](Self::advance) must carry.
    pub fn submit_answer(&mut self) -> Option<RoundId> {
        let problem = self.current_problem?;
        if self.pending_input.is_empty() {
            return None;
        }

        // Unparseable text is simply a wrong answer
        let correct = parse_answer(&self.pending_input).is_some_and(|v| problem.check_answer(v));

        if correct {
            self.score += POINTS_PER_CORRECT;
            self.streak += 1;
            self.feedback = Some(Feedback::Correct);
        } else {
            self.streak = 0;
            self.feedback = Some(Feedback::Incorrect);
        }
        self.completed_count += 1;
        self.stats.record(problem.operation, correct, self.streak);

        tracing::debug!(
            question = %problem.question(),
            input = %self.pending_input,
            correct,
            score = self.score,
            streak = self.streak,
            completed = self.completed_count,
            "answer submitted"
        );

        Some(self.round)
    }

    /// Move on to the next problem once feedback has been shown.
    ///
    /// A token from an earlier round (the player reset or switched operation
    /// meanwhile) is ignored. Returns whether a new problem was started.
    pub fn advance(&mut self, token: RoundId, rng: &mut impl RandomSource) -> bool {
        if token != self.round || self.feedback.is_none() {
            tracing::debug!(?token, current = ?self.round, "stale advance ignored");
            return false;
        }
        self.start_round(rng);
        true
    }

    /// New game: clear score, streak and counts, keep the operation
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        tracing::info!(
            score = self.score,
            completed = self.completed_count,
            "game reset"
        );
        self.score = 0;
        self.streak = 0;
        self.completed_count = 0;
        self.stats = SessionStats::new();
        self.start_round(rng);
    }

    /// Whether the answer field is open (a problem is shown and no feedback)
    pub fn accepts_input(&self) -> bool {
        self.current_problem.is_some() && self.feedback.is_none()
    }

    pub fn current_operation(&self) -> Operation {
        self.current_operation
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_problem.as_ref()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    fn start_round(&mut self, rng: &mut impl RandomSource) {
        self.round = RoundId(self.round.0.wrapping_add(1));
        self.current_problem = Some(ProblemGenerator::generate(self.current_operation, rng));
        self.pending_input.clear();
        self.feedback = None;
    }
}

/// A session with no problem drawn yet
impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            current_operation: Operation::default(),
            current_problem: None,
            pending_input: String::new(),
            score: 0,
            streak: 0,
            completed_count: 0,
            feedback: None,
            round: RoundId(0),
            stats: SessionStats::default(),
        }
    }
}

/// Leading integer of the answer text: optional sign then ASCII digits.
///
/// Anything after the digits is ignored, so `12.0` and `12e0` read as 12.
/// No digits or an out-of-range value gives `None`.
fn parse_answer(text: &str) -> Option<i32> {
    let text = text.trim();
    let sign_len = usize::from(text.starts_with(&['-', '+'][..]));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}
