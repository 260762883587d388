//! Delayed follow-up after an answer is graded
//!
//! The event loop polls the timer with the current instant; once the
//! deadline passes the timer yields the round token exactly once. The token
//! is checked against the live round by `SessionState::advance`.

use super::state::RoundId;
use std::time::{Duration, Instant};

/// Default time feedback stays on screen
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// One-shot timer carrying a round token
#[derive(Clone, Debug)]
pub struct FeedbackTimer {
    delay: Duration,
    pending: Option<(RoundId, Instant)>,
}

impl FeedbackTimer {
    pub fn new(delay: Duration) -> Self {
        FeedbackTimer {
            delay,
            pending: None,
        }
    }

    /// Arm the timer for `token`, replacing anything pending
    pub fn schedule(&mut self, token: RoundId, now: Instant) {
        self.pending = Some((token, now + self.delay));
    }

    /// Token whose deadline has passed, if any
    pub fn poll(&mut self, now: Instant) -> Option<RoundId> {
        match self.pending {
            Some((token, due)) if now >= due => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::random::SystemRandom;
    use crate::problem::Operation;
    use crate::session::SessionState;

    #[test]
    fn test_fires_once_after_delay() {
        let mut rng = SystemRandom::from_seed(30);
        let mut session = SessionState::new(Operation::Addition, &mut rng);
        session.record_input("1");
        let token = session.submit_answer().unwrap();

        let start = Instant::now();
        let mut timer = FeedbackTimer::default();
        timer.schedule(token, start);

        assert_eq!(timer.poll(start), None);
        assert_eq!(timer.poll(start + Duration::from_millis(1499)), None);
        assert!(timer.is_pending());
        assert_eq!(timer.poll(start + Duration::from_millis(1500)), Some(token));
        assert_eq!(timer.poll(start + Duration::from_secs(5)), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_late_firing_after_reset_is_harmless() {
        let mut rng = SystemRandom::from_seed(31);
        let mut session = SessionState::new(Operation::Subtraction, &mut rng);
        session.record_input("7");
        let token = session.submit_answer().unwrap();

        let start = Instant::now();
        let mut timer = FeedbackTimer::new(Duration::from_millis(10));
        timer.schedule(token, start);

        session.reset(&mut rng);
        let problem = *session.current_problem().unwrap();

        let fired = timer.poll(start + Duration::from_millis(10)).unwrap();
        assert!(!session.advance(fired, &mut rng));
        assert_eq!(session.current_problem(), Some(&problem));
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut rng = SystemRandom::from_seed(32);
        let mut session = SessionState::new(Operation::Addition, &mut rng);
        session.record_input("1");
        let first = session.submit_answer().unwrap();
        session.advance(first, &mut rng);
        session.record_input("1");
        let second = session.submit_answer().unwrap();

        let start = Instant::now();
        let mut timer = FeedbackTimer::new(Duration::from_millis(100));
        timer.schedule(first, start);
        timer.schedule(second, start + Duration::from_millis(50));

        assert_eq!(timer.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            timer.poll(start + Duration::from_millis(150)),
            Some(second)
        );
    }
}
