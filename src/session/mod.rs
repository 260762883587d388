//! Session Management: Game state, statistics, and feedback timing
//!
//! # Components
//! - `state.rs`: SessionState with answer grading and round tracking
//! - `stats.rs`: Per-operation tallies for the session summary
//! - `timer.rs`: Round-token timer for the feedback window

pub mod state;
pub mod stats;
pub mod timer;

pub use state::{Feedback, SessionState};
pub use timer::FeedbackTimer;
