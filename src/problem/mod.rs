//! Problem Generation: Operations, random draws, and generated questions
//!
//! # Components
//! - `operation.rs`: Operation enum with symbols and operand ranges
//! - `random.rs`: Injectable random source (seedable)
//! - `generator.rs`: Problem value object and generator

pub mod generator;
pub mod operation;
pub mod random;

pub use generator::{Problem, ProblemGenerator};
pub use operation::Operation;
pub use random::{RandomSource, SystemRandom};
