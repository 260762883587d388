//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and command mapping using crossterm
//! - `display.rs`: Terminal rendering and session summary

pub mod display;
pub mod input;

pub use display::Display;
pub use input::{Command, InputHandler};
