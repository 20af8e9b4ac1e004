//! Core domain types for the strike/ball puzzle
//!
//! This module contains the fundamental domain types: codes, rule
//! configurations and the feedback oracle. Everything here is pure and
//! deterministic.

mod code;
mod config;
mod feedback;

pub use code::{ALPHABET_SIZE, Code, CodeError, MAX_CODE_LENGTH};
pub use config::{Configuration, MAX_SPACE_SIZE};
pub use feedback::{Feedback, compute_feedback};
