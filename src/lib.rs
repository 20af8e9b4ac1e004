//! Strike/Ball Solver
//!
//! A solver for the strikes-and-balls code-breaking puzzle (a Bulls and Cows
//! variant) using information theory, with a cheaper positional-frequency
//! heuristic as an alternative strategy.
//!
//! # Quick Start
//!
//! ```rust
//! use strikeball_solver::core::{Code, Feedback};
//! use strikeball_solver::solver::{SessionState, configure};
//!
//! // Four distinct digits, no leading zero
//! let mut session = configure(4, false, false).unwrap();
//! let secret = Code::parse("5930").unwrap();
//!
//! while session.state() == SessionState::Searching {
//!     let guess = session.next_guess().unwrap();
//!     let feedback = Feedback::calculate(&guess, &secret);
//!     session.apply_feedback(guess, feedback).unwrap();
//! }
//!
//! assert!(session.state().is_solved());
//! ```

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Candidate space generation, caching and filtering
pub mod space;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::SolverError;
