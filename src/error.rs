//! Errors reported by the solving engine

use crate::core::CodeError;
use crate::solver::SessionState;
use thiserror::Error;

/// Everything that can go wrong when configuring or driving a session
///
/// Running out of candidates or turns is not an error: those are reported as
/// terminal [`SessionState`]s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("malformed feedback: {0}")]
    MalformedFeedback(String),
    #[error("code has {actual} digits, expected {expected}")]
    CodeLengthMismatch { expected: usize, actual: usize },
    #[error("invalid code: {0}")]
    InvalidCode(#[from] CodeError),
    #[error("session already finished ({0})")]
    SessionFinished(SessionState),
    #[error("no candidates remain")]
    NoCandidates,
}
