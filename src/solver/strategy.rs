//! Guess selection strategies
//!
//! Defines the Selector trait and the runtime-selectable wrapper.

use super::entropy::EntropySelector;
use super::frequency::FrequencySelector;
use crate::core::{Code, Configuration};

/// A strategy for choosing the next guess from the current candidates
pub trait Selector {
    /// Select the next guess for the 1-based `turn`
    ///
    /// Returns `None` only when no guess can be made (an empty candidate set
    /// with no fixed opening for this turn).
    fn select(&self, candidates: &[Code], turn: usize) -> Option<Code>;
}

/// Enum wrapper for all selector types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum SelectorKind {
    /// Entropy maximization (default)
    Entropy(EntropySelector),
    /// Positional frequency heuristic
    Frequency(FrequencySelector),
}

impl Selector for SelectorKind {
    fn select(&self, candidates: &[Code], turn: usize) -> Option<Code> {
        match self {
            Self::Entropy(s) => s.select(candidates, turn),
            Self::Frequency(s) => s.select(candidates, turn),
        }
    }
}

impl SelectorKind {
    /// Supported strategy names
    pub const NAMES: [&'static str; 2] = ["entropy", "frequency"];

    /// Create a selector from its name
    ///
    /// Supported names: "entropy", "frequency" (or "heuristic"). Returns `None`
    /// if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, config: Configuration) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "entropy" => Some(Self::entropy(config)),
            "frequency" | "heuristic" => Some(Self::frequency(config)),
            _ => None,
        }
    }

    #[must_use]
    pub fn entropy(config: Configuration) -> Self {
        Self::Entropy(EntropySelector::new(config))
    }

    #[must_use]
    pub fn frequency(config: Configuration) -> Self {
        Self::Frequency(FrequencySelector::new(config))
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Frequency(_) => "frequency",
        }
    }
}
