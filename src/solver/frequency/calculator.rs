//! Per-position digit histograms

use crate::core::{ALPHABET_SIZE, Code, MAX_CODE_LENGTH};

/// How often each digit appears at each position across a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionHistogram {
    counts: [[usize; ALPHABET_SIZE]; MAX_CODE_LENGTH],
    len: usize,
}

impl PositionHistogram {
    /// Count digit occurrences per position over `candidates`
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Code;
    /// use strikeball_solver::solver::frequency::PositionHistogram;
    ///
    /// let candidates = vec![
    ///     Code::parse("123").unwrap(),
    ///     Code::parse("143").unwrap(),
    /// ];
    /// let histogram = PositionHistogram::build(&candidates);
    ///
    /// assert_eq!(histogram.count(0, 1), 2);
    /// assert_eq!(histogram.count(1, 4), 1);
    /// assert_eq!(histogram.score(&Code::parse("123").unwrap()), 5);
    /// ```
    #[must_use]
    pub fn build(candidates: &[Code]) -> Self {
        let mut counts = [[0usize; ALPHABET_SIZE]; MAX_CODE_LENGTH];
        let len = candidates.first().map_or(0, Code::len);

        for candidate in candidates {
            for (position, &digit) in candidate.digits().iter().enumerate() {
                counts[position][usize::from(digit)] += 1;
            }
        }

        Self { counts, len }
    }

    /// Occurrences of `digit` at `position`
    #[must_use]
    pub fn count(&self, position: usize, digit: u8) -> usize {
        self.counts
            .get(position)
            .and_then(|row| row.get(usize::from(digit)))
            .copied()
            .unwrap_or(0)
    }

    /// Code length the histogram was built over (0 for an empty set)
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.len
    }

    /// Sum of the counts of each digit of `code` at its position
    #[must_use]
    pub fn score(&self, code: &Code) -> usize {
        code.digits()
            .iter()
            .enumerate()
            .map(|(position, &digit)| self.count(position, digit))
            .sum()
    }
}
