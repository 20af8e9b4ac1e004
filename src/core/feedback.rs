//! Strike/ball feedback calculation and representation
//!
//! Feedback is the pair (strikes, balls):
//! - strikes: positions where guess and reference hold the same digit
//! - balls: further digit-value matches once strike positions are removed,
//!   each reference digit consumed at most once
//!
//! A signature of (N, 0) is a full match.

use super::Code;
use crate::error::SolverError;

/// Match signature of a guess against a reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    strikes: u8,
    balls: u8,
}

impl Feedback {
    /// Create a feedback signature from raw counts
    ///
    /// No length check is made; see [`Feedback::validate`].
    #[inline]
    #[must_use]
    pub const fn new(strikes: u8, balls: u8) -> Self {
        Self { strikes, balls }
    }

    /// The full-match signature for codes of the given length
    #[inline]
    #[must_use]
    pub const fn solved(code_length: usize) -> Self {
        Self::new(code_length as u8, 0)
    }

    #[inline]
    #[must_use]
    pub const fn strikes(self) -> u8 {
        self.strikes
    }

    #[inline]
    #[must_use]
    pub const fn balls(self) -> u8 {
        self.balls
    }

    /// Check if this is a full match for codes of the given length
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.strikes as usize == code_length && self.balls == 0
    }

    /// Dense index of this signature among all signatures for length `code_length`
    ///
    /// Used to bucket candidates without hashing.
    #[inline]
    #[must_use]
    pub const fn index(self, code_length: usize) -> usize {
        self.strikes as usize * (code_length + 1) + self.balls as usize
    }

    /// Number of dense indices needed for codes of length `code_length`
    #[inline]
    #[must_use]
    pub const fn index_count(code_length: usize) -> usize {
        (code_length + 1) * (code_length + 1)
    }

    /// Reject signatures that cannot occur for codes of length `code_length`
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` when strikes + balls exceeds
    /// the code length.
    pub fn validate(self, code_length: usize) -> Result<Self, SolverError> {
        if usize::from(self.strikes) + usize::from(self.balls) > code_length {
            return Err(SolverError::MalformedFeedback(format!(
                "{} strikes + {} balls exceeds code length {code_length}",
                self.strikes, self.balls
            )));
        }
        Ok(self)
    }

    /// Calculate the feedback when `guess` is played against `reference`
    ///
    /// Multiplicity-aware, so it is correct whether or not duplicate digits
    /// are allowed.
    ///
    /// # Algorithm
    /// 1. Count strikes position by position
    /// 2. Every digit value is shared min(guess copies, reference copies) times;
    ///    the shared digits that are not strikes are balls
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::parse("1122").unwrap();
    /// let secret = Code::parse("1213").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// // 1 in place; one leftover 1 and one 2 match elsewhere
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the codes have different lengths
    #[must_use]
    pub fn calculate(guess: &Code, reference: &Code) -> Self {
        debug_assert_eq!(guess.len(), reference.len(), "code lengths differ");

        let strikes = guess
            .digits()
            .iter()
            .zip(reference.digits())
            .filter(|(g, r)| g == r)
            .count() as u8;

        // A strike is also a shared digit, so it is never below `strikes`
        let shared: u8 = guess
            .digit_counts()
            .iter()
            .zip(&reference.digit_counts())
            .map(|(&g, &r)| g.min(r))
            .sum();

        Self {
            strikes,
            balls: shared - strikes,
        }
    }

    /// Parse feedback typed by a person
    ///
    /// Accepts:
    /// - two digits: `"12"` = 1 strike, 2 balls
    /// - tagged counts in either order: `"1s2b"`, `"2B 1S"`, `"3s"`, `"out"` (0, 0)
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("12"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("2b1s"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("out"), Some(Feedback::new(0, 0)));
    /// assert_eq!(Feedback::parse("1x"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if cleaned == "out" {
            return Some(Self::new(0, 0));
        }

        let chars: Vec<char> = cleaned.chars().collect();
        if let [s, b] = chars.as_slice()
            && let (Some(s), Some(b)) = (s.to_digit(10), b.to_digit(10))
        {
            return Some(Self::new(s as u8, b as u8));
        }

        let mut strikes = None;
        let mut balls = None;
        let mut number = String::new();
        for ch in chars {
            match ch {
                '0'..='9' => number.push(ch),
                's' | 'b' => {
                    let value: u8 = number.parse().ok()?;
                    number.clear();
                    let slot = if ch == 's' { &mut strikes } else { &mut balls };
                    if slot.replace(value).is_some() {
                        return None;
                    }
                }
                _ => return None,
            }
        }

        if !number.is_empty() || (strikes.is_none() && balls.is_none()) {
            return None;
        }

        Some(Self::new(strikes.unwrap_or(0), balls.unwrap_or(0)))
    }

    /// Short label like `"1S 2B"`, or `"OUT"` when nothing matched
    #[must_use]
    pub fn label(self) -> String {
        if self.strikes == 0 && self.balls == 0 {
            "OUT".to_string()
        } else {
            format!("{}S {}B", self.strikes, self.balls)
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.strikes, self.balls)
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || SolverError::MalformedFeedback(format!("cannot parse '{s}'"));
        Self::parse(s).ok_or_else(error)
    }
}

/// Compute the feedback signature of `guess` against `reference`
///
/// Exposed on its own so a defending player can judge an opposing guess
/// without a session.
#[inline]
#[must_use]
pub fn compute_feedback(guess: &Code, reference: &Code) -> Feedback {
    Feedback::calculate(guess, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn feedback_self_is_solved() {
        for text in ["1234", "0000", "9871", "1122", "5"] {
            let c = code(text);
            let feedback = Feedback::calculate(&c, &c);
            assert_eq!(feedback, Feedback::solved(c.len()));
            assert!(feedback.is_solved(c.len()));
        }
    }

    #[test]
    fn feedback_all_out() {
        let feedback = Feedback::calculate(&code("1234"), &code("5678"));
        assert_eq!(feedback, Feedback::new(0, 0));
        assert_eq!(feedback.label(), "OUT");
    }

    #[test]
    fn feedback_all_balls() {
        let feedback = Feedback::calculate(&code("1234"), &code("2143"));
        assert_eq!(feedback, Feedback::new(0, 4));
    }

    #[test]
    fn feedback_mixed() {
        // 1 in place; 3 and 4 present elsewhere
        let feedback = Feedback::calculate(&code("1234"), &code("1340"));
        assert_eq!(feedback, Feedback::new(1, 2));
    }

    #[test]
    fn feedback_duplicates_bounded_by_reference_copies() {
        // Guess has four 1s, secret has one: only one match total
        let feedback = Feedback::calculate(&code("1111"), &code("2134"));
        assert_eq!(feedback, Feedback::new(1, 0));

        let feedback = Feedback::calculate(&code("1111"), &code("2341"));
        assert_eq!(feedback, Feedback::new(1, 0));

        // Strike consumes the copy, leaving nothing for balls
        let feedback = Feedback::calculate(&code("1120"), &code("1345"));
        assert_eq!(feedback, Feedback::new(1, 0));
    }

    #[test]
    fn feedback_duplicates_in_both() {
        let feedback = Feedback::calculate(&code("1122"), &code("2211"));
        assert_eq!(feedback, Feedback::new(0, 4));

        let feedback = Feedback::calculate(&code("1122"), &code("1213"));
        assert_eq!(feedback, Feedback::new(1, 2));
    }

    /// Strikes first, then each guess digit claims one unused reference digit
    fn claim_digits(guess: &Code, reference: &Code) -> Feedback {
        let pairs: Vec<(u8, u8)> = guess
            .digits()
            .iter()
            .copied()
            .zip(reference.digits().iter().copied())
            .collect();
        let strikes = pairs.iter().filter(|(g, r)| g == r).count();

        let mut unclaimed: Vec<u8> = pairs
            .iter()
            .filter(|(g, r)| g != r)
            .map(|&(_, r)| r)
            .collect();
        let mut balls = 0;
        for &(g, r) in &pairs {
            if g == r {
                continue;
            }
            if let Some(slot) = unclaimed.iter().position(|&d| d == g) {
                unclaimed.swap_remove(slot);
                balls += 1;
            }
        }

        Feedback::new(strikes as u8, balls)
    }

    #[test]
    fn feedback_matches_digit_claiming() {
        let config = crate::core::Configuration::new(3, true, true).unwrap();
        let space = crate::space::generate(config);

        for guess in space.iter().step_by(7) {
            for reference in space.iter().step_by(11) {
                assert_eq!(
                    Feedback::calculate(guess, reference),
                    claim_digits(guess, reference),
                    "{guess} vs {reference}"
                );
            }
        }
    }

    #[test]
    fn feedback_is_symmetric() {
        let codes = ["1234", "1122", "2211", "0001", "1000", "9099", "4321"];
        for a in codes {
            for b in codes {
                let ab = Feedback::calculate(&code(a), &code(b));
                let ba = Feedback::calculate(&code(b), &code(a));
                assert_eq!(ab, ba, "{a} vs {b}");
                assert!(usize::from(ab.strikes() + ab.balls()) <= 4);
            }
        }
    }

    #[test]
    fn feedback_index_is_dense_and_unique() {
        let mut seen = vec![false; Feedback::index_count(4)];
        for s in 0..=4u8 {
            for b in 0..=(4 - s) {
                let index = Feedback::new(s, b).index(4);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
    }

    #[test]
    fn feedback_validate() {
        assert!(Feedback::new(2, 2).validate(4).is_ok());
        assert!(Feedback::new(4, 0).validate(4).is_ok());
        assert!(matches!(
            Feedback::new(3, 2).validate(4),
            Err(SolverError::MalformedFeedback(_))
        ));
    }

    #[test]
    fn feedback_parse_valid() {
        assert_eq!(Feedback::parse("11"), Some(Feedback::new(1, 1)));
        assert_eq!(Feedback::parse("4 0"), Some(Feedback::new(4, 0)));
        assert_eq!(Feedback::parse("1s2b"), Some(Feedback::new(1, 2)));
        assert_eq!(Feedback::parse("2B 1S"), Some(Feedback::new(1, 2)));
        assert_eq!(Feedback::parse("3s"), Some(Feedback::new(3, 0)));
        assert_eq!(Feedback::parse("2b"), Some(Feedback::new(0, 2)));
        assert_eq!(Feedback::parse("OUT"), Some(Feedback::new(0, 0)));
    }

    #[test]
    fn feedback_parse_invalid() {
        assert_eq!(Feedback::parse(""), None);
        assert_eq!(Feedback::parse("1"), None);
        assert_eq!(Feedback::parse("123"), None);
        assert_eq!(Feedback::parse("1s1s"), None);
        assert_eq!(Feedback::parse("s"), None);
        assert_eq!(Feedback::parse("1x"), None);
        assert!("abc".parse::<Feedback>().is_err());
    }

    #[test]
    fn compute_feedback_matches_calculate() {
        let a = code("5831");
        let b = code("5318");
        assert_eq!(compute_feedback(&a, &b), Feedback::calculate(&a, &b));
        assert_eq!(compute_feedback(&a, &b), Feedback::new(1, 3));
    }
}
