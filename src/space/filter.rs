//! Consistency filtering of candidate sets

use crate::core::{Code, Feedback};

/// Keep the candidates that would have produced `observed` against `guess`
///
/// Returns a new set in the original order; the input is never modified, so
/// it may be a shared cached space.
///
/// # Examples
/// ```
/// use strikeball_solver::core::{Code, Configuration, Feedback};
/// use strikeball_solver::space::{filter_candidates, generate};
///
/// let space = generate(Configuration::standard());
/// let guess = Code::parse("1234").unwrap();
///
/// let remaining = filter_candidates(&space, &guess, Feedback::new(4, 0));
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| Feedback::calculate(guess, candidate) == observed)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Configuration;
    use crate::space::generate;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn filter_keeps_only_consistent() {
        let space = generate(Configuration::standard());
        let guess = code("1234");
        let observed = Feedback::new(1, 2);

        let remaining = filter_candidates(&space, &guess, observed);

        assert!(!remaining.is_empty());
        assert!(remaining.len() < space.len());
        assert!(
            remaining
                .iter()
                .all(|c| Feedback::calculate(&guess, c) == observed)
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let space = generate(Configuration::new(4, true, false).unwrap());
        let guess = code("1123");
        let observed = Feedback::new(1, 1);

        let once = filter_candidates(&space, &guess, observed);
        let twice = filter_candidates(&once, &guess, observed);

        assert_eq!(once, twice);
    }

    #[test]
    fn filter_never_grows() {
        let space = generate(Configuration::standard());
        let secret = code("5831");
        let mut candidates = space.clone();

        for guess in ["1234", "5678", "9012"] {
            let guess = code(guess);
            let observed = Feedback::calculate(&guess, &secret);
            let next = filter_candidates(&candidates, &guess, observed);

            assert!(next.len() <= candidates.len());
            assert!(next.contains(&secret));
            candidates = next;
        }
    }

    #[test]
    fn filter_all_balls_leaves_derangements() {
        let space = generate(Configuration::standard());
        let remaining = filter_candidates(&space, &code("1234"), Feedback::new(0, 4));

        // The 9 derangements of 1234
        assert_eq!(remaining.len(), 9);
        assert!(remaining.contains(&code("2143")));
        assert!(!remaining.contains(&code("1234")));
    }

    #[test]
    fn filter_impossible_feedback_empties_set() {
        let space = generate(Configuration::standard());
        let remaining = filter_candidates(&space, &code("1234"), Feedback::new(3, 1));
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_preserves_order() {
        let space = generate(Configuration::new(3, false, true).unwrap());
        let remaining = filter_candidates(&space, &code("012"), Feedback::new(0, 0));
        assert!(remaining.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
