//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as one pip per position: strikes `●`, balls `○`, misses `·`
#[must_use]
pub fn feedback_pips(feedback: Feedback, code_length: usize) -> String {
    let strikes = usize::from(feedback.strikes());
    let balls = usize::from(feedback.balls());
    let misses = code_length.saturating_sub(strikes + balls);

    format!(
        "{}{}{}",
        "●".repeat(strikes),
        "○".repeat(balls),
        "·".repeat(misses)
    )
}

/// Feedback as pips followed by its label, e.g. `●○○· 1S 2B`
#[must_use]
pub fn feedback_label(feedback: Feedback, code_length: usize) -> String {
    format!(
        "{} {}",
        feedback_pips(feedback, code_length),
        feedback.label()
    )
}

/// Feedback label colored by how much it revealed
#[must_use]
pub fn colored_feedback(feedback: Feedback, code_length: usize) -> ColoredString {
    let label = feedback_label(feedback, code_length);
    if feedback.is_solved(code_length) {
        label.bright_green().bold()
    } else if feedback.strikes() > 0 {
        label.green()
    } else if feedback.balls() > 0 {
        label.yellow()
    } else {
        label.bright_black()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a single guess could reveal
#[must_use]
pub fn entropy_bar(entropy: f64, code_length: usize, width: usize) -> String {
    let max_entropy = (Feedback::index_count(code_length) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Progress bar for long-running drivers
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_for_mixed_feedback() {
        assert_eq!(feedback_pips(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn pips_for_out() {
        assert_eq!(feedback_pips(Feedback::new(0, 0), 4), "····");
        assert_eq!(feedback_label(Feedback::new(0, 0), 3), "··· OUT");
    }

    #[test]
    fn pips_for_full_match() {
        assert_eq!(feedback_pips(Feedback::solved(4), 4), "●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_caps_at_width() {
        let bar = entropy_bar(100.0, 4, 8);
        assert_eq!(bar, "████████");
    }
}
