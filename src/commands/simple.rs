//! Simple console match mode
//!
//! Text-based game against a human opponent: the solver attacks the
//! opponent's secret while the user defends their own, one exchange per turn.

use crate::core::{Code, Feedback};
use crate::solver::{Selector, Session, SessionState};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Exchanges played before the match is declared over
pub const TURN_LIMIT: usize = 9;

/// What the user answered to one of the solver's attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackReply {
    /// Feedback from the opponent
    Feedback(Feedback),
    /// No feedback this turn
    Skip,
    Quit,
}

/// Parse the reply to an attack: `11`, `1s1b`, `s` to skip or `q` to quit
///
/// Returns `None` for input that is none of these or feedback impossible for
/// `code_length`.
#[must_use]
pub fn parse_attack_reply(input: &str, code_length: usize) -> Option<AttackReply> {
    match input.trim().to_ascii_lowercase().as_str() {
        "s" | "skip" => Some(AttackReply::Skip),
        "q" | "quit" | "exit" => Some(AttackReply::Quit),
        other => Feedback::parse(other)
            .and_then(|feedback| feedback.validate(code_length).ok())
            .map(AttackReply::Feedback),
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The solver found the opponent's secret on this turn
    Won(usize),
    /// The opponent found the user's secret on this turn
    Lost(usize),
    /// The feedback entered left no candidate
    Contradiction,
    /// Neither side finished within the turn limit
    OutOfTurns,
    Quit,
}

/// Run the simple console match on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a guess.
pub fn run_simple<S: Selector>(session: Session<S>) -> Result<MatchOutcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_match(session, &mut stdin.lock(), &mut stdout)
}

/// Play one match, reading from `input` and writing to `output`
///
/// # Errors
///
/// Returns an error on I/O failure, when input ends mid-match, or if the
/// solver cannot provide a guess.
pub fn play_match<S, R, W>(
    mut session: Session<S>,
    input: &mut R,
    output: &mut W,
) -> Result<MatchOutcome>
where
    S: Selector,
    R: BufRead,
    W: Write,
{
    let config = session.config();

    writeln!(output, "\n╔════════════════════════════════════════╗")?;
    writeln!(output, "║   Strike/Ball Solver - Console Match   ║")?;
    writeln!(output, "╚════════════════════════════════════════╝\n")?;
    writeln!(output, "Rules: {config}")?;
    writeln!(output, "Feedback: strikes then balls ('12' or '1s2b').")?;
    writeln!(output, "Enter 's' to skip an attack, 'q' to quit.\n")?;

    let secret = loop {
        let line = prompt(input, output, "Your secret (the opponent must find it)")?;
        match Code::parse(&line) {
            Ok(code) if config.admits(&code) => break code,
            Ok(code) => writeln!(output, "   [!] {code} is not allowed under {config}")?,
            Err(e) => writeln!(output, "   [!] {e}")?,
        }
    };

    let reply = prompt(input, output, "Do you attack first? (y/n)")?;
    let attack_first = reply.eq_ignore_ascii_case("y");

    for turn in 1..=TURN_LIMIT {
        writeln!(
            output,
            "\n--- [Turn {turn}] {} candidates remaining ---",
            session.candidate_count()
        )?;

        let outcome = if attack_first {
            match attack(&mut session, turn, input, output)? {
                Some(outcome) => Some(outcome),
                None => {
                    writeln!(output, "{}", "-".repeat(20))?;
                    defend(&secret, turn, input, output)?
                }
            }
        } else {
            match defend(&secret, turn, input, output)? {
                Some(outcome) => Some(outcome),
                None => {
                    writeln!(output, "{}", "-".repeat(20))?;
                    attack(&mut session, turn, input, output)?
                }
            }
        };

        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }

    let message = format!("💀 [GAME OVER] {TURN_LIMIT} turns played!");
    writeln!(output, "\n{}", message.red().bold())?;
    Ok(MatchOutcome::OutOfTurns)
}

/// The solver guesses and the user reports the opponent's feedback
fn attack<S, R, W>(
    session: &mut Session<S>,
    turn: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Option<MatchOutcome>>
where
    S: Selector,
    R: BufRead,
    W: Write,
{
    let n = session.config().code_length();
    let start = Instant::now();
    let guess = session.next_guess()?;
    writeln!(
        output,
        "▶ Suggested attack: {} (computed in {:.4}s)",
        guess.to_string().bright_yellow().bold(),
        start.elapsed().as_secs_f64()
    )?;

    loop {
        let line = prompt(input, output, "   Feedback (e.g. 11, s to skip)")?;
        match parse_attack_reply(&line, n) {
            Some(AttackReply::Quit) => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(Some(MatchOutcome::Quit));
            }
            Some(AttackReply::Skip) => return Ok(None),
            Some(AttackReply::Feedback(feedback)) if feedback.is_solved(n) => {
                let message = format!("🎉 Victory! Found the secret in {turn} turns.");
                writeln!(output, "\n{}", message.green().bold())?;
                return Ok(Some(MatchOutcome::Won(turn)));
            }
            Some(AttackReply::Feedback(feedback)) => {
                return match session.apply_feedback(guess, feedback)? {
                    SessionState::Contradiction => {
                        let message = "❌ Contradictory feedback: no candidates remain.";
                        writeln!(output, "\n{}", message.red().bold())?;
                        Ok(Some(MatchOutcome::Contradiction))
                    }
                    _ => Ok(None),
                };
            }
            None => writeln!(
                output,
                "   [!] Invalid input. Enter strikes and balls like '11' (at most {n} in total)."
            )?,
        }
    }
}

/// The user reports the opponent's guess and gets the feedback to give back
fn defend<R, W>(
    secret: &Code,
    turn: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Option<MatchOutcome>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt(input, output, "▷ Opponent's guess")?;
        if line.is_empty() {
            continue;
        }

        match Code::parse(&line) {
            Ok(guess) if guess.len() == secret.len() => {
                let feedback = Feedback::calculate(&guess, secret);
                writeln!(output, "   => Feedback: {}", feedback.label().bold())?;

                if feedback.is_solved(secret.len()) {
                    let message =
                        format!("💀 Defeat... the opponent found your secret in {turn} turns.");
                    writeln!(output, "\n{}", message.red().bold())?;
                    return Ok(Some(MatchOutcome::Lost(turn)));
                }
                return Ok(None);
            }
            _ => writeln!(output, "   [!] Enter a {}-digit code.", secret.len())?,
        }
    }
}

/// Get user input with a prompt
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input closed");
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Configuration;
    use crate::solver::EntropySelector;
    use std::io::Cursor;

    fn session() -> Session<EntropySelector> {
        let config = Configuration::standard();
        Session::new(config, EntropySelector::new(config))
    }

    fn play(script: &str) -> (Result<MatchOutcome>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = play_match(session(), &mut input, &mut output);
        (outcome, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn parse_attack_reply_forms() {
        assert_eq!(
            parse_attack_reply("12", 4),
            Some(AttackReply::Feedback(Feedback::new(1, 2)))
        );
        assert_eq!(
            parse_attack_reply(" 1s2b ", 4),
            Some(AttackReply::Feedback(Feedback::new(1, 2)))
        );
        assert_eq!(parse_attack_reply("S", 4), Some(AttackReply::Skip));
        assert_eq!(parse_attack_reply("q", 4), Some(AttackReply::Quit));
        assert_eq!(parse_attack_reply("32", 4), None);
        assert_eq!(parse_attack_reply("hello", 4), None);
    }

    #[test]
    fn solver_wins_when_opponent_reports_full_match() {
        // Secret, attack first, then a full match on the opening
        let (outcome, text) = play("5678\ny\n40\n");

        assert_eq!(outcome.unwrap(), MatchOutcome::Won(1));
        assert!(text.contains("1234"));
    }

    #[test]
    fn defender_loses_when_secret_is_found() {
        let (outcome, text) = play("5678\nn\n5678\n");

        assert_eq!(outcome.unwrap(), MatchOutcome::Lost(1));
        assert!(text.contains("4S"));
    }

    #[test]
    fn invalid_secret_is_asked_again() {
        // 0123 has a leading zero, 1123 repeats a digit
        let (outcome, text) = play("0123\n1123\n5678\ny\nq\n");

        assert_eq!(outcome.unwrap(), MatchOutcome::Quit);
        assert_eq!(text.matches("not allowed").count(), 2);
    }

    #[test]
    fn contradictory_feedback_ends_the_match() {
        // 3 strikes 1 ball is impossible without duplicates
        let (outcome, _) = play("5678\ny\n31\n");
        assert_eq!(outcome.unwrap(), MatchOutcome::Contradiction);
    }

    #[test]
    fn skipping_leaves_candidates_untouched() {
        let (outcome, text) = play("5678\ny\ns\n9012\nq\n");

        assert_eq!(outcome.unwrap(), MatchOutcome::Quit);
        assert_eq!(text.matches("4536 candidates remaining").count(), 2);
    }

    #[test]
    fn match_runs_out_of_turns() {
        let mut script = String::from("5678\nn\n");
        for _ in 0..TURN_LIMIT {
            script.push_str("9012\ns\n");
        }

        let (outcome, _) = play(&script);
        assert_eq!(outcome.unwrap(), MatchOutcome::OutOfTurns);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (outcome, _) = play("5678\n");
        assert!(outcome.is_err());
    }
}
