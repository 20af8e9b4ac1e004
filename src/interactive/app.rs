//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{SelectorKind, Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Games solved in more guesses than this share the last distribution bucket
pub const DISTRIBUTION_BUCKETS: usize = 10;

/// Application state
pub struct App {
    pub session: Session<SelectorKind>,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualCode,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub code: Code,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    /// Won games plus those abandoned or failed before a new game started
    pub total_games: usize,
    pub games_won: usize,
    /// Index `k` counts games won in `k` guesses; the last index collects the rest
    pub guess_distribution: [usize; DISTRIBUTION_BUCKETS + 1],
}

impl App {
    #[must_use]
    pub fn new(session: Session<SelectorKind>) -> Self {
        let mut app = Self {
            session,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_code: String::new(),
        };

        app.add_message(
            &format!(
                "Welcome! Playing {} with the {} strategy.",
                app.session.config(),
                app.session.selector().name()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback as strikes then balls (e.g. '12' or '1s2b')",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.session.config().code_length()
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.next_guess() {
            Ok(code) => {
                let metrics = calculate_metrics(&code, self.session.candidates());

                self.current_guess = Some(GuessInfo {
                    code,
                    entropy: metrics.entropy,
                    expected_remaining: metrics.expected_remaining,
                    max_partition: metrics.max_partition,
                });
            }
            Err(e) => {
                self.current_guess = None;
                self.add_message(&format!("No suggestion: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Some(feedback) = Feedback::parse(input) else {
            self.add_message(
                "Invalid feedback! Use '12', '1s2b' or 'out'",
                MessageStyle::Error,
            );
            return;
        };
        let Some(guess_info) = self.current_guess.clone() else {
            self.add_message("No guess to give feedback on", MessageStyle::Error);
            return;
        };

        let candidates_before = self.session.candidate_count();
        let state = match self.session.apply_feedback(guess_info.code, feedback) {
            Ok(state) => state,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        let candidates_after = self.session.candidate_count();

        self.history.push(HistoryEntry {
            guess: guess_info.code,
            feedback,
            entropy: guess_info.entropy,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        match state {
            SessionState::Solved { turns } => {
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                self.stats.guess_distribution[turns.min(DISTRIBUTION_BUCKETS)] += 1;

                self.input_mode = InputMode::WinCelebration;
                self.current_guess = None;

                let celebration = match turns {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 SOLVED in {turns} guesses! 🔥"),
                    _ => format!("🎉 Got it in {turns} guesses! 🎉"),
                };

                self.add_message(&celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for a new game or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            SessionState::Contradiction => {
                self.current_guess = None;
                self.add_message(
                    "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            SessionState::Exhausted => {
                self.current_guess = None;
                self.add_message(
                    "Out of turns. Press 'n' for a new game.",
                    MessageStyle::Error,
                );
            }
            SessionState::Searching => {
                self.compute_suggestion();
                self.add_message(
                    &format!("{candidates_after} candidates remaining"),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        // Won games were counted when solved
        if !self.history.is_empty() && !self.session.state().is_solved() {
            self.stats.total_games += 1;
        }

        self.session.reset();
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! I'll suggest the first guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo().is_some() {
            self.history.pop();
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidate_count()
    }

    pub fn use_manual_code(&mut self) {
        let code = match Code::parse(&self.manual_code) {
            Ok(code) if self.session.config().admits(&code) => code,
            Ok(code) => {
                self.add_message(
                    &format!("{code} is not allowed under {}", self.session.config()),
                    MessageStyle::Error,
                );
                return;
            }
            Err(e) => {
                self.add_message(&format!("Invalid code: {e}"), MessageStyle::Error);
                return;
            }
        };

        let metrics = calculate_metrics(&code, self.session.candidates());

        // Compare with suggested guess if available
        if let Some(ref suggested) = self.current_guess
            && metrics.entropy < suggested.entropy
        {
            self.add_message(
                &format!(
                    "Note: Suggested {} had {:.2} bits ({:.2} more)",
                    suggested.code,
                    suggested.entropy,
                    suggested.entropy - metrics.entropy
                ),
                MessageStyle::Info,
            );
        }

        self.current_guess = Some(GuessInfo {
            code,
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
            max_partition: metrics.max_partition,
        });

        self.add_message(
            &format!(
                "Using: {code} (entropy: {:.2} bits, {:.1}x reduction)",
                metrics.entropy,
                metrics.entropy.exp2()
            ),
            MessageStyle::Success,
        );

        self.input_mode = InputMode::Feedback;
        self.manual_code.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Tab => {
                        if app.session.state() == SessionState::Searching {
                            app.input_mode = InputMode::ManualCode;
                            app.add_message(
                                &format!("Enter your own {}-digit guess", app.code_length()),
                                MessageStyle::Info,
                            );
                        }
                    }
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualCode => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                        app.add_message("Cancelled manual guess entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_code.len() < app.code_length() && c.is_ascii_digit() {
                            app.manual_code.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_code.pop();
                    }
                    KeyCode::Enter => {
                        if app.manual_code.len() == app.code_length() {
                            app.use_manual_code();
                        } else {
                            let digits = app.code_length();
                            let message = format!("Guess must be exactly {digits} digits!");
                            app.add_message(&message, MessageStyle::Error);
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
