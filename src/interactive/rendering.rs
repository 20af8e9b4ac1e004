//! TUI rendering with ratatui
//!
//! Visualizations for the strike/ball solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{entropy_bar, feedback_label};
use crate::solver::entropy::calculate_entropy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidate sets this small are listed individually
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("⚾ STRIKE/BALL SOLVER - {}", app.session.config());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.code.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (turn {})", app.session.turn()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!(
            "Entropy:   [{}] {:.3} bits",
            entropy_bar(guess.entropy, app.code_length(), 18),
            guess.entropy
        )),
        Line::from(format!("Info gain: {:.1}x reduction", guess.entropy.exp2())),
        Line::from(format!(
            "Expected:  {:.1} candidates remain",
            guess.expected_remaining
        )),
        Line::from(format!("Worst:     {} candidates", guess.max_partition)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates remain",
            Style::default().fg(Color::Red),
        ))]
    } else if candidates.len() <= LISTED_CANDIDATES {
        let mut lines = vec![Line::from("Remaining:")];

        for candidate in candidates {
            let entropy = calculate_entropy(candidate, candidates);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(candidate.to_string(), Style::default().fg(Color::Green)),
                Span::styled(format!(" {entropy:.2}b"), Style::default().fg(Color::Cyan)),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} {:<6} [{:.1} bits] {} → {}",
                app.history.len() - i,
                entry.guess,
                feedback_label(entry.feedback, app.code_length()),
                entry.entropy,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.session.config().space_size() as f64).log2();
    let remaining = app.candidates_count();
    // Bits actually gained, measured by how far the set has shrunk
    let bits_gained = if remaining > 0 {
        total_bits - (remaining as f64).log2()
    } else {
        total_bits
    };
    let ratio = bits_gained / total_bits.max(f64::EPSILON);
    let progress_pct = (ratio * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Feedback (strikes then balls: 12, 1s2b, out) | TAB: manual guess ".to_string(),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualCode => (
            format!(
                " Enter Guess to Try ({} digits) | ESC to cancel ",
                app.code_length()
            ),
            app.manual_code.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Strategy: {}", app.session.selector().name());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let distribution = &app.stats.guess_distribution;
    let solved: usize = distribution.iter().enumerate().map(|(k, n)| k * n).sum();
    let stats_text = format!(
        "Games: {} | Avg: {:.2}",
        app.stats.total_games,
        if app.stats.games_won > 0 {
            solved as f64 / app.stats.games_won as f64
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let state_text = format!("State: {}", app.session.state());
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[2]);

    let help_text = if app.candidates_count() == 0 {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Guess"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
