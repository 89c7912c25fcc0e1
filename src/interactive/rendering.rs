//! TUI rendering with ratatui
//!
//! Board, candidate and budget visualizations for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::GameStatus;
use crate::output::formatters::format_guessed;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed when peeking; the rest are summarized
const PEEK_LIMIT: usize = 40;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Interactive Mode")
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
            Constraint::Length(6),      // Board
            Constraint::Percentage(50), // Candidates
            Constraint::Min(5),         // History
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app
        .engine
        .pattern()
        .map_or_else(|_| "(no word)".to_string(), ToString::to_string);

    let content = vec![
        Line::from(vec![
            Span::raw("Word:     "),
            Span::styled(
                pattern,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Length:   {}", app.config.word_length)),
        Line::from(format!("Guessed:  {}", format_guessed(app.engine.guessed()))),
        Line::from(format!("Misses:   {}", app.engine.wrong_guesses())),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.engine.candidate_count();

    let content = if count == 0 {
        vec![Line::from("No candidates")]
    } else if app.peek {
        let listed: Vec<&str> = app.engine.candidates().take(PEEK_LIMIT).collect();
        let mut lines = vec![Line::from(listed.join(" "))];
        if count > PEEK_LIMIT {
            lines.push(Line::styled(
                format!("... and {} more", count - PEEK_LIMIT),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines
    } else {
        vec![
            Line::from(format!("{count} words still fit")),
            Line::styled(
                "Press TAB to peek",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            let (verdict, color) = if entry.occurrences == 0 {
                ("miss".to_string(), Color::Red)
            } else {
                (format!("{} found", entry.occurrences), Color::Green)
            };
            let content = Line::from(vec![
                Span::raw(format!("{}: {} ", app.history.len() - i, entry.letter)),
                Span::styled(format!("{verdict:<8}"), Style::default().fg(color)),
                Span::raw(format!(
                    " {}  {} → {}",
                    entry.pattern, entry.candidates_before, entry.candidates_after
                )),
            ]);
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
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.engine.remaining();
    let max = app.engine.max_wrong();
    let percent = if max == 0 {
        0
    } else {
        u16::try_from(remaining * 100 / max).unwrap_or(100)
    };

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max}"));

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
    let (title, color) = match (app.input_mode, app.engine.status()) {
        (InputMode::GameOver, GameStatus::Won) => {
            (" 🎉 YOU WIN! | 'n' new game | 'q' quit ", Color::Green)
        }
        (InputMode::GameOver, _) => (" GAME OVER | 'n' new game | 'q' quit ", Color::Red),
        (InputMode::Guessing, _) => (" Type a letter to guess | TAB peek | ESC quit ", Color::Yellow),
    };

    let input = Paragraph::new("")
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
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let candidates_text = format!("Candidates: {}", app.engine.candidate_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let help = Paragraph::new("Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_count() {
        let words: Vec<String> = ["cat", "car", "cow"].iter().map(|w| (*w).to_string()).collect();
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();
        app.handle_guess('c');

        let text = screen(&app);
        assert!(text.contains("c - -"));
        assert!(text.contains("3 words still fit"));
        assert!(text.contains("5/5"));
    }

    #[test]
    fn renders_candidates_when_peeking() {
        let words: Vec<String> = ["cat", "car", "cow"].iter().map(|w| (*w).to_string()).collect();
        let mut app = App::new(&words, GameConfig::new(3, 5)).unwrap();
        app.toggle_peek();

        assert!(screen(&app).contains("car cat cow"));
    }
}
