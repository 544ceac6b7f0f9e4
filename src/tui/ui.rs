//! UI rendering using ratatui
//!
//! Supports two screens:
//! - Setup: team and category selection
//! - Game: ready, playing, paused and finished views of the game state

use crate::app::{AppCoordinator, Screen, SetupForm, SetupRow};
use crate::game::catalog::{self, TeamColor};
use crate::game::{GameState, GameStatus, RoundSummary};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Setup(form) => render_setup(frame, form),
        Screen::Game(state) => render_game(frame, state),
    }
}

/// Render the setup screen
fn render_setup(frame: &mut Frame, form: &SetupForm) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Limits
            Constraint::Min(12),    // Rows
            Constraint::Length(2),  // Status
            Constraint::Length(2),  // Footer
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new("QuickFire - Describe, Guess, Win!")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout[0]);

    let limits = Paragraph::new(format!(
        "{} rounds | {}s per round | {} words per round",
        form.limits.total_rounds, form.limits.seconds_per_round, form.limits.words_per_round
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(limits, layout[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);

    let rows = SetupForm::rows();
    let (team_rows, category_rows) = rows.split_at(catalog::teams().len());

    let team_items = setup_items(form, team_rows, 0);
    let teams = List::new(team_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Teams (pick 2+)"),
    );
    frame.render_widget(teams, columns[0]);

    let category_items = setup_items(form, category_rows, team_rows.len());
    let category_title = if form.categories.is_empty() {
        "Categories (all)".to_string()
    } else {
        format!("Categories ({})", form.categories.join(", "))
    };
    let categories = List::new(category_items)
        .block(Block::default().borders(Borders::ALL).title(category_title));
    frame.render_widget(categories, columns[1]);

    let (status_text, status_style) = match &form.error {
        Some(error) => (error.clone(), Style::default().fg(Color::Red)),
        None if form.can_start() => (
            "[ Press ENTER to continue ]".to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        None => (
            "Please select at least 2 teams".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let status = Paragraph::new(status_text)
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  Space Toggle  Enter Continue  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// List items for a block of setup rows starting at `offset`
fn setup_items(form: &SetupForm, rows: &[SetupRow], offset: usize) -> Vec<ListItem<'static>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let highlighted = offset + i == form.cursor;
            let mark = if form.is_selected(*row) { "[x]" } else { "[ ]" };
            let prefix = if highlighted { "> " } else { "  " };
            let (label, color) = match row {
                SetupRow::Team(team) => (team.name.to_string(), team_color(team.color)),
                SetupRow::Category(category) => (
                    format!("{} - {}", category.name, category.description),
                    Color::White,
                ),
            };
            let style = if highlighted {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(color)
            };
            ListItem::new(format!("{}{} {}", prefix, mark, label)).style(style)
        })
        .collect()
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, state: &GameState) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with round, team, timer
            Constraint::Length(1), // Timer bar
            Constraint::Min(0),    // Main content area
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], state);
    render_timer_bar(frame, layout[1], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Main area
            Constraint::Length(26), // Scoreboard
        ])
        .split(layout[2]);

    match state.status() {
        GameStatus::Finished => render_results(frame, columns[0], state),
        GameStatus::Playing | GameStatus::Paused => render_card(frame, columns[0], state),
        GameStatus::Ready | GameStatus::Setup => render_review(frame, columns[0], state),
    }
    render_scoreboard(frame, columns[1], state);

    let footer = Paragraph::new(footer_text(state.status()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the header: logo, round and team, timer
fn render_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(20),    // Round and team
            Constraint::Length(10), // Timer
        ])
        .split(inner);

    let logo = Paragraph::new("QuickFire")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let round = state.current_round().min(state.total_rounds());
    let team = state.current_team().unwrap_or_default();
    let turn = Paragraph::new(format!(
        "Round {}/{}  |  {}",
        round,
        state.total_rounds(),
        catalog::team_name(team)
    ))
    .style(Style::default().fg(current_team_color(state)).bold())
    .alignment(Alignment::Center);
    frame.render_widget(turn, header_layout[1]);

    let timer = Paragraph::new(format_timer(state.remaining_secs()))
        .style(Style::default().fg(timer_color(state.time_fraction())).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

/// Render the countdown bar under the header
fn render_timer_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let fraction = state.time_fraction();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(timer_color(fraction)))
        .ratio(fraction)
        .label("");
    frame.render_widget(gauge, area);
}

/// Render the current word card (playing or paused)
fn render_card(frame: &mut Frame, area: Rect, state: &GameState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Word card
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Round tally
            Constraint::Min(0),    // Remaining space
        ])
        .split(area);

    let category = state
        .current_word()
        .map(|w| w.category)
        .or(state.round_category())
        .unwrap_or("All categories");
    let category = Paragraph::new(category)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(category, layout[0]);

    let (text, style) = match (state.status(), state.current_word()) {
        (GameStatus::Paused, _) => ("PAUSED".to_string(), Style::default().fg(Color::Yellow).bold()),
        (_, _) if state.is_time_up() => (
            "TIME'S UP!".to_string(),
            Style::default().fg(Color::Red).bold(),
        ),
        (_, Some(word)) => (
            word.word.to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        ),
        (_, None) => (
            "No more words - press E to end the round".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let card = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(current_team_color(state))),
        );
    frame.render_widget(card, layout[2]);

    let tally = Paragraph::new(format!(
        "Correct: {}   Skipped: {}   Word {}/{}",
        state.correct_words().len(),
        state.skipped_words().len(),
        (state.words_resolved() + 1).min(state.words().len()),
        state.words().len()
    ))
    .style(Style::default().fg(Color::Magenta))
    .alignment(Alignment::Center);
    frame.render_widget(tally, layout[4]);
}

/// Render the between-rounds view: whose turn is next and the last round's words
fn render_review(frame: &mut Frame, area: Rect, state: &GameState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Next team
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Last round
        ])
        .split(area);

    let team = catalog::team_name(state.current_team().unwrap_or_default());
    let next = Paragraph::new(format!("{}'s turn - press ENTER to start", team))
        .style(Style::default().fg(current_team_color(state)).bold())
        .alignment(Alignment::Center);
    frame.render_widget(next, layout[0]);

    if let Some(summary) = state.last_round() {
        render_last_round(frame, layout[2], summary);
    }
}

/// Render the correct and skipped words of the round that just ended
fn render_last_round(frame: &mut Frame, area: Rect, summary: &RoundSummary) {
    let mut lines = vec![
        Line::from(format!(
            "{} got {} correct in round {}",
            catalog::team_name(&summary.team),
            summary.points,
            summary.round
        ))
        .style(Style::default().bold()),
        Line::from(""),
    ];

    if !summary.correct.is_empty() {
        lines.push(Line::from("Correct words:").style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(summary.correct.join(", ")).style(Style::default().fg(Color::Green)));
        lines.push(Line::from(""));
    }
    if !summary.skipped.is_empty() {
        lines.push(Line::from("Skipped words:").style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(summary.skipped.join(", ")).style(Style::default().fg(Color::White)));
    }

    let review = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Last Round"),
        );
    frame.render_widget(review, area);
}

/// Render the game-over announcement
fn render_results(frame: &mut Frame, area: Rect, state: &GameState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Winner(s)
            Constraint::Length(1), // Points
            Constraint::Min(0),    // Remaining space
        ])
        .split(area);

    let title = Paragraph::new("GAME OVER!")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let winners = state.winners();
    let names: Vec<&str> = winners.iter().map(|id| catalog::team_name(id)).collect();
    let top = winners.first().map(|id| state.score(id)).unwrap_or(0);

    let (headline, points) = match names.as_slice() {
        [] => ("No winner".to_string(), String::new()),
        [single] => (format!("{} Wins!", single), format!("with {} points", top)),
        many => (
            format!("It's a Tie! {}", many.join(" & ")),
            format!("with {} points each", top),
        ),
    };
    let color = winners
        .first()
        .and_then(|id| catalog::team(id))
        .map(|t| team_color(t.color))
        .unwrap_or(Color::Yellow);

    let headline = Paragraph::new(headline)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(headline, layout[2]);

    let points = Paragraph::new(points)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(points, layout[3]);
}

/// Render the live scoreboard (right panel)
fn render_scoreboard(frame: &mut Frame, area: Rect, state: &GameState) {
    let current = state.current_team();
    let items: Vec<ListItem> = state
        .standings()
        .into_iter()
        .enumerate()
        .map(|(i, (team, score))| {
            let prefix = match i {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            let color = catalog::team(team)
                .map(|t| team_color(t.color))
                .unwrap_or(Color::White);
            let style = if Some(team) == current && state.status() != GameStatus::Finished {
                Style::default().fg(color).bold()
            } else {
                Style::default().fg(color)
            };
            ListItem::new(format!("{} {} - {}", prefix, catalog::team_name(team), score)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Scoreboard"),
    );
    frame.render_widget(list, area);
}

/// Key help for the current phase
fn footer_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Setup | GameStatus::Ready => "Enter Start Round  R Reset  Esc Quit",
        GameStatus::Playing => "Space/C Correct  S Skip  P Pause  E End Round  R Reset  Esc Quit",
        GameStatus::Paused => "P Resume  E End Round  R Reset  Esc Quit",
        GameStatus::Finished => "Enter New Game  Esc Quit",
    }
}

/// Terminal color for a roster team
fn team_color(color: TeamColor) -> Color {
    match color {
        TeamColor::Red => Color::Red,
        TeamColor::Blue => Color::Blue,
        TeamColor::Green => Color::Green,
        TeamColor::Yellow => Color::Yellow,
        TeamColor::Purple => Color::Magenta,
    }
}

fn current_team_color(state: &GameState) -> Color {
    state
        .current_team()
        .and_then(catalog::team)
        .map(|t| team_color(t.color))
        .unwrap_or(Color::White)
}

/// Timer color: green with most time left, then yellow, red in the last 30%
fn timer_color(fraction: f64) -> Color {
    if fraction > 0.6 {
        Color::Green
    } else if fraction > 0.3 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Format the timer display
fn format_timer(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
