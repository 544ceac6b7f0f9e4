//! QuickFire - team word-guessing party game
//!
//! Describe, guess, win.

mod app;
mod config;
mod game;
mod logging;
mod tui;

use anyhow::Context;
use app::{Action, AppCoordinator, Screen};
use clap::Parser;
use config::Cli;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use game::Deck;
use std::time::{Duration, Instant};
use tui::Tui;

/// How often the round clock is polled
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(seed = ?cli.seed, "starting quickfire");

    let mut coordinator = AppCoordinator::new(config, Deck::catalog(cli.seed));

    // Initialize terminal
    let mut terminal = Tui::new().context("failed to open terminal")?;
    terminal.enter().context("failed to enter raw mode")?;

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let in_setup = matches!(coordinator.screen, Screen::Setup(_));
                    if let Some(action) = key_action(key, in_setup) {
                        coordinator.handle(action, Instant::now());
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            coordinator.poll_clock(Instant::now());
            last_tick = Instant::now();
        }

        if coordinator.should_quit {
            break;
        }
    }

    terminal.exit()?;
    tracing::info!("quickfire exited");
    Ok(())
}

/// Map a key press to an action
fn key_action(key: KeyEvent, in_setup: bool) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char(c) if !in_setup => match c.to_ascii_lowercase() {
            'c' => Action::Correct,
            's' => Action::Skip,
            'p' => Action::PauseResume,
            'e' => Action::EndRound,
            'r' => Action::Reset,
            'q' => Action::Quit,
            _ => return None,
        },
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
