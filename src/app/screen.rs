//! Application screen state management
//!
//! Handles transitions between the two application screens:
//! - Setup (team and category selection)
//! - Game (ready, playing, paused, finished)
//!
//! The coordinator is the only caller of the round state machine. It maps
//! user actions to state operations and drives the round clock.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::clock::RoundClock;
use super::setup::SetupForm;
use crate::game::{Deck, GameConfig, GameState, GameStatus};

/// User intent, already decoded from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    /// Space: toggle a setup row, or mark the word correct in play
    Toggle,
    /// Enter: continue from setup, start a round, or leave a finished game
    Confirm,
    Correct,
    Skip,
    PauseResume,
    EndRound,
    Reset,
    Quit,
}

/// The current application screen
#[derive(Debug, Clone)]
pub enum Screen {
    /// Choosing teams and categories
    Setup(SetupForm),
    /// A game in progress or just finished
    Game(GameState),
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    deck: Deck,
    clock: RoundClock,
    /// Settings a reset returns to
    defaults: GameConfig,
}

impl AppCoordinator {
    /// Create a coordinator on the setup screen
    pub fn new(defaults: GameConfig, deck: Deck) -> Self {
        Self {
            screen: Screen::Setup(SetupForm::new(defaults.clone())),
            should_quit: false,
            deck,
            clock: RoundClock::new(),
            defaults,
        }
    }

    /// The running game, if any
    pub fn game(&self) -> Option<&GameState> {
        match &self.screen {
            Screen::Game(state) => Some(state),
            Screen::Setup(_) => None,
        }
    }

    /// Whether the round clock is currently measuring time
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Apply a user action at time `now`
    pub fn handle(&mut self, action: Action, now: Instant) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        if self.game().is_some() {
            self.handle_game(action, now);
            return;
        }
        let Screen::Setup(form) = &mut self.screen else {
            return;
        };
        match action {
            Action::Up => form.up(),
            Action::Down => form.down(),
            Action::Toggle => form.toggle(),
            _ => {}
        }
        if action == Action::Confirm {
            self.submit_setup();
        }
    }

    fn submit_setup(&mut self) {
        let Screen::Setup(form) = &mut self.screen else {
            return;
        };
        match form.submit() {
            Ok(config) => {
                info!(
                    teams = ?config.teams,
                    rounds = config.total_rounds,
                    seconds = config.seconds_per_round,
                    words = config.words_per_round,
                    categories = ?config.categories,
                    "game configured"
                );
                self.screen = Screen::Game(GameState::new(config).begin());
            }
            Err(e) => warn!(error = %e, "setup refused"),
        }
    }

    fn handle_game(&mut self, action: Action, now: Instant) {
        let finished = self.game().map(GameState::status) == Some(GameStatus::Finished);
        if action == Action::Reset || (action == Action::Confirm && finished) {
            self.reset();
            return;
        }

        // Settle time already spent before the state changes hands. A key
        // aimed at a round that just expired is dropped so the review shows.
        let seen = self.game().map(GameState::status);
        self.poll_clock(now);
        if self.game().map(GameState::status) != seen {
            return;
        }

        let Screen::Game(state) = &mut self.screen else {
            return;
        };
        let current = std::mem::take(state);
        let before = current.status();

        let next = match action {
            Action::Confirm => {
                let next = current.start_round(&mut self.deck);
                if next.status() == GameStatus::Playing {
                    info!(
                        team = next.current_team().unwrap_or_default(),
                        round = next.current_round(),
                        category = next.round_category().unwrap_or("all"),
                        words = next.words().len(),
                        "round started"
                    );
                }
                next
            }
            Action::Toggle | Action::Correct => {
                let next = current.mark_correct();
                debug!(correct = next.correct_words().len(), "word correct");
                next
            }
            Action::Skip => {
                let next = current.skip_word();
                debug!(skipped = next.skipped_words().len(), "word skipped");
                next
            }
            Action::PauseResume => match before {
                GameStatus::Playing => {
                    info!(remaining_secs = current.remaining_secs(), "paused");
                    current.pause()
                }
                GameStatus::Paused => {
                    info!("resumed");
                    current.resume()
                }
                _ => current,
            },
            Action::EndRound => match before {
                GameStatus::Playing | GameStatus::Paused => Self::finish_round(current, false),
                _ => current,
            },
            _ => current,
        };

        *state = next;
        self.sync_clock(now);
    }

    /// Feed real elapsed time into the game; end the round when time is up.
    ///
    /// Call regularly from the event loop.
    pub fn poll_clock(&mut self, now: Instant) {
        let Screen::Game(state) = &mut self.screen else {
            self.clock.stop();
            return;
        };

        if state.status() == GameStatus::Playing {
            if let Some(elapsed) = self.clock.elapsed(now) {
                *state = std::mem::take(state).tick(elapsed);
            }
            if state.is_time_up() {
                *state = Self::finish_round(std::mem::take(state), true);
            }
        }
        self.sync_clock(now);
    }

    /// Keep the clock running exactly while the game is playing
    fn sync_clock(&mut self, now: Instant) {
        let playing = matches!(&self.screen, Screen::Game(s) if s.status() == GameStatus::Playing);
        match (playing, self.clock.is_running()) {
            (true, false) => self.clock.start(now),
            (false, true) => self.clock.stop(),
            _ => {}
        }
    }

    fn finish_round(state: GameState, time_up: bool) -> GameState {
        let next = state.end_round();
        if let Some(summary) = next.last_round() {
            info!(
                team = %summary.team,
                round = summary.round,
                points = summary.points,
                skipped = summary.skipped.len(),
                time_up,
                "round ended"
            );
        }
        if next.status() == GameStatus::Finished {
            let standings = serde_json::to_string(&next.standings()).unwrap_or_default();
            info!(
                winners = ?next.winners(),
                standings = %standings,
                "game finished"
            );
        }
        next
    }

    /// Drop the game and go back to setup with the starting settings
    fn reset(&mut self) {
        if let Screen::Game(state) = &self.screen {
            info!(status = state.status().label(), "game reset");
        }
        self.clock.stop();
        self.screen = Screen::Setup(SetupForm::new(self.defaults.clone()));
    }
}
