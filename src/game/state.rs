#![allow(dead_code)]
//! Round state machine
//!
//! A game is a single `GameState` value threaded through every operation.
//! Each operation consumes the current state and returns the next one; calls
//! that make no sense in the current phase hand the state back unchanged.
//! Nothing here reads the clock or does I/O: elapsed time arrives via `tick`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::catalog::WordItem;
use super::words::WordProvider;
use super::{GameConfig, MIN_TEAMS};

/// Phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Setup,
    Ready,
    Playing,
    Paused,
    Finished,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Setup => "Setup",
            GameStatus::Ready => "Ready",
            GameStatus::Playing => "Playing",
            GameStatus::Paused => "Paused",
            GameStatus::Finished => "Finished",
        }
    }
}

/// What a team achieved in the round that just ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub team: String,
    pub round: u32,
    pub correct: Vec<String>,
    pub skipped: Vec<String>,
    pub points: u32,
}

/// Full game snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    status: GameStatus,
    team_order: Vec<String>,
    current_team_index: usize,
    current_round: u32,
    total_rounds: u32,
    time_per_round: Duration,
    words_per_round: usize,
    remaining_time: Duration,
    words: Vec<WordItem>,
    current_word_index: usize,
    correct_words: Vec<String>,
    skipped_words: Vec<String>,
    team_scores: BTreeMap<String, u32>,
    selected_categories: Vec<String>,
    round_category: Option<String>,
    last_round: Option<RoundSummary>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Where the current word goes when it is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Correct,
    Skipped,
}

/// Keep the first occurrence of each value, in order.
fn dedup_in_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

impl GameState {
    /// Record a configuration as a new game in `Setup`.
    ///
    /// Duplicate team ids and categories are collapsed, keeping the first
    /// occurrence. No other validation happens here; see `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Self {
        let team_order = dedup_in_order(config.teams);
        let team_scores = team_order.iter().map(|t| (t.clone(), 0)).collect();
        let time_per_round = Duration::from_secs(u64::from(config.seconds_per_round));

        Self {
            status: GameStatus::Setup,
            team_order,
            current_team_index: 0,
            current_round: 1,
            total_rounds: config.total_rounds,
            time_per_round,
            words_per_round: config.words_per_round,
            remaining_time: time_per_round,
            words: Vec::new(),
            current_word_index: 0,
            correct_words: Vec::new(),
            skipped_words: Vec::new(),
            team_scores,
            selected_categories: dedup_in_order(config.categories),
            round_category: None,
            last_round: None,
        }
    }

    /// Leave `Setup` for `Ready` once at least two teams are playing.
    pub fn begin(mut self) -> Self {
        if self.status == GameStatus::Setup && self.team_order.len() >= MIN_TEAMS {
            self.status = GameStatus::Ready;
        }
        self
    }

    /// Draw a fresh set of words and start the clock for the current team.
    ///
    /// When categories are selected, one of them is picked for this round only.
    pub fn start_round<P: WordProvider + ?Sized>(mut self, provider: &mut P) -> Self {
        if self.status != GameStatus::Ready {
            return self;
        }

        let category = provider.pick_category(&self.selected_categories);
        self.words = provider.draw(self.words_per_round, category.as_deref());
        self.round_category = category;
        self.current_word_index = 0;
        self.correct_words.clear();
        self.skipped_words.clear();
        self.remaining_time = self.time_per_round;
        self.status = GameStatus::Playing;
        self
    }

    /// The current word was guessed.
    pub fn mark_correct(self) -> Self {
        self.resolve_current_word(Resolution::Correct)
    }

    /// The current word was passed on; it earns nothing.
    pub fn skip_word(self) -> Self {
        self.resolve_current_word(Resolution::Skipped)
    }

    fn resolve_current_word(mut self, resolution: Resolution) -> Self {
        if self.status != GameStatus::Playing || self.is_time_up() {
            return self;
        }
        let Some(word) = self.current_word().map(|w| w.word.to_string()) else {
            return self;
        };

        match resolution {
            Resolution::Correct => self.correct_words.push(word),
            Resolution::Skipped => self.skipped_words.push(word),
        }

        // The last word stays current once resolved; `current_word` then reports none left.
        if self.current_word_index + 1 < self.words.len() {
            self.current_word_index += 1;
        }
        self
    }

    /// Score the round, hand the turn to the next team and advance the round
    /// counter after a full cycle. Finishes the game past the last round.
    ///
    /// The round's correct and skipped words move into `last_round`, so a
    /// repeated call cannot score them twice.
    pub fn end_round(mut self) -> Self {
        if matches!(self.status, GameStatus::Setup | GameStatus::Finished)
            || self.team_order.is_empty()
        {
            return self;
        }

        let team = self.team_order[self.current_team_index].clone();
        let points = self.correct_words.len() as u32;
        *self.team_scores.entry(team.clone()).or_insert(0) += points;

        self.last_round = Some(RoundSummary {
            team,
            round: self.current_round,
            correct: std::mem::take(&mut self.correct_words),
            skipped: std::mem::take(&mut self.skipped_words),
            points,
        });

        self.current_team_index = (self.current_team_index + 1) % self.team_order.len();
        if self.current_team_index == 0 {
            self.current_round += 1;
        }

        self.status = if self.current_round > self.total_rounds {
            GameStatus::Finished
        } else {
            GameStatus::Ready
        };
        self
    }

    pub fn pause(mut self) -> Self {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
        self
    }

    pub fn resume(mut self) -> Self {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
        self
    }

    /// Count down the round clock by `elapsed`, stopping at zero.
    ///
    /// Only runs while playing, so late ticks after a pause or round end are
    /// ignored. Reaching zero does not end the round; see `is_time_up`.
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if self.status == GameStatus::Playing {
            self.remaining_time = self.remaining_time.saturating_sub(elapsed);
        }
        self
    }

    /// Whether the round clock has run out while playing
    pub fn is_time_up(&self) -> bool {
        self.status == GameStatus::Playing && self.remaining_time.is_zero()
    }

    /// Teams sharing the top score, in turn order. Empty until the game is finished.
    pub fn winners(&self) -> Vec<&str> {
        if self.status != GameStatus::Finished {
            return Vec::new();
        }
        let Some(best) = self.team_order.iter().map(|t| self.score(t)).max() else {
            return Vec::new();
        };
        self.team_order
            .iter()
            .filter(|t| self.score(t) == best)
            .map(String::as_str)
            .collect()
    }

    /// Discard the game and go back to an empty setup.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn team_order(&self) -> &[String] {
        &self.team_order
    }

    pub fn current_team_index(&self) -> usize {
        self.current_team_index
    }

    /// The team whose turn it is
    pub fn current_team(&self) -> Option<&str> {
        self.team_order
            .get(self.current_team_index)
            .map(String::as_str)
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn time_per_round(&self) -> Duration {
        self.time_per_round
    }

    pub fn words_per_round(&self) -> usize {
        self.words_per_round
    }

    pub fn remaining_time(&self) -> Duration {
        self.remaining_time
    }

    /// Whole seconds left, rounded up for display
    pub fn remaining_secs(&self) -> u64 {
        let secs = self.remaining_time.as_secs();
        if self.remaining_time.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Share of the round clock still left, in `0.0..=1.0`
    pub fn time_fraction(&self) -> f64 {
        if self.time_per_round.is_zero() {
            return 0.0;
        }
        (self.remaining_time.as_secs_f64() / self.time_per_round.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn words(&self) -> &[WordItem] {
        &self.words
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    /// The word being described, if the round is live and words remain
    pub fn current_word(&self) -> Option<&WordItem> {
        if !matches!(self.status, GameStatus::Playing | GameStatus::Paused) {
            return None;
        }
        if self.words_resolved() >= self.words.len() {
            return None;
        }
        self.words.get(self.current_word_index)
    }

    /// Words marked correct or skipped so far this round
    pub fn words_resolved(&self) -> usize {
        self.correct_words.len() + self.skipped_words.len()
    }

    pub fn correct_words(&self) -> &[String] {
        &self.correct_words
    }

    pub fn skipped_words(&self) -> &[String] {
        &self.skipped_words
    }

    pub fn team_scores(&self) -> &BTreeMap<String, u32> {
        &self.team_scores
    }

    /// Cumulative score of a team (zero for unknown ids)
    pub fn score(&self, team: &str) -> u32 {
        self.team_scores.get(team).copied().unwrap_or(0)
    }

    /// Teams and scores, best first; ties keep turn order
    pub fn standings(&self) -> Vec<(&str, u32)> {
        let mut standings: Vec<(&str, u32)> = self
            .team_order
            .iter()
            .map(|t| (t.as_str(), self.score(t)))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    /// Category the current round's words were drawn from, if restricted
    pub fn round_category(&self) -> Option<&str> {
        self.round_category.as_deref()
    }

    /// Summary of the most recently ended round
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog;
    use crate::game::words::Deck;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn deck(seed: u64) -> Deck<StdRng> {
        Deck::with_rng(catalog::words().to_vec(), StdRng::seed_from_u64(seed))
    }

    fn config(teams: &[&str], rounds: u32, seconds: u32, words: usize) -> GameConfig {
        GameConfig {
            teams: teams.iter().map(|t| t.to_string()).collect(),
            total_rounds: rounds,
            seconds_per_round: seconds,
            words_per_round: words,
            categories: Vec::new(),
        }
    }

    fn ready(teams: &[&str], rounds: u32) -> GameState {
        GameState::new(config(teams, rounds, 30, 5)).begin()
    }

    fn playing(teams: &[&str], rounds: u32, deck: &mut Deck<StdRng>) -> GameState {
        ready(teams, rounds).start_round(deck)
    }

    /// Deterministic provider handing out a fixed word list
    struct FixedWords(Vec<WordItem>);

    impl WordProvider for FixedWords {
        fn draw(&mut self, count: usize, _category: Option<&str>) -> Vec<WordItem> {
            self.0.iter().take(count).copied().collect()
        }

        fn pick_category(&mut self, categories: &[String]) -> Option<String> {
            categories.first().cloned()
        }
    }

    fn fixed() -> FixedWords {
        FixedWords(vec![
            WordItem::new("Coffee", "General"),
            WordItem::new("Tokyo", "Geography"),
            WordItem::new("Golf", "Sports"),
        ])
    }

    #[test]
    fn test_new_game_is_in_setup() {
        let state = GameState::new(config(&["A", "B"], 3, 30, 5));

        assert_eq!(state.status(), GameStatus::Setup);
        assert_eq!(state.current_team(), Some("A"));
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.total_rounds(), 3);
        assert_eq!(state.remaining_time(), Duration::from_secs(30));
        assert!(state.words().is_empty());
        assert_eq!(state.score("A"), 0);
        assert_eq!(state.score("B"), 0);
    }

    #[test]
    fn test_new_collapses_duplicates() {
        let mut cfg = config(&["A", "B", "A"], 3, 30, 5);
        cfg.categories = vec!["Sports".to_string(), "Sports".to_string()];
        let state = GameState::new(cfg);

        assert_eq!(state.team_order(), &["A".to_string(), "B".to_string()]);
        let keys: Vec<&String> = state.team_scores().keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(state.selected_categories(), &["Sports".to_string()]);
    }

    #[test]
    fn test_begin_requires_two_teams() {
        let lone = GameState::new(config(&["A"], 3, 30, 5)).begin();
        assert_eq!(lone.status(), GameStatus::Setup);

        let empty = GameState::default().begin();
        assert_eq!(empty.status(), GameStatus::Setup);

        let pair = GameState::new(config(&["A", "B"], 3, 30, 5)).begin();
        assert_eq!(pair.status(), GameStatus::Ready);
    }

    #[test]
    fn test_begin_only_from_setup() {
        let mut deck = deck(1);
        let state = playing(&["A", "B"], 3, &mut deck);
        let before = state.clone();
        assert_eq!(state.begin(), before);
    }

    #[test]
    fn test_start_round_resets_round_state() {
        let mut deck = deck(1);
        let state = playing(&["A", "B"], 3, &mut deck)
            .mark_correct()
            .skip_word()
            .tick(Duration::from_secs(10))
            .end_round()
            .start_round(&mut deck);

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.words().len(), 5);
        assert_eq!(state.current_word_index(), 0);
        assert!(state.correct_words().is_empty());
        assert!(state.skipped_words().is_empty());
        assert_eq!(state.remaining_time(), Duration::from_secs(30));
    }

    #[test]
    fn test_start_round_only_from_ready() {
        let mut deck = deck(2);

        let setup = GameState::new(config(&["A", "B"], 3, 30, 5));
        assert_eq!(setup.clone().start_round(&mut deck), setup);

        let live = playing(&["A", "B"], 3, &mut deck).mark_correct();
        assert_eq!(live.clone().start_round(&mut deck), live);

        let paused = live.pause();
        assert_eq!(paused.clone().start_round(&mut deck), paused);
    }

    #[test]
    fn test_start_round_never_exceeds_words_per_round() {
        let mut deck = deck(3);
        for words in [1, 5, 20, 100] {
            let state = GameState::new(config(&["A", "B"], 1, 30, words))
                .begin()
                .start_round(&mut deck);
            assert!(state.words().len() <= words);
            assert_eq!(state.current_word_index(), 0);
        }
    }

    #[test]
    fn test_start_round_uses_a_selected_category() {
        let mut deck = deck(4);
        let mut cfg = config(&["A", "B"], 20, 30, 5);
        cfg.categories = vec!["Sports".to_string(), "Geography".to_string()];
        let mut state = GameState::new(cfg).begin();

        let mut seen = HashSet::new();
        for _ in 0..30 {
            state = state.start_round(&mut deck);
            let category = state.round_category().unwrap().to_string();
            assert!(state.words().iter().all(|w| w.category == category));
            seen.insert(category);
            state = state.end_round();
        }
        // Picked afresh every round
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_start_round_unfiltered_without_categories() {
        let mut deck = deck(4);
        let state = playing(&["A", "B"], 3, &mut deck);
        assert_eq!(state.round_category(), None);
        assert_eq!(state.words().len(), 5);
    }

    #[test]
    fn test_mark_and_skip_outside_playing_are_identity() {
        let mut deck = deck(5);
        let setup = GameState::new(config(&["A", "B"], 1, 30, 5));
        let ready = setup.clone().begin();
        let paused = ready.clone().start_round(&mut deck).pause();
        let finished = paused.clone().resume().end_round().end_round();
        assert_eq!(finished.status(), GameStatus::Finished);

        for state in [setup, ready, paused, finished] {
            assert_eq!(state.clone().mark_correct(), state);
            assert_eq!(state.clone().skip_word(), state);
        }
    }

    #[test]
    fn test_mark_correct_advances() {
        let state = ready(&["A", "B"], 3).start_round(&mut fixed());
        assert_eq!(state.current_word().map(|w| w.word), Some("Coffee"));

        let state = state.mark_correct();
        assert_eq!(state.correct_words(), &["Coffee".to_string()]);
        assert_eq!(state.current_word_index(), 1);
        assert_eq!(state.current_word().map(|w| w.word), Some("Tokyo"));
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_skip_word_does_not_score() {
        let state = ready(&["A", "B"], 3)
            .start_round(&mut fixed())
            .skip_word()
            .end_round();

        assert_eq!(state.score("A"), 0);
        assert_eq!(
            state.last_round().map(|r| r.skipped.clone()),
            Some(vec!["Coffee".to_string()])
        );
    }

    #[test]
    fn test_last_word_is_resolved_once() {
        let state = ready(&["A", "B"], 3)
            .start_round(&mut fixed())
            .mark_correct()
            .skip_word()
            .mark_correct();

        assert_eq!(state.current_word_index(), 2);
        assert_eq!(state.current_word(), None);
        assert_eq!(state.words_resolved(), 3);

        // Further presses change nothing once every word is resolved
        let after = state.clone().mark_correct().skip_word();
        assert_eq!(after, state);
        assert_eq!(after.correct_words().len(), 2);
        assert_eq!(after.skipped_words().len(), 1);
    }

    #[test]
    fn test_no_words_means_no_current_word() {
        let mut empty = FixedWords(Vec::new());
        let state = ready(&["A", "B"], 3).start_round(&mut empty);

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current_word(), None);
        assert_eq!(state.clone().mark_correct(), state);
    }

    #[test]
    fn test_correct_and_skipped_have_no_duplicates() {
        let mut deck = deck(6);
        let mut state = playing(&["A", "B"], 3, &mut deck);
        for i in 0..20 {
            state = if i % 3 == 0 {
                state.skip_word()
            } else {
                state.mark_correct()
            };
        }
        let mut all: Vec<&String> = state.correct_words().iter().collect();
        all.extend(state.skipped_words());
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(all.len(), state.words().len());
    }

    #[test]
    fn test_basic_round_scenario() {
        let mut deck = deck(7);
        let state = GameState::new(config(&["A", "B"], 2, 30, 3))
            .begin()
            .start_round(&mut deck)
            .mark_correct()
            .mark_correct()
            .skip_word()
            .end_round();

        assert_eq!(state.score("A"), 2);
        assert_eq!(state.current_team(), Some("B"));
        assert_eq!(state.status(), GameStatus::Ready);
        assert_eq!(state.current_round(), 1);
    }

    #[test]
    fn test_end_round_keeps_words_and_summarises() {
        let state = ready(&["A", "B"], 3)
            .start_round(&mut fixed())
            .mark_correct()
            .skip_word()
            .end_round();

        assert_eq!(state.words().len(), 3);
        assert!(state.correct_words().is_empty());
        assert!(state.skipped_words().is_empty());
        assert_eq!(
            state.last_round(),
            Some(&RoundSummary {
                team: "A".to_string(),
                round: 1,
                correct: vec!["Coffee".to_string()],
                skipped: vec!["Tokyo".to_string()],
                points: 1,
            })
        );
    }

    #[test]
    fn test_repeated_end_round_does_not_rescore() {
        let state = ready(&["A", "B", "C"], 3)
            .start_round(&mut fixed())
            .mark_correct()
            .mark_correct()
            .end_round()
            .end_round();

        assert_eq!(state.score("A"), 2);
        assert_eq!(state.score("B"), 0);
        assert_eq!(state.current_team(), Some("C"));
    }

    #[test]
    fn test_rotation_is_circular() {
        let mut state = ready(&["A", "B", "C"], 5);
        let start_index = state.current_team_index();
        let start_round = state.current_round();

        for _ in 0..state.team_order().len() {
            state = state.end_round();
        }

        assert_eq!(state.current_team_index(), start_index);
        assert_eq!(state.current_round(), start_round + 1);
        assert_eq!(state.status(), GameStatus::Ready);
    }

    #[test]
    fn test_single_round_game_finishes_after_each_team_plays() {
        let mut deck = deck(8);
        let state = ready(&["A", "B"], 1)
            .start_round(&mut deck)
            .end_round();
        assert_eq!(state.status(), GameStatus::Ready);

        let state = state.start_round(&mut deck).end_round();
        assert_eq!(state.status(), GameStatus::Finished);
        assert_eq!(state.current_round(), 2);
    }

    #[test]
    fn test_finished_game_is_frozen() {
        let mut deck = deck(9);
        let finished = ready(&["A", "B"], 1)
            .start_round(&mut deck)
            .mark_correct()
            .end_round()
            .end_round();
        assert_eq!(finished.status(), GameStatus::Finished);

        let same = finished
            .clone()
            .end_round()
            .start_round(&mut deck)
            .pause()
            .resume()
            .tick(Duration::from_secs(5))
            .begin();
        assert_eq!(same, finished);
    }

    #[test]
    fn test_end_round_in_setup_is_noop() {
        let setup = GameState::new(config(&["A", "B"], 1, 30, 5));
        assert_eq!(setup.clone().end_round(), setup);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut deck = deck(10);
        let state = playing(&["A", "B"], 3, &mut deck);

        let paused = state.clone().pause();
        assert_eq!(paused.status(), GameStatus::Paused);
        assert_eq!(paused.clone().pause(), paused);

        let resumed = paused.resume();
        assert_eq!(resumed, state);
        assert_eq!(resumed.clone().resume(), resumed);

        let ready = ready(&["A", "B"], 3);
        assert_eq!(ready.clone().pause(), ready);
        assert_eq!(ready.clone().resume(), ready);
    }

    #[test]
    fn test_tick_counts_down_and_floors() {
        let mut deck = deck(11);
        let state = GameState::new(config(&["A", "B"], 3, 5, 5))
            .begin()
            .start_round(&mut deck);

        let state = state.tick(Duration::from_millis(1500));
        assert_eq!(state.remaining_time(), Duration::from_millis(3500));
        assert_eq!(state.remaining_secs(), 4);
        assert!(!state.is_time_up());

        let state = state.tick(Duration::from_secs(60));
        assert_eq!(state.remaining_time(), Duration::ZERO);
        assert!(state.is_time_up());
        // Time running out leaves finalisation to `end_round`
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current_team(), Some("A"));
    }

    #[test]
    fn test_tick_ignored_unless_playing() {
        let mut deck = deck(12);
        let paused = playing(&["A", "B"], 3, &mut deck).pause();
        assert_eq!(paused.clone().tick(Duration::from_secs(3)), paused);

        let ready = ready(&["A", "B"], 3);
        assert_eq!(ready.clone().tick(Duration::from_secs(3)), ready);
        assert!(!ready.is_time_up());
    }

    #[test]
    fn test_no_scoring_after_time_up() {
        let state = ready(&["A", "B"], 3)
            .start_round(&mut fixed())
            .mark_correct()
            .tick(Duration::from_secs(30));
        assert!(state.is_time_up());

        let after = state.clone().mark_correct().skip_word();
        assert_eq!(after, state);
        assert_eq!(after.end_round().score("A"), 1);
    }

    #[test]
    fn test_time_fraction() {
        let mut deck = deck(13);
        let state = GameState::new(config(&["A", "B"], 3, 10, 5))
            .begin()
            .start_round(&mut deck);
        assert_eq!(state.time_fraction(), 1.0);

        let state = state.tick(Duration::from_secs(5));
        assert!((state.time_fraction() - 0.5).abs() < f64::EPSILON);

        let zero = GameState::new(config(&["A", "B"], 3, 0, 5));
        assert_eq!(zero.time_fraction(), 0.0);
    }

    #[test]
    fn test_winners_single() {
        let mut deck = deck(14);
        let state = ready(&["A", "B"], 1)
            .start_round(&mut deck)
            .mark_correct()
            .mark_correct()
            .end_round()
            .start_round(&mut deck)
            .mark_correct()
            .end_round();

        assert_eq!(state.status(), GameStatus::Finished);
        assert_eq!(state.winners(), vec!["A"]);
    }

    #[test]
    fn test_winners_tie() {
        let mut deck = deck(15);
        let state = ready(&["A", "B", "C"], 1)
            .start_round(&mut deck)
            .mark_correct()
            .end_round()
            .start_round(&mut deck)
            .end_round()
            .start_round(&mut deck)
            .mark_correct()
            .end_round();

        let winners: HashSet<&str> = state.winners().into_iter().collect();
        assert_eq!(winners, HashSet::from(["A", "C"]));
    }

    #[test]
    fn test_winners_empty_until_finished() {
        let mut deck = deck(16);
        let state = playing(&["A", "B"], 1, &mut deck).mark_correct();
        assert!(state.winners().is_empty());
        assert!(state.end_round().winners().is_empty());
    }

    #[test]
    fn test_standings_order() {
        let state = ready(&["A", "B", "C"], 3)
            .end_round()
            .start_round(&mut fixed())
            .mark_correct()
            .end_round();

        assert_eq!(state.standings(), vec![("B", 1), ("A", 0), ("C", 0)]);
    }

    #[test]
    fn test_reset_returns_to_setup() {
        let mut deck = deck(17);
        let state = playing(&["A", "B"], 3, &mut deck).mark_correct().reset();

        assert_eq!(state, GameState::default());
        assert_eq!(state.status(), GameStatus::Setup);
        assert!(state.team_order().is_empty());
        assert_eq!(state.current_team(), None);
    }

    #[test]
    fn test_full_game_scores_never_decrease() {
        let mut deck = deck(18);
        let mut state = ready(&["A", "B", "C"], 2);
        let mut previous: BTreeMap<String, u32> = state.team_scores().clone();

        while state.status() != GameStatus::Finished {
            state = state.start_round(&mut deck).mark_correct().skip_word().end_round();
            for (team, score) in state.team_scores() {
                assert!(*score >= previous[team]);
            }
            previous = state.team_scores().clone();
        }

        assert_eq!(state.current_round(), 3);
        assert_eq!(state.winners(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = ready(&["A", "B"], 3).start_round(&mut fixed());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["status"], "playing");
        assert_eq!(json["team_order"], serde_json::json!(["A", "B"]));
        assert_eq!(json["words"][0]["word"], "Coffee");
        assert_eq!(json["team_scores"]["A"], 0);
    }
}
