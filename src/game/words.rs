//! Word provider: random, category-filtered draws from the catalog
//!
//! Draws never repeat an item within one call and never fail. Asking for
//! more words than the filter matches yields fewer words.

use rand::prelude::*;
use rand::rngs::StdRng;

use super::catalog::{self, WordItem, ALL_CATEGORIES};

/// Source of words (and of the per-round category pick) for the state machine
pub trait WordProvider {
    /// Draw up to `count` distinct words, restricted to `category` when given.
    fn draw(&mut self, count: usize, category: Option<&str>) -> Vec<WordItem>;

    /// Pick one category uniformly from `categories`, or `None` if empty.
    fn pick_category(&mut self, categories: &[String]) -> Option<String>;
}

/// Catalog-backed provider with its own RNG
#[derive(Debug, Clone)]
pub struct Deck<R = StdRng> {
    words: Vec<WordItem>,
    rng: R,
}

impl Deck<StdRng> {
    /// A deck over the built-in catalog, seeded for a reproducible game or
    /// from OS entropy.
    pub fn catalog(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(catalog::words().to_vec(), rng)
    }
}

impl<R: Rng> Deck<R> {
    /// A deck over `words` using a specific RNG (for testing/seeding).
    pub fn with_rng(words: Vec<WordItem>, rng: R) -> Self {
        Self { words, rng }
    }
}

impl<R: Rng> WordProvider for Deck<R> {
    fn draw(&mut self, count: usize, category: Option<&str>) -> Vec<WordItem> {
        draw_words_with_rng(&self.words, count, category, &mut self.rng)
    }

    fn pick_category(&mut self, categories: &[String]) -> Option<String> {
        categories.choose(&mut self.rng).cloned()
    }
}

/// Copy the matching words, shuffle the copy, keep the first `count`.
///
/// An absent, empty or `"All"` category draws from every word.
pub fn draw_words_with_rng<R: Rng + ?Sized>(
    words: &[WordItem],
    count: usize,
    category: Option<&str>,
    rng: &mut R,
) -> Vec<WordItem> {
    let filter = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

    let mut pool: Vec<WordItem> = match filter {
        Some(category) => words
            .iter()
            .filter(|w| w.category == category)
            .copied()
            .collect(),
        None => words.to_vec(),
    };

    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> Deck<StdRng> {
        Deck::with_rng(catalog::words().to_vec(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_draw_from_category() {
        let mut deck = seeded(7);
        let drawn = deck.draw(5, Some("Sports"));

        assert_eq!(drawn.len(), 5);
        assert!(drawn.iter().all(|w| w.category == "Sports"));
        let unique: HashSet<_> = drawn.iter().map(|w| w.word).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_draw_more_than_available() {
        let mut deck = seeded(7);
        let drawn = deck.draw(100, Some("Sports"));

        assert_eq!(drawn.len(), 15);
        let unique: HashSet<_> = drawn.iter().map(|w| w.word).collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_draw_unknown_category_is_empty() {
        let mut deck = seeded(7);
        assert!(deck.draw(5, Some("Cooking")).is_empty());
    }

    #[test]
    fn test_draw_unfiltered() {
        let mut deck = seeded(3);
        for category in [None, Some(""), Some(ALL_CATEGORIES)] {
            let drawn = deck.draw(75, category);
            assert_eq!(drawn.len(), 75);
            let unique: HashSet<_> = drawn.iter().map(|w| w.word).collect();
            assert_eq!(unique.len(), 75);
        }
    }

    #[test]
    fn test_draw_zero() {
        let mut deck = seeded(3);
        assert!(deck.draw(0, None).is_empty());
    }

    #[test]
    fn test_seeded_draws_are_deterministic() {
        let mut deck1 = seeded(42);
        let mut deck2 = seeded(42);

        assert_eq!(deck1.draw(10, None), deck2.draw(10, None));
        assert_eq!(deck1.draw(3, Some("Geography")), deck2.draw(3, Some("Geography")));
    }

    #[test]
    fn test_draw_leaves_source_untouched() {
        let words = catalog::words().to_vec();
        let mut rng = StdRng::seed_from_u64(9);
        let _ = draw_words_with_rng(&words, 10, None, &mut rng);
        assert_eq!(words.as_slice(), catalog::words());
    }

    #[test]
    fn test_catalog_deck_with_seed_is_reproducible() {
        let mut deck1 = Deck::catalog(Some(1234));
        let mut deck2 = Deck::catalog(Some(1234));
        assert_eq!(deck1.draw(5, None), deck2.draw(5, None));

        let mut unseeded = Deck::catalog(None);
        assert_eq!(unseeded.draw(5, Some("Geography")).len(), 5);
    }

    #[test]
    fn test_pick_category() {
        let mut deck = seeded(11);
        assert_eq!(deck.pick_category(&[]), None);

        let categories = vec!["Sports".to_string(), "Geography".to_string()];
        for _ in 0..20 {
            let picked = deck.pick_category(&categories).unwrap();
            assert!(categories.contains(&picked));
        }
    }

    #[test]
    fn test_pick_category_varies() {
        let mut deck = seeded(5);
        let categories = vec!["Sports".to_string(), "Geography".to_string()];
        let picked: HashSet<String> = (0..50)
            .filter_map(|_| deck.pick_category(&categories))
            .collect();
        assert_eq!(picked.len(), 2);
    }
}
