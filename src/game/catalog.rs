//! Built-in reference data: word catalog, categories, team roster
//!
//! Loaded once per process and never mutated afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Pseudo-category meaning "no filter"
pub const ALL_CATEGORIES: &str = "All";

/// A word to be described, tagged with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WordItem {
    pub word: &'static str,
    pub category: &'static str,
}

impl WordItem {
    pub const fn new(word: &'static str, category: &'static str) -> Self {
        Self { word, category }
    }
}

/// A selectable word category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Display color for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

/// A team from the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub color: TeamColor,
}

static CATEGORIES: [CategoryInfo; 5] = [
    CategoryInfo {
        name: "General",
        description: "A mix of various topics",
    },
    CategoryInfo {
        name: "Movies & TV",
        description: "Famous films and television shows",
    },
    CategoryInfo {
        name: "Sports",
        description: "Athletes, teams, and sporting events",
    },
    CategoryInfo {
        name: "Geography",
        description: "Places, landmarks, and countries",
    },
    CategoryInfo {
        name: "Famous People",
        description: "Celebrities, historical figures, and personalities",
    },
];

static TEAMS: [TeamInfo; 5] = [
    TeamInfo {
        id: "team1",
        name: "Team Red",
        color: TeamColor::Red,
    },
    TeamInfo {
        id: "team2",
        name: "Team Blue",
        color: TeamColor::Blue,
    },
    TeamInfo {
        id: "team3",
        name: "Team Green",
        color: TeamColor::Green,
    },
    TeamInfo {
        id: "team4",
        name: "Team Yellow",
        color: TeamColor::Yellow,
    },
    TeamInfo {
        id: "team5",
        name: "Team Purple",
        color: TeamColor::Purple,
    },
];

/// Words grouped by category, one `(category, words)` block each
static WORDS_BY_CATEGORY: [(&str, [&str; 15]); 5] = [
    (
        "General",
        [
            "Internet",
            "Coffee",
            "Smartphone",
            "Birthday",
            "Camera",
            "Chocolate",
            "Glasses",
            "Library",
            "Umbrella",
            "Piano",
            "Butterfly",
            "Fireworks",
            "Restaurant",
            "Rainbow",
            "Clock",
        ],
    ),
    (
        "Movies & TV",
        [
            "Star Wars",
            "Harry Potter",
            "The Simpsons",
            "Titanic",
            "Stranger Things",
            "Game of Thrones",
            "The Matrix",
            "Breaking Bad",
            "Avengers",
            "Jurassic Park",
            "Friends",
            "The Lion King",
            "The Office",
            "Inception",
            "Avatar",
        ],
    ),
    (
        "Sports",
        [
            "Basketball",
            "Soccer",
            "Tennis",
            "Olympic Games",
            "Michael Jordan",
            "World Cup",
            "Baseball",
            "Swimming",
            "Golf",
            "Serena Williams",
            "Usain Bolt",
            "Formula 1",
            "LeBron James",
            "Super Bowl",
            "Wimbledon",
        ],
    ),
    (
        "Geography",
        [
            "New York",
            "Eiffel Tower",
            "Great Wall of China",
            "Amazon Rainforest",
            "Mount Everest",
            "Grand Canyon",
            "Venice",
            "Tokyo",
            "Sahara Desert",
            "Niagara Falls",
            "Sydney Opera House",
            "Amazon River",
            "Northern Lights",
            "Great Barrier Reef",
            "Taj Mahal",
        ],
    ),
    (
        "Famous People",
        [
            "Albert Einstein",
            "Leonardo da Vinci",
            "Beyoncé",
            "Barack Obama",
            "Steve Jobs",
            "Taylor Swift",
            "Nelson Mandela",
            "Oprah Winfrey",
            "William Shakespeare",
            "Marie Curie",
            "Elvis Presley",
            "Madonna",
            "Muhammad Ali",
            "Elon Musk",
            "Marilyn Monroe",
        ],
    ),
];

/// Flattened catalog, in category order
static WORDS: Lazy<Vec<WordItem>> = Lazy::new(|| {
    WORDS_BY_CATEGORY
        .iter()
        .flat_map(|&(category, ref words)| words.iter().map(move |&word| WordItem::new(word, category)))
        .collect()
});

/// The full word catalog
pub fn words() -> &'static [WordItem] {
    &WORDS
}

/// All selectable categories, in display order
pub fn categories() -> &'static [CategoryInfo] {
    &CATEGORIES
}

/// The team roster, in display order
pub fn teams() -> &'static [TeamInfo] {
    &TEAMS
}

/// Look up a team by id
pub fn team(id: &str) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.id == id)
}

/// Display name for a team id, falling back to the id itself
pub fn team_name(id: &str) -> &str {
    team(id).map(|t| t.name).unwrap_or(id)
}

/// Check whether a name is a known category
pub fn is_category(name: &str) -> bool {
    CATEGORIES.iter().any(|c| c.name == name)
}

/// Check whether a name may be used as a category filter: a known
/// category or the "All" pseudo-category
pub fn is_selectable_category(name: &str) -> bool {
    name == ALL_CATEGORIES || is_category(name)
}
