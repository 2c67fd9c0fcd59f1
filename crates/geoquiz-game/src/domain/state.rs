//! Game state and its phases.

use std::sync::Arc;

use geoquiz_atlas::Country;
use geoquiz_atlas::lookup::countries;
use serde::Serialize;

/// Step of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// Waiting for the player to pick a continent.
    SelectContinent,
    /// Waiting for a click on the named country.
    SelectCountry,
    /// Right country clicked; waiting for the capital.
    GuessCapital,
    /// Showing the outcome of the current question.
    Feedback,
    /// No more questions.
    GameOver,
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event did not apply in the current phase; nothing changed.
    Ignored,
    /// State changed; the game goes on.
    Changed,
    /// State changed and the game has just ended.
    Finished,
}

impl Transition {
    /// Whether state changed.
    #[must_use]
    pub fn is_change(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Everything the UI needs to draw the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Country asked in the current question.
    pub current_country: Option<Country>,
    /// Points so far; never decreases within a game.
    pub score: u32,
    /// Questions the game was started with.
    pub total_questions: u32,
    /// Zero-based index of the current question.
    pub current_question: u32,
    /// Current step.
    pub phase: GamePhase,
    /// Code the player clicked for this question.
    pub selected_country_code: Option<String>,
    /// Trimmed capital the player submitted.
    pub user_answer: String,
    /// Outcome of the current question, once known.
    pub is_correct: Option<bool>,
    /// Question pool after continent filtering.
    pub countries: Vec<Country>,
    /// Alpha-2 codes of completed questions, in the order asked.
    pub used_countries: Vec<String>,
    /// Continent key chosen for this game.
    pub selected_continent: Option<String>,
}

/// Immutable copy of [`GameState`] handed to observers.
pub type GameSnapshot = Arc<GameState>;

impl GameState {
    /// A fresh game waiting for a continent, with the whole world as pool.
    #[must_use]
    pub fn new(total_questions: u32) -> Self {
        Self {
            current_country: None,
            score: 0,
            total_questions,
            current_question: 0,
            phase: GamePhase::SelectContinent,
            selected_country_code: None,
            user_answer: String::new(),
            is_correct: None,
            countries: countries().to_vec(),
            used_countries: Vec::new(),
            selected_continent: None,
        }
    }

    /// Whether the country with alpha-2 code `cca2` was already asked.
    #[must_use]
    pub fn is_used(&self, cca2: &str) -> bool {
        self.used_countries.iter().any(|used| used == cca2)
    }

    /// Pool entries not yet asked.
    pub fn remaining_countries(&self) -> impl Iterator<Item = &Country> {
        self.countries
            .iter()
            .filter(|country| !self.is_used(country.cca2))
    }

    /// Completion as a percentage of `total_questions`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.current_question) / f64::from(self.total_questions) * 100.0
    }
}
