//! Events the UI dispatches into a game.

/// Preset game lengths offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Ten questions.
    Easy,
    /// Fifteen questions.
    Medium,
    /// Twenty questions.
    Hard,
}

impl Difficulty {
    /// Number of questions in a game at this difficulty.
    #[must_use]
    pub fn total_questions(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
        }
    }

    /// Suggested per-question time limit for the UI, in seconds.
    ///
    /// The game itself does not enforce it.
    #[must_use]
    pub fn time_limit_secs(self) -> u32 {
        match self {
            Self::Easy => 30,
            Self::Medium => 20,
            Self::Hard => 15,
        }
    }

    /// Parses a lowercase difficulty name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Something the player (or the UI on their behalf) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Begin a fresh game of the given length.
    StartGame {
        /// Number of questions to ask.
        total_questions: u32,
    },
    /// Choose the continent whose countries will be asked.
    SelectContinent(String),
    /// Click a country on the map, by alpha-2 or alpha-3 code.
    SelectCountry(String),
    /// Submit a typed capital name.
    SubmitAnswer(String),
    /// Leave feedback and move to the next question.
    NextQuestion,
    /// Stop the current game early.
    EndGame,
    /// Restart with the same length over the whole world.
    ResetGame,
}

impl GameEvent {
    /// Start event for a difficulty preset.
    #[must_use]
    pub fn start(difficulty: Difficulty) -> Self {
        Self::StartGame {
            total_questions: difficulty.total_questions(),
        }
    }

    /// The type name for this event (for logging).
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::StartGame { .. } => "game.start_game",
            Self::SelectContinent(_) => "game.select_continent",
            Self::SelectCountry(_) => "game.select_country",
            Self::SubmitAnswer(_) => "game.submit_answer",
            Self::NextQuestion => "game.next_question",
            Self::EndGame => "game.end_game",
            Self::ResetGame => "game.reset_game",
        }
    }
}
