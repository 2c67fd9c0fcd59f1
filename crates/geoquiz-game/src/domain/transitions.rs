//! Phase transition rules.
//!
//! Every event is guarded by the phase it is valid in. An event arriving in
//! any other phase is ignored and leaves the state untouched, which makes
//! late or repeated UI events (a double click, a feedback timer firing after
//! a reset) harmless.

use geoquiz_answers::validate_capital_answer;
use geoquiz_atlas::lookup::{countries_for_continent, find_country_by_code};
use geoquiz_core::rng::DeterministicRng;
use tracing::{debug, info, warn};

use super::events::GameEvent;
use super::scoring::question_score;
use super::state::{GamePhase, GameState, Transition};

impl GameState {
    /// Applies `event`, returning what happened.
    pub fn apply(&mut self, event: &GameEvent, rng: &mut dyn DeterministicRng) -> Transition {
        let transition = match event {
            GameEvent::StartGame { total_questions } => {
                *self = Self::new(*total_questions);
                Transition::Changed
            }
            GameEvent::SelectContinent(key) => self.select_continent(key, rng),
            GameEvent::SelectCountry(code) => self.select_country(code),
            GameEvent::SubmitAnswer(answer) => self.submit_answer(answer),
            GameEvent::NextQuestion => self.next_question(rng),
            GameEvent::EndGame => self.end_game(),
            GameEvent::ResetGame => {
                *self = Self::new(self.total_questions);
                self.start_new_question(rng)
            }
        };

        if transition == Transition::Ignored {
            debug!(
                event_type = event.event_type(),
                phase = ?self.phase,
                "event ignored in current phase"
            );
        }
        transition
    }

    fn select_continent(&mut self, key: &str, rng: &mut dyn DeterministicRng) -> Transition {
        if self.phase != GamePhase::SelectContinent {
            return Transition::Ignored;
        }

        let Some(pool) = countries_for_continent(key) else {
            warn!(continent = key, "unknown continent");
            return Transition::Ignored;
        };

        info!(continent = key, pool_size = pool.len(), "continent selected");
        self.selected_continent = Some(key.to_owned());
        self.countries = pool;
        self.start_new_question(rng)
    }

    fn select_country(&mut self, code: &str) -> Transition {
        if self.phase != GamePhase::SelectCountry {
            return Transition::Ignored;
        }

        let Some(clicked) = find_country_by_code(&self.countries, code).copied() else {
            warn!(code, "selected country is not in the question pool");
            return Transition::Ignored;
        };

        self.selected_country_code = Some(code.to_owned());

        match self.current_country {
            Some(target) if target.cca2 == clicked.cca2 => {
                self.phase = GamePhase::GuessCapital;
                self.user_answer.clear();
                self.is_correct = None;
            }
            target => {
                info!(
                    expected = target.map(|c| c.cca2),
                    received = clicked.cca2,
                    "wrong country selected"
                );
                self.is_correct = Some(false);
                self.phase = GamePhase::Feedback;
            }
        }
        Transition::Changed
    }

    fn submit_answer(&mut self, answer: &str) -> Transition {
        if self.phase != GamePhase::GuessCapital {
            return Transition::Ignored;
        }
        let Some(country) = self.current_country else {
            return Transition::Ignored;
        };

        let correct = validate_capital_answer(&country, answer);
        self.user_answer = answer.trim().to_owned();
        self.is_correct = Some(correct);
        if correct {
            self.score += question_score(self.current_question);
        }
        self.phase = GamePhase::Feedback;

        info!(country = country.cca2, correct, score = self.score, "capital answered");
        Transition::Changed
    }

    fn next_question(&mut self, rng: &mut dyn DeterministicRng) -> Transition {
        if self.phase != GamePhase::Feedback {
            return Transition::Ignored;
        }

        if let Some(country) = self.current_country {
            if !self.is_used(country.cca2) {
                self.used_countries.push(country.cca2.to_owned());
            }
        }
        self.current_question += 1;

        self.start_new_question(rng)
    }

    fn end_game(&mut self) -> Transition {
        if self.phase == GamePhase::GameOver {
            return Transition::Ignored;
        }
        self.finish()
    }

    /// Draws the next country, or ends the game when the question budget or
    /// the pool is exhausted.
    fn start_new_question(&mut self, rng: &mut dyn DeterministicRng) -> Transition {
        if self.current_question >= self.total_questions {
            return self.finish();
        }

        let remaining: Vec<_> = self.remaining_countries().copied().collect();
        let Some(country) = rng
            .pick_index(remaining.len())
            .and_then(|i| remaining.get(i).copied())
        else {
            info!(
                asked = self.current_question,
                total = self.total_questions,
                "question pool exhausted"
            );
            return self.finish();
        };

        self.current_country = Some(country);
        self.selected_country_code = None;
        self.user_answer.clear();
        self.is_correct = None;
        self.phase = GamePhase::SelectCountry;

        info!(
            question = self.current_question,
            country = country.cca2,
            "new question"
        );
        Transition::Changed
    }

    fn finish(&mut self) -> Transition {
        self.phase = GamePhase::GameOver;
        info!(
            score = self.score,
            asked = self.current_question,
            total = self.total_questions,
            "game over"
        );
        Transition::Finished
    }
}

#[cfg(test)]
mod tests {
    use geoquiz_atlas::lookup::countries;
    use geoquiz_test_support::{MockRng, SequenceRng};

    use super::*;

    fn started(total_questions: u32) -> GameState {
        let mut state = GameState::new(0);
        state.apply(&GameEvent::StartGame { total_questions }, &mut MockRng);
        state
    }

    fn in_continent(total_questions: u32, continent: &str) -> GameState {
        let mut state = started(total_questions);
        let transition = state.apply(
            &GameEvent::SelectContinent(continent.to_owned()),
            &mut MockRng,
        );
        assert_eq!(transition, Transition::Changed);
        state
    }

    fn target_code(state: &GameState) -> String {
        state.current_country.unwrap().cca2.to_owned()
    }

    fn target_capital(state: &GameState) -> String {
        state.current_country.unwrap().capital[0].to_owned()
    }

    #[test]
    fn test_start_game_resets_everything() {
        let mut state = in_continent(5, "europe");
        state.score = 40;
        state.used_countries.push("FR".to_owned());

        let transition = state.apply(&GameEvent::StartGame { total_questions: 7 }, &mut MockRng);

        assert_eq!(transition, Transition::Changed);
        assert_eq!(state, GameState::new(7));
    }

    #[test]
    fn test_select_continent_filters_pool_and_asks_first_question() {
        let state = in_continent(5, "oceania");

        assert_eq!(state.phase, GamePhase::SelectCountry);
        assert_eq!(state.selected_continent.as_deref(), Some("oceania"));
        assert_eq!(state.countries.len(), 2);
        assert_eq!(target_code(&state), "AU");
    }

    #[test]
    fn test_select_continent_outside_its_phase_is_ignored() {
        let mut state = in_continent(5, "oceania");
        let before = state.clone();

        let transition = state.apply(&GameEvent::SelectContinent("asia".into()), &mut MockRng);

        assert_eq!(transition, Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_continent_is_ignored() {
        let mut state = started(5);
        let before = state.clone();

        let transition = state.apply(&GameEvent::SelectContinent("atlantis".into()), &mut MockRng);

        assert_eq!(transition, Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_pick_excludes_nothing_at_start() {
        let mut state = started(5);
        state.apply(
            &GameEvent::SelectContinent("oceania".into()),
            &mut SequenceRng::new(vec![1]),
        );
        assert_eq!(target_code(&state), "NZ");
    }

    #[test]
    fn test_correct_country_moves_to_capital_guess() {
        let mut state = in_continent(5, "europe");
        let code = target_code(&state);

        let transition = state.apply(&GameEvent::SelectCountry(code.clone()), &mut MockRng);

        assert_eq!(transition, Transition::Changed);
        assert_eq!(state.phase, GamePhase::GuessCapital);
        assert_eq!(state.selected_country_code, Some(code));
        assert_eq!(state.is_correct, None);
    }

    #[test]
    fn test_correct_country_by_alpha3_code_is_accepted() {
        let mut state = in_continent(5, "europe");
        let alpha3 = state.current_country.unwrap().cca3.to_owned();

        state.apply(&GameEvent::SelectCountry(alpha3), &mut MockRng);

        assert_eq!(state.phase, GamePhase::GuessCapital);
    }

    #[test]
    fn test_wrong_country_goes_straight_to_feedback() {
        let mut state = in_continent(5, "oceania");
        assert_eq!(target_code(&state), "AU");

        let transition = state.apply(&GameEvent::SelectCountry("NZ".into()), &mut MockRng);

        assert_eq!(transition, Transition::Changed);
        assert_eq!(state.phase, GamePhase::Feedback);
        assert_eq!(state.is_correct, Some(false));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_country_outside_pool_is_a_no_op() {
        let mut state = in_continent(5, "oceania");
        let before = state.clone();

        let transition = state.apply(&GameEvent::SelectCountry("FR".into()), &mut MockRng);

        assert_eq!(transition, Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_answer_before_country_is_ignored() {
        let mut state = in_continent(5, "europe");
        let capital = target_capital(&state);
        let before = state.clone();

        let transition = state.apply(&GameEvent::SubmitAnswer(capital), &mut MockRng);

        assert_eq!(transition, Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_correct_capital_on_first_question_scores_fifteen() {
        let mut state = in_continent(5, "europe");
        let capital = target_capital(&state);
        state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);

        let transition = state.apply(
            &GameEvent::SubmitAnswer(format!("  {}  ", capital.to_uppercase())),
            &mut MockRng,
        );

        assert_eq!(transition, Transition::Changed);
        assert_eq!(state.phase, GamePhase::Feedback);
        assert_eq!(state.is_correct, Some(true));
        assert_eq!(state.score, 15);
        assert_eq!(state.user_answer, capital.to_uppercase());
    }

    #[test]
    fn test_correct_capital_on_seventh_question_scores_ten() {
        let mut state = in_continent(10, "europe");
        state.current_question = 6;
        let capital = target_capital(&state);
        state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);

        state.apply(&GameEvent::SubmitAnswer(capital), &mut MockRng);

        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_wrong_capital_scores_nothing() {
        let mut state = in_continent(5, "europe");
        state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);

        state.apply(&GameEvent::SubmitAnswer("Atlantis".into()), &mut MockRng);

        assert_eq!(state.phase, GamePhase::Feedback);
        assert_eq!(state.is_correct, Some(false));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_next_question_records_asked_country_once() {
        let mut state = in_continent(5, "oceania");
        state.apply(&GameEvent::SelectCountry("NZ".into()), &mut MockRng);

        let first = state.apply(&GameEvent::NextQuestion, &mut MockRng);
        let second = state.apply(&GameEvent::NextQuestion, &mut MockRng);

        assert_eq!(first, Transition::Changed);
        assert_eq!(second, Transition::Ignored);
        assert_eq!(state.used_countries, vec!["AU".to_owned()]);
        assert_eq!(state.current_question, 1);
        assert_eq!(state.phase, GamePhase::SelectCountry);
        assert_eq!(target_code(&state), "NZ");
    }

    #[test]
    fn test_small_pool_ends_game_early() {
        let mut state = in_continent(10, "oceania");
        for _ in 0..2 {
            state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);
            state.apply(&GameEvent::SubmitAnswer("nope".into()), &mut MockRng);
            let transition = state.apply(&GameEvent::NextQuestion, &mut MockRng);
            if state.phase == GamePhase::GameOver {
                assert_eq!(transition, Transition::Finished);
            }
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.current_question, 2);
        assert_eq!(state.used_countries.len(), 2);
    }

    #[test]
    fn test_question_budget_ends_game() {
        let mut state = in_continent(1, "europe");
        state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);
        state.apply(&GameEvent::SubmitAnswer(target_capital(&state)), &mut MockRng);

        let transition = state.apply(&GameEvent::NextQuestion, &mut MockRng);

        assert_eq!(transition, Transition::Finished);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.current_question, 1);
        assert_eq!(state.score, 15);
    }

    #[test]
    fn test_zero_question_game_ends_on_continent_choice() {
        let mut state = started(0);

        let transition = state.apply(&GameEvent::SelectContinent("europe".into()), &mut MockRng);

        assert_eq!(transition, Transition::Finished);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.current_question, 0);
    }

    #[test]
    fn test_end_game_from_any_live_phase() {
        let mut state = in_continent(5, "europe");

        assert_eq!(state.apply(&GameEvent::EndGame, &mut MockRng), Transition::Finished);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.apply(&GameEvent::EndGame, &mut MockRng), Transition::Ignored);
    }

    #[test]
    fn test_reset_keeps_length_and_starts_world_question() {
        let mut state = in_continent(3, "oceania");
        state.score = 15;

        let transition = state.apply(&GameEvent::ResetGame, &mut MockRng);

        assert_eq!(transition, Transition::Changed);
        assert_eq!(state.total_questions, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::SelectCountry);
        assert_eq!(state.countries.len(), countries().len());
        assert!(state.selected_continent.is_none());
    }

    #[test]
    fn test_events_after_game_over_are_ignored() {
        let mut state = in_continent(1, "oceania");
        state.apply(&GameEvent::EndGame, &mut MockRng);
        let before = state.clone();

        for event in [
            GameEvent::SelectContinent("europe".into()),
            GameEvent::SelectCountry("AU".into()),
            GameEvent::SubmitAnswer("Canberra".into()),
            GameEvent::NextQuestion,
        ] {
            assert_eq!(state.apply(&event, &mut MockRng), Transition::Ignored);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_invariants_hold_over_a_full_game() {
        let mut state = in_continent(6, "europe");
        let mut completed = 0;

        while state.phase != GamePhase::GameOver {
            assert!(state.current_question <= state.total_questions);
            assert_eq!(state.used_countries.len(), completed);
            assert!(!state.is_used(&target_code(&state)));

            state.apply(&GameEvent::SelectCountry(target_code(&state)), &mut MockRng);
            state.apply(&GameEvent::SubmitAnswer(target_capital(&state)), &mut MockRng);
            state.apply(&GameEvent::NextQuestion, &mut MockRng);
            completed += 1;
        }

        assert_eq!(state.current_question, 6);
        assert_eq!(state.used_countries.len(), 6);
        assert_eq!(state.score, 15 + 14 + 13 + 12 + 11 + 10);
    }
}
