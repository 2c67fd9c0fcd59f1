//! Routes for hosted game sessions.
//!
//! Every mutating route forwards one event into the session and answers with
//! the resulting view. Events that do not apply in the current phase are not
//! errors: the unchanged view comes back with `200 OK`.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use geoquiz_atlas::lookup::is_valid_country_code;
use geoquiz_core::error::DomainError;
use geoquiz_game::application::session::DEFAULT_TOTAL_QUESTIONS;
use geoquiz_game::{Difficulty, GameEvent, GamePhase, GameSession, GameState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, GameRegistry, HostedGame};

/// Largest game length a client may request.
pub const MAX_TOTAL_QUESTIONS: u32 = 100;

/// Request body for POST /.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Explicit game length.
    pub total_questions: Option<u32>,
    /// Preset name (`easy`, `medium`, `hard`). Sets the length unless one is
    /// given, and always sets the time limit.
    pub difficulty: Option<String>,
}

/// Request body for POST /{id}/continent.
#[derive(Debug, Deserialize)]
pub struct SelectContinentRequest {
    /// Continent key.
    pub continent: String,
}

/// Request body for POST /{id}/country.
#[derive(Debug, Deserialize)]
pub struct SelectCountryRequest {
    /// Alpha-2 or alpha-3 code of the clicked country.
    pub code: String,
}

/// Request body for POST /{id}/answer.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Capital as typed.
    pub answer: String,
}

/// A game as the front-end sees it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Session identifier.
    pub game_id: Uuid,
    /// Current state snapshot.
    pub state: GameState,
    /// Completion percentage.
    pub progress: f64,
    /// Capital of the current country, revealed only once it was answered.
    pub correct_answer: Option<String>,
    /// Suggested seconds per question, when the game has a difficulty.
    pub time_limit_secs: Option<u32>,
}

impl GameView {
    fn of(game_id: Uuid, session: &GameSession, time_limit_secs: Option<u32>) -> Self {
        let state = session.get_state();
        let correct_answer = matches!(state.phase, GamePhase::Feedback | GamePhase::GameOver)
            .then(|| session.get_correct_answer())
            .filter(|answer| !answer.is_empty());
        Self {
            game_id,
            state: GameState::clone(&state),
            progress: session.get_progress(),
            correct_answer,
            time_limit_secs,
        }
    }
}

/// Response body for GET /{id}/hint.
#[derive(Debug, Serialize)]
pub struct HintResponse {
    /// Masked capital, or `null` outside the capital phase.
    pub hint: Option<String>,
}

/// Resolved settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameSettings {
    total_questions: u32,
    difficulty: Option<Difficulty>,
}

fn resolve_settings(request: &CreateGameRequest) -> Result<GameSettings, DomainError> {
    let difficulty = request
        .difficulty
        .as_deref()
        .map(|name| {
            Difficulty::from_name(name)
                .ok_or_else(|| DomainError::Validation(format!("unknown difficulty: {name}")))
        })
        .transpose()?;

    let total_questions = request
        .total_questions
        .or(difficulty.map(Difficulty::total_questions))
        .unwrap_or(DEFAULT_TOTAL_QUESTIONS);

    if !(1..=MAX_TOTAL_QUESTIONS).contains(&total_questions) {
        return Err(DomainError::Validation(format!(
            "totalQuestions must be between 1 and {MAX_TOTAL_QUESTIONS}"
        )));
    }
    Ok(GameSettings {
        total_questions,
        difficulty,
    })
}

/// Delay before auto-advancing out of the feedback `event` may lead to.
fn feedback_delay(state: &AppState, event: &GameEvent) -> Option<Duration> {
    if !state.timing.auto_advance {
        return None;
    }
    match event {
        GameEvent::SelectCountry(_) => Some(state.timing.wrong_country_delay),
        GameEvent::SubmitAnswer(_) => Some(state.timing.answer_delay),
        _ => None,
    }
}

/// Dispatches `event` into a session and returns the resulting view.
///
/// The session lock is held only for the synchronous dispatch.
fn dispatch(state: &AppState, game_id: Uuid, event: GameEvent) -> Result<GameView, DomainError> {
    let game = state.games.get(game_id)?;
    let delay = feedback_delay(state, &event);

    let mut session = game.lock()?;
    let transition = session.dispatch(event);

    let entered_feedback =
        transition.is_change() && session.get_state().phase == GamePhase::Feedback;
    if let Some(delay) = delay.filter(|_| entered_feedback) {
        schedule_next_question(Arc::clone(&state.games), game_id, session.revision(), delay);
    }

    Ok(GameView::of(game_id, &session, game.time_limit_secs))
}

/// Sends `NextQuestion` after `delay`, unless the game changed since
/// `revision` was taken.
fn schedule_next_question(games: Arc<GameRegistry>, game_id: Uuid, revision: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let Ok(game) = games.get(game_id) else {
            return;
        };
        match game.lock() {
            Ok(mut session) if session.revision() == revision => {
                session.dispatch(GameEvent::NextQuestion);
            }
            Ok(_) => debug!(%game_id, "feedback timer superseded by a later move"),
            Err(e) => warn!(%game_id, error = %e, "auto-advance skipped"),
        }
    });
}

fn lock_view(game_id: Uuid, game: &HostedGame) -> Result<GameView, DomainError> {
    let session = game.lock()?;
    Ok(GameView::of(game_id, &session, game.time_limit_secs))
}

/// POST /
#[instrument(skip(state, request))]
async fn create_game(
    State(state): State<AppState>,
    request: Option<Json<CreateGameRequest>>,
) -> Result<(StatusCode, Json<GameView>), ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let settings = resolve_settings(&request)?;
    let total_questions = settings.total_questions;
    let time_limit_secs = settings.difficulty.map(Difficulty::time_limit_secs);

    let mut session = state.new_session(total_questions);
    session.dispatch(GameEvent::StartGame { total_questions });
    let view = GameView::of(Uuid::nil(), &session, time_limit_secs);
    let game_id = state.games.insert(session, time_limit_secs)?;

    info!(%game_id, total_questions, difficulty = ?settings.difficulty, "game created");

    Ok((StatusCode::CREATED, Json(GameView { game_id, ..view })))
}

/// GET /{game_id}
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let game = state.games.get(game_id)?;
    Ok(Json(lock_view(game_id, &game)?))
}

/// DELETE /{game_id}
#[instrument(skip(state))]
async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.games.remove(game_id)?;
    info!(%game_id, "game deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /{game_id}/hint
#[instrument(skip(state))]
async fn get_hint(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<HintResponse>, ApiError> {
    let game = state.games.get(game_id)?;
    let hint = game.lock()?.get_hint();
    Ok(Json(HintResponse { hint }))
}

/// POST /{game_id}/continent
#[instrument(skip(state, request), fields(continent = %request.continent))]
async fn select_continent(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<SelectContinentRequest>,
) -> Result<Json<GameView>, ApiError> {
    let view = dispatch(&state, game_id, GameEvent::SelectContinent(request.continent))?;
    Ok(Json(view))
}

/// POST /{game_id}/country
#[instrument(skip(state, request), fields(code = %request.code))]
async fn select_country(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<SelectCountryRequest>,
) -> Result<Json<GameView>, ApiError> {
    if !is_valid_country_code(&request.code) {
        return Err(DomainError::Validation(format!(
            "code must be an uppercase ISO alpha-2 or alpha-3 code, got {:?}",
            request.code
        ))
        .into());
    }
    let view = dispatch(&state, game_id, GameEvent::SelectCountry(request.code))?;
    Ok(Json(view))
}

/// POST /{game_id}/answer
#[instrument(skip(state, request))]
async fn submit_answer(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<GameView>, ApiError> {
    let view = dispatch(&state, game_id, GameEvent::SubmitAnswer(request.answer))?;
    Ok(Json(view))
}

/// POST /{game_id}/next
#[instrument(skip(state))]
async fn next_question(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(dispatch(&state, game_id, GameEvent::NextQuestion)?))
}

/// POST /{game_id}/reset
#[instrument(skip(state))]
async fn reset_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(dispatch(&state, game_id, GameEvent::ResetGame)?))
}

/// POST /{game_id}/end
#[instrument(skip(state))]
async fn end_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(dispatch(&state, game_id, GameEvent::EndGame)?))
}

/// Returns the router for game sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_game))
        .route("/{game_id}", get(get_game).delete(delete_game))
        .route("/{game_id}/hint", get(get_hint))
        .route("/{game_id}/continent", post(select_continent))
        .route("/{game_id}/country", post(select_country))
        .route("/{game_id}/answer", post(submit_answer))
        .route("/{game_id}/next", post(next_question))
        .route("/{game_id}/reset", post(reset_game))
        .route("/{game_id}/end", post(end_game))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(total_questions: Option<u32>, difficulty: Option<&str>) -> CreateGameRequest {
        CreateGameRequest {
            total_questions,
            difficulty: difficulty.map(str::to_owned),
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = resolve_settings(&request(None, None)).unwrap();
        assert_eq!(settings.total_questions, 10);
        assert_eq!(settings.difficulty, None);
    }

    #[test]
    fn test_explicit_length_wins_over_difficulty() {
        let settings = resolve_settings(&request(Some(4), Some("hard"))).unwrap();
        assert_eq!(settings.total_questions, 4);
        assert_eq!(settings.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_difficulty_presets() {
        let length = |name| resolve_settings(&request(None, Some(name))).unwrap().total_questions;
        assert_eq!(length("easy"), 10);
        assert_eq!(length("medium"), 15);
        assert_eq!(length("hard"), 20);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected_even_with_length() {
        assert!(matches!(
            resolve_settings(&request(Some(5), Some("insane"))),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_out_of_range_length_is_rejected() {
        assert!(matches!(
            resolve_settings(&request(Some(0), None)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            resolve_settings(&request(Some(MAX_TOTAL_QUESTIONS + 1), None)),
            Err(DomainError::Validation(_))
        ));
    }
}
