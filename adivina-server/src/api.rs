use crate::game::{HintOutcome, SharedState};
use adivina_data::{
    api::{
        GuessBody, GuessReply, HintInfo, HintRequest, HintResponse, StatsReply, ALL_HINTS_USED,
        HINT_FAILURE, MAX_HINTS, MISSING_WORD,
    },
    DerivedStats, DifficultyConfig, GameView, StatsLedger,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewGameQuery {
    difficulty: Option<String>,
}

pub async fn create_game(
    State(state): State<SharedState>,
    Query(query): Query<NewGameQuery>,
) -> Result<(StatusCode, Json<GameView>), StatusCode> {
    let config = DifficultyConfig::resolve(query.difficulty.as_deref().unwrap_or(""));
    match state.host.start(config).await {
        Some(view) => Ok((StatusCode::CREATED, Json(view))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn get_game(State(state): State<SharedState>) -> Result<Json<GameView>, StatusCode> {
    state.host.view().await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn submit_guess(
    State(state): State<SharedState>,
    Json(GuessBody { guess }): Json<GuessBody>,
) -> Result<Json<GuessReply>, StatusCode> {
    let (result, game) = state.host.guess(&guess).await.ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(GuessReply { result, game }))
}

/// Hint round trip for the live round
pub async fn game_hint(
    State(state): State<SharedState>,
) -> Result<(StatusCode, Json<HintResponse>), StatusCode> {
    let reply = match state.host.hint().await.ok_or(StatusCode::NOT_FOUND)? {
        HintOutcome::Delivered(response) => (StatusCode::OK, Json(response)),
        HintOutcome::Unavailable { used } => (
            StatusCode::OK,
            Json(HintResponse {
                hint: ALL_HINTS_USED.to_string(),
                used,
                max: MAX_HINTS,
            }),
        ),
        HintOutcome::Expired => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HintResponse {
                hint: HINT_FAILURE.to_string(),
                used: 0,
                max: MAX_HINTS,
            }),
        ),
    };
    Ok(reply)
}

/// Stateless hint lookup: `{ word, hintsUsed }` in, `{ hint, used, max }` out
pub async fn request_hint(
    State(state): State<SharedState>,
    Json(HintRequest { word, hints_used }): Json<HintRequest>,
) -> (StatusCode, Json<HintResponse>) {
    if word.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(HintResponse {
                hint: MISSING_WORD.to_string(),
                used: hints_used,
                max: MAX_HINTS,
            }),
        );
    }
    if hints_used >= MAX_HINTS {
        return (
            StatusCode::OK,
            Json(HintResponse {
                hint: ALL_HINTS_USED.to_string(),
                used: MAX_HINTS,
                max: MAX_HINTS,
            }),
        );
    }
    (StatusCode::OK, Json(state.hints.hint(&word, hints_used + 1).await))
}

pub async fn hint_info(State(state): State<SharedState>) -> Json<HintInfo> {
    Json(HintInfo {
        message: "API de pistas del juego \"Adivina la Palabra\"".to_string(),
        usage: "POST con { word, hintsUsed }".to_string(),
        max_hints: MAX_HINTS,
        ai_enabled: state.hints.ai_enabled(),
        note: "En modo offline las pistas vienen predefinidas. Active ai_hints para usar IA real."
            .to_string(),
    })
}

pub async fn get_stats(State(state): State<SharedState>) -> Json<StatsReply> {
    let stats = state.stats.snapshot().await;
    let derived = DerivedStats::from(&stats);
    Json(StatsReply { stats, derived })
}

pub async fn reset_stats(State(state): State<SharedState>) -> StatusCode {
    state.stats.reset().await;
    StatusCode::NO_CONTENT
}
