use crate::day;
use crate::errors::AppError;
use crate::gate;
use crate::models::{
    RankingSubmission, SessionResponse, SubmitRequest, SubmitResponse, TodayQuery, TodayResponse,
};
use crate::quiz;
use crate::state::AppState;
use crate::storage::persist_gate;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, header::USER_AGENT},
    response::Html,
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let label = day::date_label(Utc::now(), state.timezone);
    Html(render_index(&label))
}

pub async fn create_session() -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: gate::mint_session_id(),
    })
}

pub async fn today(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<TodayResponse>, AppError> {
    let now = Utc::now();
    let day = day::day_index_at(now, state.epoch, state.timezone);
    let entry = state.catalog.lookup(day).ok_or_else(|| {
        info!(day, "no catalog entry for today");
        AppError::NoQuizForToday
    })?;

    let already_submitted = match query.session_id.as_deref() {
        Some(session_id) if !session_id.is_empty() => {
            state.gate.lock().await.has_submitted(session_id, day)
        }
        _ => false,
    };

    Ok(Json(TodayResponse {
        date: day::date_label(now, state.timezone),
        day,
        category: entry.category.clone(),
        items: quiz::shuffled(&entry.items),
        already_submitted,
    }))
}

pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let session_id = request.session_id.trim();
    if session_id.is_empty() {
        return Err(AppError::MissingSession);
    }

    // The day index is recomputed here; the payload never carries a
    // client-supplied value.
    let day = day::current_day_index(state.epoch, state.timezone);
    let entry = state
        .catalog
        .lookup(day)
        .ok_or(AppError::NoQuizForToday)?;
    quiz::validate_rankings(&entry.items, &request.rankings)?;

    if state.gate.lock().await.has_submitted(session_id, day) {
        return Err(AppError::AlreadySubmitted { day });
    }

    let submission = RankingSubmission {
        timestamp: Utc::now().to_rfc3339(),
        day,
        category: entry.category.clone(),
        rankings: request.rankings,
        session_id: session_id.to_string(),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    };

    state.sink.submit(&submission).await?;

    let mut gate = state.gate.lock().await;
    gate.mark_submitted(session_id, day);
    persist_gate(&state.gate_path, &gate).await?;
    info!(day, session = %submission.session_id, "ranking submission recorded");

    Ok(Json(SubmitResponse {
        day,
        recorded: true,
    }))
}
