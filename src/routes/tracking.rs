use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use liftbook_shared::{Error, Session};
use liftbook_tracking::{LogRow, SaveLogInput, StartWeekInput, WeekRow};

use super::AppState;
use crate::{error::AppError, extract::AppJson};

/// POST /plans/{id}/weeks
pub async fn start_week(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(input): AppJson<StartWeekInput>,
) -> Result<(StatusCode, Json<WeekRow>), AppError> {
    let week = state
        .tracking_command
        .start_week(&session, &id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(week)))
}

/// POST /plans/{id}/weeks/{week_id}/lock
pub async fn lock_week(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path((id, week_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state
        .tracking_command
        .lock_week(&session, &id, &week_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /plans/{id}/weeks/{week_id}/logs
pub async fn save_log(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path((id, week_id)): Path<(String, String)>,
    AppJson(input): AppJson<SaveLogInput>,
) -> Result<Json<LogRow>, AppError> {
    let exercise_id = input.exercise_id.to_owned();
    let day_number = input.day_number;

    state
        .tracking_command
        .save_log(&session, &id, &week_id, input)
        .await?;

    let log = state
        .tracking_query
        .find_log(&week_id, &exercise_id, day_number)
        .await?
        .ok_or(Error::NotFound("log"))?;

    Ok(Json(log))
}
