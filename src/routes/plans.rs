use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use liftbook_plan::{PlanInput, PlanRow};
use liftbook_shared::Session;
use liftbook_tracking::{AddExerciseInput, PlanDetail};
use serde_json::{Value, json};

use super::AppState;
use crate::{error::AppError, extract::AppJson};

/// GET /plans
pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<PlanRow>>, AppError> {
    Ok(Json(state.plan_query.list(&session).await?))
}

/// POST /plans
pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(input): AppJson<PlanInput>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = state.plan_command.create(&session, input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /plans/{id}
pub async fn detail(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<PlanDetail>, AppError> {
    Ok(Json(state.tracking_query.detail(&session, &id).await?))
}

/// PUT /plans/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(input): AppJson<PlanInput>,
) -> Result<Json<PlanDetail>, AppError> {
    state
        .plan_command
        .update(&session, &id, input, state.reconcile)
        .await?;

    Ok(Json(state.tracking_query.detail(&session, &id).await?))
}

/// POST /plans/{id}/days/{day_id}/exercises
pub async fn add_exercise(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path((id, day_id)): Path<(String, String)>,
    AppJson(input): AppJson<AddExerciseInput>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let exercise_id = state
        .tracking_command
        .add_exercise(&session, &id, &day_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": exercise_id }))))
}
