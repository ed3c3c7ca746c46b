use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use liftbook_identity::{LoginInput, RegisterInput, UpdatePasswordInput, generate_jwt};
use liftbook_shared::{Error, Session};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::{
    error::AppError,
    extract::AppJson,
    middleware::{AUTH_COOKIE_NAME, build_cookie},
};

#[derive(Deserialize)]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct PasswordInput {
    pub password: String,
    pub confirm_password: String,
}

fn session_cookie(
    state: &AppState,
    user_id: &str,
    email: &str,
) -> Result<Cookie<'static>, AppError> {
    let token = generate_jwt(
        user_id,
        email,
        &state.jwt_secret,
        state.jwt_expiration_days,
    )
    .map_err(Error::Unknown)?;

    Ok(build_cookie(token))
}

/// POST /register
#[tracing::instrument(skip_all, fields(email = %input.email))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<CredentialsInput>,
) -> Result<Response, AppError> {
    let id = state
        .identity
        .register(RegisterInput {
            email: input.email.to_owned(),
            password: input.password,
        })
        .await?;

    let cookie = session_cookie(&state, &id, &input.email)?;

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(json!({ "id": id })),
    )
        .into_response())
}

/// POST /login
#[tracing::instrument(skip_all, fields(email = %input.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<CredentialsInput>,
) -> Result<Response, AppError> {
    let id = match state
        .identity
        .login(LoginInput {
            email: input.email.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(id) => id,
        Err(Error::Server(message)) => return Err(AppError::Unauthorized(message)),
        Err(e) => return Err(e.into()),
    };

    let cookie = session_cookie(&state, &id, &input.email)?;

    Ok((jar.add(cookie), Json(json!({ "id": id }))).into_response())
}

/// POST /logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        jar.remove(Cookie::build(AUTH_COOKIE_NAME).path("/")),
    )
}

/// POST /update-password
pub async fn update_password(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(input): AppJson<PasswordInput>,
) -> Result<StatusCode, AppError> {
    state
        .identity
        .update_password(
            &session,
            UpdatePasswordInput {
                password: input.password,
                confirm_password: input.confirm_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
