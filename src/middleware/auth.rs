use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use liftbook_identity::validate_jwt;
use liftbook_shared::Session;

use crate::routes::AppState;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// HTTP-only cookie carrying the session token.
pub fn build_cookie<'a>(token: String) -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Validates the JWT from the `auth_token` cookie, checks the user still
/// exists and inserts the [`Session`] extension.
///
/// Redirects to /login when the token is missing, invalid, or belongs to an
/// unknown user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = jar.get(AUTH_COOKIE_NAME).map(|cookie| cookie.value()) else {
        tracing::warn!("missing auth_token cookie, redirecting to login");
        return Redirect::to("/login").into_response();
    };

    let claims = match validate_jwt(token, &state.jwt_secret) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("invalid JWT token: {e}, redirecting to login");
            return Redirect::to("/login").into_response();
        }
    };

    match state.identity.find(&claims.sub).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(Session::new(user.id));
            next.run(req).await
        }
        Ok(None) => {
            tracing::warn!(user_id = %claims.sub, "user not found, redirecting to login");
            Redirect::to("/login").into_response()
        }
        Err(e) => {
            tracing::error!("failed to load session user: {e}");
            Redirect::to("/login").into_response()
        }
    }
}
