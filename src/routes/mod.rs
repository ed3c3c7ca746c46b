use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::middleware::auth_middleware;

mod auth;
mod health;
mod plans;
mod tracking;

#[derive(Clone)]
pub struct AppState {
    pub read_db: SqlitePool,
    pub identity: liftbook_identity::Command,
    pub plan_command: liftbook_plan::Command,
    pub plan_query: liftbook_plan::Query,
    pub tracking_command: liftbook_tracking::Command,
    pub tracking_query: liftbook_tracking::Query,
    pub jwt_secret: String,
    pub jwt_expiration_days: i64,
    pub reconcile: liftbook_plan::ReconcileOptions,
}

impl AppState {
    pub fn new(
        read_db: SqlitePool,
        write_db: SqlitePool,
        config: &crate::config::Config,
    ) -> Self {
        Self {
            identity: liftbook_identity::Command::new(read_db.clone(), write_db.clone()),
            plan_command: liftbook_plan::Command::new(read_db.clone(), write_db.clone()),
            plan_query: liftbook_plan::Query(read_db.clone()),
            tracking_command: liftbook_tracking::Command::new(read_db.clone(), write_db),
            tracking_query: liftbook_tracking::Query(read_db.clone()),
            read_db,
            jwt_secret: config.jwt.secret.to_owned(),
            jwt_expiration_days: config.jwt.expiration_days,
            reconcile: config.reconcile_options(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/update-password", post(auth::update_password))
        .route("/plans", get(plans::list).post(plans::create))
        .route("/plans/{id}", get(plans::detail).put(plans::update))
        .route(
            "/plans/{id}/days/{day_id}/exercises",
            post(plans::add_exercise),
        )
        .route("/plans/{id}/weeks", post(tracking::start_week))
        .route(
            "/plans/{id}/weeks/{week_id}/lock",
            post(tracking::lock_week),
        )
        .route("/plans/{id}/weeks/{week_id}/logs", put(tracking::save_log))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.read_db.clone())
        .merge(
            Router::new()
                .route("/register", post(auth::register))
                .route("/login", post(auth::login))
                .route("/logout", post(auth::logout))
                .merge(protected)
                .with_state(state),
        )
        .layer(TraceLayer::new_for_http())
}
