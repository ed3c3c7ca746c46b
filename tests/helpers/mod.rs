use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use liftbook::{
    AppState, Config,
    config::{DatabaseConfig, JwtConfig, ObservabilityConfig, PlanConfig, ServerConfig},
};
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `auth_token=...` pair from the Set-Cookie header.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("auth_token="))
            .and_then(|value| value.split(';').next())
            .map(str::to_owned)
    }
}

pub fn test_config(prune_removed_on_edit: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
        },
        observability: ObservabilityConfig::default(),
        plan: PlanConfig {
            prune_removed_on_edit,
        },
    }
}

pub async fn spawn_app(prune_removed_on_edit: bool) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let mut config = test_config(prune_removed_on_edit);
    config.database.url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());

    let write_db = liftbook::db::create_write_pool(&config.database.url).await?;
    liftbook::migrate::run_migrations(&write_db).await?;
    let read_db =
        liftbook::db::create_read_pool(&config.database.url, config.database.max_connections)
            .await?;

    Ok(TestApp {
        router: liftbook::router(AppState::new(read_db, write_db, &config)),
        _dir: dir,
    })
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    /// Registers a user and returns its session cookie.
    pub async fn register(&self, email: &str) -> anyhow::Result<String> {
        let response = self
            .request(
                Method::POST,
                "/register",
                None,
                Some(serde_json::json!({ "email": email, "password": "secret123" })),
            )
            .await?;

        assert_eq!(response.status, StatusCode::CREATED);

        response
            .session_cookie()
            .ok_or_else(|| anyhow::anyhow!("missing auth_token cookie"))
    }
}
