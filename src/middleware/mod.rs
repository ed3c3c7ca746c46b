pub mod auth;

pub use auth::{AUTH_COOKIE_NAME, auth_middleware, build_cookie};
