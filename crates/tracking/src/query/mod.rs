mod detail;
mod log;
mod week;

pub use detail::*;
pub use log::*;
pub use week::*;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
