mod day;
mod plan;

pub use day::*;
pub use plan::*;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
