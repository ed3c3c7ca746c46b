use liftbook_shared::{Error, Session};
use sqlx::SqlitePool;

use crate::repository;

mod exercise;
mod log;
mod week;

pub use exercise::AddExerciseInput;
pub use log::SaveLogInput;
pub use week::StartWeekInput;

#[derive(Clone)]
pub struct Command {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    async fn ensure_plan_owner(
        &self,
        session: &Session,
        plan_id: &str,
    ) -> liftbook_shared::Result<()> {
        if !repository::is_plan_owner(&self.read_db, &session.user_id, plan_id).await? {
            tracing::warn!(user_id = %session.user_id, plan_id, "plan not owned by session");
            return Err(Error::NotFound("plan"));
        }

        Ok(())
    }
}
