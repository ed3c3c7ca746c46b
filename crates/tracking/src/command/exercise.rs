use liftbook_db::table::Exercise;
use liftbook_shared::{Error, Session};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::repository;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddExerciseInput {
    #[validate(length(min = 1, message = "Exercise name is required"))]
    pub name: String,
    pub sets: u32,
    pub reps: String,
}

impl super::Command {
    /// Appends an exercise to a plan day at any point of the cycle. Logs of
    /// earlier weeks are left as they are.
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id, plan_id = %plan_id, day_id = %day_id))]
    pub async fn add_exercise(
        &self,
        session: &Session,
        plan_id: &str,
        day_id: &str,
        input: AddExerciseInput,
    ) -> liftbook_shared::Result<String> {
        input.validate()?;
        self.ensure_plan_owner(session, plan_id).await?;

        let mut tx = self.write_db.begin().await?;

        if !repository::is_plan_day(&mut tx, plan_id, day_id).await? {
            return Err(Error::NotFound("plan day"));
        }

        let id = Ulid::new().to_string();
        let position = repository::next_position(&mut tx, day_id).await?;

        let (sql, values) = Query::insert()
            .into_table(Exercise::Table)
            .columns([
                Exercise::Id,
                Exercise::DayId,
                Exercise::Name,
                Exercise::Sets,
                Exercise::Reps,
                Exercise::Position,
                Exercise::CreatedAt,
            ])
            .values_panic([
                id.as_str().into(),
                day_id.into(),
                input.name.into(),
                input.sets.into(),
                input.reps.into(),
                position.into(),
                liftbook_shared::now().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!(exercise_id = %id, position, "exercise added");

        Ok(id)
    }
}
