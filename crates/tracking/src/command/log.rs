use liftbook_db::table::{Log, Week};
use liftbook_shared::{Difficulty, Error, Session};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::repository;

/// Full record of one logged exercise. Saving replaces every field of the
/// stored log.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveLogInput {
    pub exercise_id: String,
    #[validate(range(min = 1, message = "Day number must be at least 1"))]
    pub day_number: u32,
    #[serde(default)]
    pub weight_lifted: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "liftbook_shared::optional_difficulty")]
    pub difficulty: Option<Difficulty>,
}

impl super::Command {
    #[tracing::instrument(
        skip_all,
        fields(user_id = %session.user_id, plan_id = %plan_id, week_id = %week_id, exercise_id = %input.exercise_id, day_number = input.day_number)
    )]
    pub async fn save_log(
        &self,
        session: &Session,
        plan_id: &str,
        week_id: &str,
        input: SaveLogInput,
    ) -> liftbook_shared::Result<()> {
        input.validate()?;
        self.ensure_plan_owner(session, plan_id).await?;

        if !repository::is_plan_exercise(&self.read_db, plan_id, &input.exercise_id).await? {
            return Err(Error::NotFound("exercise"));
        }

        let updated_at = liftbook_shared::now();

        // The row comes from the week itself, so a locked week selects nothing
        // and the lock check and write happen in one statement.
        let unlocked_week = Query::select()
            .column(Week::Id)
            .exprs([
                Expr::val(input.exercise_id.as_str()),
                Expr::val(input.day_number),
                Expr::val(input.weight_lifted.as_str()),
                Expr::val(input.sets),
                Expr::val(input.reps.as_str()),
                Expr::val(input.notes.as_str()),
                Expr::val(input.difficulty.map(|d| d.to_string())),
                Expr::val(updated_at),
            ])
            .from(Week::Table)
            .and_where(Expr::col(Week::Id).eq(week_id))
            .and_where(Expr::col(Week::PlanId).eq(plan_id))
            .and_where(Expr::col(Week::IsLocked).eq(false))
            .to_owned();

        let (sql, values) = Query::insert()
            .into_table(Log::Table)
            .columns([
                Log::WeekId,
                Log::ExerciseId,
                Log::DayNumber,
                Log::WeightLifted,
                Log::Sets,
                Log::Reps,
                Log::Notes,
                Log::Difficulty,
                Log::UpdatedAt,
            ])
            .select_from(unlocked_week)?
            .on_conflict(
                OnConflict::columns([Log::WeekId, Log::ExerciseId, Log::DayNumber])
                    .update_columns([
                        Log::WeightLifted,
                        Log::Sets,
                        Log::Reps,
                        Log::Notes,
                        Log::Difficulty,
                        Log::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        match repository::find_week(&self.read_db, plan_id, week_id).await? {
            None => Err(Error::NotFound("week")),
            Some(week) if week.is_locked => {
                tracing::warn!("log rejected, week is locked");
                Err(Error::LockedWeek)
            }
            Some(_) => liftbook_shared::bail!("Log could not be saved"),
        }
    }
}
