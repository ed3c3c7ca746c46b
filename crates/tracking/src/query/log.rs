use liftbook_db::table::Log;
use liftbook_shared::Difficulty;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Serialize, Serializer};
use sqlx::{prelude::FromRow, types::Text};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LogRow {
    pub week_id: String,
    pub exercise_id: String,
    pub day_number: u32,
    pub weight_lifted: String,
    pub sets: u32,
    pub reps: String,
    pub notes: String,
    #[serde(serialize_with = "serialize_difficulty")]
    pub difficulty: Option<Text<Difficulty>>,
    pub updated_at: u64,
}

impl LogRow {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_ref().map(|d| d.0)
    }
}

fn serialize_difficulty<S: Serializer>(
    value: &Option<Text<Difficulty>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.as_ref().map(|d| d.0).serialize(serializer)
}

fn select_log() -> SelectStatement {
    sea_query::Query::select()
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
        .from(Log::Table)
        .to_owned()
}

impl super::Query {
    /// Logs of the given weeks ordered by week, day and exercise.
    pub async fn logs(&self, week_ids: &[String]) -> liftbook_shared::Result<Vec<LogRow>> {
        if week_ids.is_empty() {
            return Ok(vec![]);
        }

        let (sql, values) = select_log()
            .and_where(Expr::col(Log::WeekId).is_in(week_ids.iter().map(String::as_str)))
            .order_by(Log::WeekId, Order::Asc)
            .order_by(Log::DayNumber, Order::Asc)
            .order_by(Log::ExerciseId, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, LogRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find_log(
        &self,
        week_id: &str,
        exercise_id: &str,
        day_number: u32,
    ) -> liftbook_shared::Result<Option<LogRow>> {
        let (sql, values) = select_log()
            .and_where(Expr::col(Log::WeekId).eq(week_id))
            .and_where(Expr::col(Log::ExerciseId).eq(exercise_id))
            .and_where(Expr::col(Log::DayNumber).eq(day_number))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, LogRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
