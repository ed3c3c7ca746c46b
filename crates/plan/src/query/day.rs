use std::collections::HashMap;

use liftbook_db::table::{Exercise, PlanDay};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanDayRow {
    pub id: String,
    pub plan_id: String,
    pub day_order: u32,
    pub headline: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ExerciseRow {
    pub id: String,
    pub day_id: String,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub position: u32,
    pub created_at: u64,
}

/// A plan day with its exercises in display order.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDayView {
    #[serde(flatten)]
    pub day: PlanDayRow,
    pub exercises: Vec<ExerciseRow>,
}

impl super::Query {
    /// Days of a plan ordered by `day_order`, each with its exercises ordered
    /// by position then creation time.
    pub async fn days(&self, plan_id: &str) -> liftbook_shared::Result<Vec<PlanDayView>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                PlanDay::Id,
                PlanDay::PlanId,
                PlanDay::DayOrder,
                PlanDay::Headline,
            ])
            .from(PlanDay::Table)
            .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
            .order_by(PlanDay::DayOrder, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let days = sqlx::query_as_with::<_, PlanDayRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        if days.is_empty() {
            return Ok(vec![]);
        }

        let (sql, values) = sea_query::Query::select()
            .columns([
                Exercise::Id,
                Exercise::DayId,
                Exercise::Name,
                Exercise::Sets,
                Exercise::Reps,
                Exercise::Position,
                Exercise::CreatedAt,
            ])
            .from(Exercise::Table)
            .and_where(Expr::col(Exercise::DayId).is_in(days.iter().map(|d| d.id.as_str())))
            .order_by(Exercise::Position, Order::Asc)
            .order_by(Exercise::CreatedAt, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let exercises = sqlx::query_as_with::<_, ExerciseRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut by_day: HashMap<String, Vec<ExerciseRow>> = HashMap::new();
        for exercise in exercises {
            by_day
                .entry(exercise.day_id.to_owned())
                .or_default()
                .push(exercise);
        }

        Ok(days
            .into_iter()
            .map(|day| PlanDayView {
                exercises: by_day.remove(&day.id).unwrap_or_default(),
                day,
            })
            .collect())
    }
}
