use liftbook_db::table::Week;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::repository;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeekRow {
    pub id: String,
    pub plan_id: String,
    pub start_date: u64,
    pub is_locked: bool,
    pub created_at: u64,
}

impl super::Query {
    /// Weeks of a plan, latest start date first.
    pub async fn weeks(&self, plan_id: &str) -> liftbook_shared::Result<Vec<WeekRow>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                Week::Id,
                Week::PlanId,
                Week::StartDate,
                Week::IsLocked,
                Week::CreatedAt,
            ])
            .from(Week::Table)
            .and_where(Expr::col(Week::PlanId).eq(plan_id))
            .order_by(Week::StartDate, Order::Desc)
            .order_by(Week::CreatedAt, Order::Desc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, WeekRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find_week(
        &self,
        plan_id: &str,
        week_id: &str,
    ) -> liftbook_shared::Result<Option<WeekRow>> {
        repository::find_week(&self.0, plan_id, week_id).await
    }
}
