use liftbook_db::table::Plan;
use liftbook_shared::Session;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub days_per_week: u32,
    pub created_at: u64,
}

fn select_plan(user_id: &str) -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Plan::Id,
            Plan::UserId,
            Plan::Name,
            Plan::DaysPerWeek,
            Plan::CreatedAt,
        ])
        .from(Plan::Table)
        .and_where(Expr::col(Plan::UserId).eq(user_id))
        .to_owned()
}

impl super::Query {
    /// Plans of the session owner, newest first.
    pub async fn list(&self, session: &Session) -> liftbook_shared::Result<Vec<PlanRow>> {
        let (sql, values) = select_plan(&session.user_id)
            .order_by(Plan::CreatedAt, Order::Desc)
            .order_by(Plan::Id, Order::Desc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// A plan is only visible to its owner; any other id yields `None`.
    pub async fn find(
        &self,
        session: &Session,
        id: &str,
    ) -> liftbook_shared::Result<Option<PlanRow>> {
        let (sql, values) = select_plan(&session.user_id)
            .and_where(Expr::col(Plan::Id).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
