use liftbook_db::table::Week;
use liftbook_shared::{Error, Session};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;

use crate::WeekRow;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct StartWeekInput {
    /// RFC 3339 timestamp or `YYYY-MM-DD`; now when absent.
    #[serde(default)]
    pub start_date: Option<String>,
}

impl super::Command {
    /// Opens a tracking week. Weeks of the same plan may overlap or share a
    /// start date.
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id, plan_id = %plan_id))]
    pub async fn start_week(
        &self,
        session: &Session,
        plan_id: &str,
        input: StartWeekInput,
    ) -> liftbook_shared::Result<WeekRow> {
        self.ensure_plan_owner(session, plan_id).await?;

        let now = liftbook_shared::now();
        let start_date = match input.start_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => liftbook_shared::parse_start_date(value)?,
            _ => now,
        };

        let week = WeekRow {
            id: Ulid::new().to_string(),
            plan_id: plan_id.to_owned(),
            start_date,
            is_locked: false,
            created_at: now,
        };

        let (sql, values) = Query::insert()
            .into_table(Week::Table)
            .columns([
                Week::Id,
                Week::PlanId,
                Week::StartDate,
                Week::IsLocked,
                Week::CreatedAt,
            ])
            .values_panic([
                week.id.as_str().into(),
                week.plan_id.as_str().into(),
                week.start_date.into(),
                week.is_locked.into(),
                week.created_at.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(week_id = %week.id, start_date, "week started");

        Ok(week)
    }

    /// Locks a week for good. Locking a locked week succeeds without change.
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id, plan_id = %plan_id, week_id = %week_id))]
    pub async fn lock_week(
        &self,
        session: &Session,
        plan_id: &str,
        week_id: &str,
    ) -> liftbook_shared::Result<()> {
        self.ensure_plan_owner(session, plan_id).await?;

        let (sql, values) = Query::update()
            .table(Week::Table)
            .value(Week::IsLocked, true)
            .and_where(Expr::col(Week::Id).eq(week_id))
            .and_where(Expr::col(Week::PlanId).eq(plan_id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("week"));
        }

        tracing::info!("week locked");

        Ok(())
    }
}
