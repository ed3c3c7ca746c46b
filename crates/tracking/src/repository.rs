use liftbook_db::table::{Exercise, Plan, PlanDay, Week};
use sea_query::{Expr, ExprTrait, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use crate::WeekRow;

pub(crate) async fn is_plan_owner(
    pool: &SqlitePool,
    user_id: &str,
    plan_id: &str,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::select()
        .column(Plan::Id)
        .from(Plan::Table)
        .and_where(Expr::col(Plan::Id).eq(plan_id))
        .and_where(Expr::col(Plan::UserId).eq(user_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn is_plan_exercise(
    pool: &SqlitePool,
    plan_id: &str,
    exercise_id: &str,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::select()
        .column(Exercise::Id)
        .from(Exercise::Table)
        .and_where(Expr::col(Exercise::Id).eq(exercise_id))
        .and_where(
            Expr::col(Exercise::DayId).in_subquery(
                Query::select()
                    .column(PlanDay::Id)
                    .from(PlanDay::Table)
                    .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
                    .to_owned(),
            ),
        )
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn is_plan_day(
    conn: &mut SqliteConnection,
    plan_id: &str,
    day_id: &str,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::select()
        .column(PlanDay::Id)
        .from(PlanDay::Table)
        .and_where(Expr::col(PlanDay::Id).eq(day_id))
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(conn)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn find_week(
    pool: &SqlitePool,
    plan_id: &str,
    week_id: &str,
) -> liftbook_shared::Result<Option<WeekRow>> {
    let (sql, values) = Query::select()
        .columns([
            Week::Id,
            Week::PlanId,
            Week::StartDate,
            Week::IsLocked,
            Week::CreatedAt,
        ])
        .from(Week::Table)
        .and_where(Expr::col(Week::Id).eq(week_id))
        .and_where(Expr::col(Week::PlanId).eq(plan_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, WeekRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Next free position at the end of a day.
pub(crate) async fn next_position(
    conn: &mut SqliteConnection,
    day_id: &str,
) -> liftbook_shared::Result<u32> {
    let (sql, values) = Query::select()
        .expr(Func::max(Expr::col(Exercise::Position)))
        .from(Exercise::Table)
        .and_where(Expr::col(Exercise::DayId).eq(day_id))
        .build_sqlx(SqliteQueryBuilder);

    let (max,) = sqlx::query_as_with::<_, (Option<u32>,), _>(&sql, values)
        .fetch_one(conn)
        .await?;

    Ok(max.unwrap_or(0) + 1)
}
