use liftbook_db::table::{Exercise, Log, Plan, PlanDay, Week};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteConnection;
use ulid::Ulid;

use crate::ExerciseInput;

fn plan_day_ids(plan_id: &str) -> SelectStatement {
    Query::select()
        .column(PlanDay::Id)
        .from(PlanDay::Table)
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .to_owned()
}

pub(crate) async fn insert_plan(
    conn: &mut SqliteConnection,
    id: &str,
    user_id: &str,
    name: &str,
    days_per_week: u32,
    created_at: u64,
) -> liftbook_shared::Result<()> {
    let (sql, values) = Query::insert()
        .into_table(Plan::Table)
        .columns([
            Plan::Id,
            Plan::UserId,
            Plan::Name,
            Plan::DaysPerWeek,
            Plan::CreatedAt,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            name.into(),
            days_per_week.into(),
            created_at.into(),
        ])
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn update_plan(
    conn: &mut SqliteConnection,
    id: &str,
    user_id: &str,
    name: &str,
    days_per_week: u32,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::update()
        .table(Plan::Table)
        .values([
            (Plan::Name, name.into()),
            (Plan::DaysPerWeek, days_per_week.into()),
        ])
        .and_where(Expr::col(Plan::Id).eq(id))
        .and_where(Expr::col(Plan::UserId).eq(user_id))
        .build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn insert_day(
    conn: &mut SqliteConnection,
    plan_id: &str,
    day_order: u32,
    headline: &str,
) -> liftbook_shared::Result<String> {
    let id = Ulid::new().to_string();
    let (sql, values) = Query::insert()
        .into_table(PlanDay::Table)
        .columns([
            PlanDay::Id,
            PlanDay::PlanId,
            PlanDay::DayOrder,
            PlanDay::Headline,
        ])
        .values_panic([
            id.as_str().into(),
            plan_id.into(),
            day_order.into(),
            headline.into(),
        ])
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(id)
}

pub(crate) async fn update_day(
    conn: &mut SqliteConnection,
    id: &str,
    plan_id: &str,
    day_order: u32,
    headline: &str,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::update()
        .table(PlanDay::Table)
        .values([
            (PlanDay::DayOrder, day_order.into()),
            (PlanDay::Headline, headline.into()),
        ])
        .and_where(Expr::col(PlanDay::Id).eq(id))
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected() > 0)
}

/// Moves every day of the plan to a negative order so submitted days can take
/// positions 1..N without tripping the unique (plan_id, day_order) index.
pub(crate) async fn park_days(
    conn: &mut SqliteConnection,
    plan_id: &str,
) -> liftbook_shared::Result<()> {
    let (sql, values) = Query::update()
        .table(PlanDay::Table)
        .value(PlanDay::DayOrder, Expr::col(PlanDay::DayOrder).mul(-1))
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn reorder_day(
    conn: &mut SqliteConnection,
    id: &str,
    day_order: u32,
) -> liftbook_shared::Result<()> {
    let (sql, values) = Query::update()
        .table(PlanDay::Table)
        .value(PlanDay::DayOrder, day_order)
        .and_where(Expr::col(PlanDay::Id).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

/// Days still parked after reconciliation, in their previous order.
pub(crate) async fn parked_days(
    conn: &mut SqliteConnection,
    plan_id: &str,
) -> liftbook_shared::Result<Vec<String>> {
    let (sql, values) = Query::select()
        .column(PlanDay::Id)
        .from(PlanDay::Table)
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .and_where(Expr::col(PlanDay::DayOrder).lt(0))
        .order_by(PlanDay::DayOrder, Order::Desc)
        .build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_all(conn)
        .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

pub(crate) async fn delete_parked_days(
    conn: &mut SqliteConnection,
    plan_id: &str,
) -> liftbook_shared::Result<u64> {
    let (sql, values) = Query::delete()
        .from_table(PlanDay::Table)
        .and_where(Expr::col(PlanDay::PlanId).eq(plan_id))
        .and_where(Expr::col(PlanDay::DayOrder).lt(0))
        .build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected())
}

pub(crate) async fn insert_exercise(
    conn: &mut SqliteConnection,
    day_id: &str,
    position: u32,
    input: &ExerciseInput,
    created_at: u64,
) -> liftbook_shared::Result<String> {
    let id = Ulid::new().to_string();
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
            input.name.as_str().into(),
            input.sets.into(),
            input.reps.as_str().into(),
            position.into(),
            created_at.into(),
        ])
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(id)
}

/// Rewrites an exercise in place. The exercise may move to another day, but
/// only within the same plan.
pub(crate) async fn update_exercise(
    conn: &mut SqliteConnection,
    id: &str,
    plan_id: &str,
    day_id: &str,
    position: u32,
    input: &ExerciseInput,
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::update()
        .table(Exercise::Table)
        .values([
            (Exercise::DayId, day_id.into()),
            (Exercise::Name, input.name.as_str().into()),
            (Exercise::Sets, input.sets.into()),
            (Exercise::Reps, input.reps.as_str().into()),
            (Exercise::Position, position.into()),
        ])
        .and_where(Expr::col(Exercise::Id).eq(id))
        .and_where(Expr::col(Exercise::DayId).in_subquery(plan_day_ids(plan_id)))
        .build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn delete_exercises_except(
    conn: &mut SqliteConnection,
    plan_id: &str,
    keep: &[String],
) -> liftbook_shared::Result<u64> {
    let (sql, values) = Query::delete()
        .from_table(Exercise::Table)
        .and_where(Expr::col(Exercise::DayId).in_subquery(plan_day_ids(plan_id)))
        .and_where(Expr::col(Exercise::Id).is_not_in(keep.iter().map(String::as_str)))
        .build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected())
}

/// Exercises of a day that the submission left out, in their previous order.
pub(crate) async fn leftover_exercises(
    conn: &mut SqliteConnection,
    day_id: &str,
    keep: &[String],
) -> liftbook_shared::Result<Vec<String>> {
    let (sql, values) = Query::select()
        .column(Exercise::Id)
        .from(Exercise::Table)
        .and_where(Expr::col(Exercise::DayId).eq(day_id))
        .and_where(Expr::col(Exercise::Id).is_not_in(keep.iter().map(String::as_str)))
        .order_by(Exercise::Position, Order::Asc)
        .order_by(Exercise::CreatedAt, Order::Asc)
        .build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_all(conn)
        .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

pub(crate) async fn reposition_exercise(
    conn: &mut SqliteConnection,
    id: &str,
    position: u32,
) -> liftbook_shared::Result<()> {
    let (sql, values) = Query::update()
        .table(Exercise::Table)
        .value(Exercise::Position, position)
        .and_where(Expr::col(Exercise::Id).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

/// Whether any exercise of the plan outside `keep` has a log in a locked week.
pub(crate) async fn has_locked_logs_except(
    conn: &mut SqliteConnection,
    plan_id: &str,
    keep: &[String],
) -> liftbook_shared::Result<bool> {
    let (sql, values) = Query::select()
        .column(Log::ExerciseId)
        .from(Log::Table)
        .and_where(
            Expr::col(Log::WeekId).in_subquery(
                Query::select()
                    .column(Week::Id)
                    .from(Week::Table)
                    .and_where(Expr::col(Week::PlanId).eq(plan_id))
                    .and_where(Expr::col(Week::IsLocked).eq(true))
                    .to_owned(),
            ),
        )
        .and_where(
            Expr::col(Log::ExerciseId).in_subquery(
                Query::select()
                    .column(Exercise::Id)
                    .from(Exercise::Table)
                    .and_where(Expr::col(Exercise::DayId).in_subquery(plan_day_ids(plan_id)))
                    .and_where(Expr::col(Exercise::Id).is_not_in(keep.iter().map(String::as_str)))
                    .to_owned(),
            ),
        )
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(conn)
        .await?;

    Ok(row.is_some())
}
