use std::{path::PathBuf, str::FromStr};

use liftbook_identity::RegisterInput;
use liftbook_plan::{DayInput, ExerciseInput, PlanInput};
use liftbook_shared::{Difficulty, Session};
use liftbook_tracking::SaveLogInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct State {
    pub command: liftbook_tracking::Command,
    pub query: liftbook_tracking::Query,
    pub plan: liftbook_plan::Command,
    pub identity: liftbook_identity::Command,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    liftbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State {
        command: liftbook_tracking::Command::new(pool.clone(), pool.clone()),
        query: liftbook_tracking::Query(pool.clone()),
        plan: liftbook_plan::Command::new(pool.clone(), pool.clone()),
        identity: liftbook_identity::Command::new(pool.clone(), pool),
    })
}

pub async fn create_session(state: &State, email: &str) -> anyhow::Result<Session> {
    let id = state
        .identity
        .register(RegisterInput {
            email: email.to_owned(),
            password: "secret123".to_owned(),
        })
        .await?;

    Ok(Session::new(id))
}

/// Creates "Push Pull Legs" with one "Bench Press" (5x5) per day.
pub async fn create_plan(state: &State, session: &Session) -> anyhow::Result<String> {
    let days = ["Push", "Pull", "Legs"]
        .into_iter()
        .map(|headline| DayInput {
            id: None,
            headline: headline.to_owned(),
            exercises: vec![ExerciseInput {
                id: None,
                name: "Bench Press".to_owned(),
                sets: 5,
                reps: "5".to_owned(),
            }],
        })
        .collect();

    let id = state
        .plan
        .create(
            session,
            PlanInput {
                name: "Push Pull Legs".to_owned(),
                days_per_week: 3,
                days,
            },
        )
        .await?;

    Ok(id)
}

pub fn log(exercise_id: &str, weight: &str) -> SaveLogInput {
    SaveLogInput {
        exercise_id: exercise_id.to_owned(),
        day_number: 1,
        weight_lifted: weight.to_owned(),
        sets: 5,
        reps: "5".to_owned(),
        notes: "felt good".to_owned(),
        difficulty: Some(Difficulty::Medium),
    }
}

/// Rebuilds the editor state of a stored plan, ids included.
pub async fn editor_state(
    state: &State,
    session: &Session,
    plan_id: &str,
) -> anyhow::Result<PlanInput> {
    let detail = state.query.detail(session, plan_id).await?;

    Ok(PlanInput {
        name: detail.plan.name,
        days_per_week: detail.days.len() as u32,
        days: detail
            .days
            .into_iter()
            .map(|view| DayInput {
                id: Some(view.day.id),
                headline: view.day.headline,
                exercises: view
                    .exercises
                    .into_iter()
                    .map(|e| ExerciseInput {
                        id: Some(e.id),
                        name: e.name,
                        sets: e.sets,
                        reps: e.reps,
                    })
                    .collect(),
            })
            .collect(),
    })
}
