use std::{path::PathBuf, str::FromStr};

use liftbook_identity::RegisterInput;
use liftbook_plan::{DayInput, ExerciseInput, PlanInput};
use liftbook_shared::Session;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct State {
    pub command: liftbook_plan::Command,
    pub query: liftbook_plan::Query,
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
        command: liftbook_plan::Command::new(pool.clone(), pool.clone()),
        query: liftbook_plan::Query(pool.clone()),
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

pub fn exercise(name: &str, sets: u32, reps: &str) -> ExerciseInput {
    ExerciseInput {
        id: None,
        name: name.to_owned(),
        sets,
        reps: reps.to_owned(),
    }
}

pub fn day(headline: &str, exercises: Vec<ExerciseInput>) -> DayInput {
    DayInput {
        id: None,
        headline: headline.to_owned(),
        exercises,
    }
}

pub fn push_pull() -> PlanInput {
    PlanInput {
        name: "Push Pull".to_owned(),
        days_per_week: 2,
        days: vec![
            day(
                "Push",
                vec![
                    exercise("Bench Press", 4, "6-8"),
                    exercise("Overhead Press", 3, "8-10"),
                ],
            ),
            day("Pull", vec![exercise("Deadlift", 3, "5")]),
        ],
    }
}

/// Rebuilds the editor state of a stored plan, ids included.
pub async fn editor_state(state: &State, plan_id: &str, name: &str) -> anyhow::Result<PlanInput> {
    let days = state.query.days(plan_id).await?;

    Ok(PlanInput {
        name: name.to_owned(),
        days_per_week: days.len() as u32,
        days: days
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
