use liftbook_shared::Session;
use ulid::Ulid;
use validator::Validate;

use crate::{PlanInput, repository};

impl super::Command {
    /// Stores a new plan with its days and exercises. Any ids carried by the
    /// input are ignored.
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
    pub async fn create(
        &self,
        session: &Session,
        input: PlanInput,
    ) -> liftbook_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let now = liftbook_shared::now();
        let mut tx = self.write_db.begin().await?;

        repository::insert_plan(
            &mut tx,
            &id,
            &session.user_id,
            &input.name,
            input.days_per_week,
            now,
        )
        .await?;

        for (day_index, day) in input.days.iter().enumerate() {
            let day_order = u32::try_from(day_index + 1)?;
            let day_id = repository::insert_day(&mut tx, &id, day_order, &day.headline).await?;

            for (index, exercise) in day.exercises.iter().enumerate() {
                let position = u32::try_from(index + 1)?;
                repository::insert_exercise(&mut tx, &day_id, position, exercise, now).await?;
            }
        }

        tx.commit().await?;

        tracing::info!(plan_id = %id, "plan created");

        Ok(id)
    }
}
