use liftbook_shared::{Error, Session};
use validator::Validate;

use crate::{PlanInput, ReconcileOptions, repository};

impl super::Command {
    /// Reconciles a stored plan with the submitted editor state in a single
    /// transaction.
    ///
    /// Submitted days take orders 1..N in submission order. Days and exercises
    /// carrying an id are updated in place so their logs stay attached; those
    /// without one are inserted. An id that does not belong to the plan aborts
    /// the whole edit. Stored entries missing from the submission are kept
    /// (placed after the submitted ones) unless
    /// [`ReconcileOptions::prune_removed`] is set. Pruning is refused while any
    /// removed exercise has logs in a locked week.
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id, plan_id = %plan_id))]
    pub async fn update(
        &self,
        session: &Session,
        plan_id: &str,
        input: PlanInput,
        options: ReconcileOptions,
    ) -> liftbook_shared::Result<()> {
        input.validate()?;

        let now = liftbook_shared::now();
        let mut tx = self.write_db.begin().await?;

        if !repository::update_plan(
            &mut tx,
            plan_id,
            &session.user_id,
            &input.name,
            input.days_per_week,
        )
        .await?
        {
            return Err(Error::NotFound("plan"));
        }

        repository::park_days(&mut tx, plan_id).await?;

        let mut kept_exercises = Vec::new();
        let mut submitted_days = Vec::with_capacity(input.days.len());

        for (day_index, day) in input.days.iter().enumerate() {
            let day_order = u32::try_from(day_index + 1)?;

            let day_id = match &day.id {
                Some(id) => {
                    if !repository::update_day(&mut tx, id, plan_id, day_order, &day.headline)
                        .await?
                    {
                        return Err(Error::NotFound("plan day"));
                    }

                    id.to_owned()
                }
                None => repository::insert_day(&mut tx, plan_id, day_order, &day.headline).await?,
            };

            for (index, exercise) in day.exercises.iter().enumerate() {
                let position = u32::try_from(index + 1)?;

                let exercise_id = match &exercise.id {
                    Some(id) => {
                        if !repository::update_exercise(
                            &mut tx, id, plan_id, &day_id, position, exercise,
                        )
                        .await?
                        {
                            return Err(Error::NotFound("exercise"));
                        }

                        id.to_owned()
                    }
                    None => {
                        repository::insert_exercise(&mut tx, &day_id, position, exercise, now)
                            .await?
                    }
                };

                kept_exercises.push(exercise_id);
            }

            submitted_days.push((day_id, day.exercises.len()));
        }

        if options.prune_removed {
            if repository::has_locked_logs_except(&mut tx, plan_id, &kept_exercises).await? {
                tracing::warn!("prune rejected, removed exercises have locked logs");
                liftbook_shared::bail!("Exercises logged in a locked week cannot be removed");
            }

            let days = repository::delete_parked_days(&mut tx, plan_id).await?;
            let exercises =
                repository::delete_exercises_except(&mut tx, plan_id, &kept_exercises).await?;

            tracing::info!(days, exercises, "removed entries pruned");
        } else {
            let parked = repository::parked_days(&mut tx, plan_id).await?;
            let mut day_order = u32::try_from(input.days.len())?;

            for id in parked {
                day_order += 1;
                repository::reorder_day(&mut tx, &id, day_order).await?;
            }

            for (day_id, submitted) in &submitted_days {
                let leftovers =
                    repository::leftover_exercises(&mut tx, day_id, &kept_exercises).await?;
                let mut position = u32::try_from(*submitted)?;

                for id in leftovers {
                    position += 1;
                    repository::reposition_exercise(&mut tx, &id, position).await?;
                }
            }
        }

        tx.commit().await?;

        tracing::info!("plan updated");

        Ok(())
    }
}
