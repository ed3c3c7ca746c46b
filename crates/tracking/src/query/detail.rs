use liftbook_plan::{PlanDayView, PlanRow};
use liftbook_shared::{Error, Session};
use serde::Serialize;

use crate::{LogRow, WeekRow};

/// Everything the tracking page of a plan renders.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail {
    pub plan: PlanRow,
    pub days: Vec<PlanDayView>,
    pub weeks: Vec<WeekRow>,
    pub logs: Vec<LogRow>,
}

impl super::Query {
    pub async fn detail(
        &self,
        session: &Session,
        plan_id: &str,
    ) -> liftbook_shared::Result<PlanDetail> {
        let plans = liftbook_plan::Query(self.0.clone());
        let Some(plan) = plans.find(session, plan_id).await? else {
            return Err(Error::NotFound("plan"));
        };

        let days = plans.days(plan_id).await?;
        let weeks = self.weeks(plan_id).await?;
        let week_ids = weeks.iter().map(|w| w.id.to_owned()).collect::<Vec<_>>();
        let logs = self.logs(&week_ids).await?;

        Ok(PlanDetail {
            plan,
            days,
            weeks,
            logs,
        })
    }
}
