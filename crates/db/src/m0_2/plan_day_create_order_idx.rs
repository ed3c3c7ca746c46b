use sea_query::{Index, IndexCreateStatement, IndexDropStatement};

use crate::table::PlanDay;

pub struct Operation;

fn create_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_plan_day_plan_id_day_order")
        .table(PlanDay::Table)
        .unique()
        .col(PlanDay::PlanId)
        .col(PlanDay::DayOrder)
        .to_owned()
}

fn drop_index() -> IndexDropStatement {
    Index::drop()
        .name("idx_plan_day_plan_id_day_order")
        .table(PlanDay::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_index().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_index().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
