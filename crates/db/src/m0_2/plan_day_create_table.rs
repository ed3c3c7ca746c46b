use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Plan, PlanDay};

pub struct Operation;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PlanDay::Table)
        .col(
            ColumnDef::new(PlanDay::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PlanDay::PlanId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PlanDay::DayOrder).integer().not_null())
        .col(ColumnDef::new(PlanDay::Headline).string().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(PlanDay::Table, PlanDay::PlanId)
                .to(Plan::Table, Plan::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PlanDay::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
