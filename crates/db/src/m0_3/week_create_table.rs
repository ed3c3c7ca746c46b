use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Plan, Week};

pub struct Operation;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Week::Table)
        .col(
            ColumnDef::new(Week::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Week::PlanId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Week::StartDate).big_integer().not_null())
        .col(
            ColumnDef::new(Week::IsLocked)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Week::CreatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Week::Table, Week::PlanId)
                .to(Plan::Table, Plan::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Week::Table).to_owned()
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
