use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Exercise, PlanDay};

pub struct Operation;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Exercise::Table)
        .col(
            ColumnDef::new(Exercise::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Exercise::DayId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Exercise::Name).string().not_null())
        .col(ColumnDef::new(Exercise::Sets).integer().not_null())
        .col(ColumnDef::new(Exercise::Reps).string().not_null())
        .col(ColumnDef::new(Exercise::Position).integer().not_null())
        .col(ColumnDef::new(Exercise::CreatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Exercise::Table, Exercise::DayId)
                .to(PlanDay::Table, PlanDay::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Exercise::Table).to_owned()
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
