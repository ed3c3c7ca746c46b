use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Exercise, Log, Week};

pub struct Operation;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Log::Table)
        .col(
            ColumnDef::new(Log::WeekId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Log::ExerciseId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Log::DayNumber).integer().not_null())
        .col(ColumnDef::new(Log::WeightLifted).string().not_null())
        .col(ColumnDef::new(Log::Sets).integer().not_null())
        .col(ColumnDef::new(Log::Reps).string().not_null())
        .col(ColumnDef::new(Log::Notes).string().not_null())
        .col(ColumnDef::new(Log::Difficulty).string().string_len(25).null())
        .col(ColumnDef::new(Log::UpdatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(Log::WeekId)
                .col(Log::ExerciseId)
                .col(Log::DayNumber),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Log::Table, Log::WeekId)
                .to(Week::Table, Week::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Log::Table, Log::ExerciseId)
                .to(Exercise::Table, Exercise::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Log::Table).to_owned()
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
