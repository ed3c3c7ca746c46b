use sqlx::SqlitePool;

mod create;
mod update;

#[derive(Clone)]
pub struct Command {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }
}
