use sqlx::SqlitePool;

use crate::repository::{self, FindType, UserRow};

mod login;
mod password;
mod register;

pub use login::LoginInput;
pub use password::UpdatePasswordInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    pub async fn find(&self, id: impl Into<String>) -> liftbook_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Id(id.into())).await
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> liftbook_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Email(email.into())).await
    }
}
