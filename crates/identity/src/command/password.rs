use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use liftbook_shared::Session;

use crate::repository;

pub struct UpdatePasswordInput {
    pub password: String,
    pub confirm_password: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
    pub async fn update_password(
        &self,
        session: &Session,
        input: UpdatePasswordInput,
    ) -> liftbook_shared::Result<()> {
        if input.password != input.confirm_password {
            liftbook_shared::bail!("Passwords do not match");
        }

        if input.password.chars().count() < 6 {
            liftbook_shared::bail!("Password must be at least 6 characters");
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        if !repository::update_password(&self.write_db, session.user_id.to_owned(), password_hash)
            .await?
        {
            return Err(liftbook_shared::Error::NotFound("user"));
        }

        tracing::info!("password updated");

        Ok(())
    }
}
