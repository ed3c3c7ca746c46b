use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use ulid::Ulid;
use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> liftbook_shared::Result<String> {
        input.validate()?;

        if self.find_by_email(&input.email).await?.is_some() {
            liftbook_shared::bail!("Email already registered");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let id = Ulid::new().to_string();
        repository::create(&self.write_db, id.to_owned(), input.email, password_hash).await?;

        tracing::info!(user_id = %id, "user registered");

        Ok(id)
    }
}
