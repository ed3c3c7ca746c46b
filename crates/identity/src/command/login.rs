use argon2::{Argon2, PasswordHash, PasswordVerifier};
use validator::Validate;

#[derive(Validate)]
pub struct LoginInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl super::Command {
    /// Checks credentials and returns the user id.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> liftbook_shared::Result<String> {
        input.validate()?;

        let Some(user) = self.find_by_email(&input.email).await? else {
            tracing::warn!("login for unknown email");
            liftbook_shared::bail!("Invalid email or password");
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            tracing::warn!(user_id = %user.id, "login with wrong password");
            liftbook_shared::bail!("Invalid email or password");
        }

        Ok(user.id)
    }
}
