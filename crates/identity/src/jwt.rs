use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: u64,
    pub iat: u64,
}

/// Generate a session token for a user, signed with HS256.
pub fn generate_jwt(
    user_id: impl Into<String>,
    email: impl Into<String>,
    secret: &str,
    expiration_days: i64,
) -> Result<String> {
    let now = liftbook_shared::now();
    let lifetime = u64::try_from(expiration_days.max(1))? * 24 * 60 * 60;

    let claims = Claims {
        sub: user_id.into(),
        email: email.into(),
        exp: now + lifetime,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT")
}

/// Validate and decode a session token
pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_generate_and_validate_jwt() {
        let token = generate_jwt("01JUSER", "lifter@liftbook.localhost", SECRET, 7).unwrap();
        let claims = validate_jwt(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "01JUSER");
        assert_eq!(claims.email, "lifter@liftbook.localhost");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_validate_jwt_wrong_secret() {
        let token = generate_jwt("01JUSER", "lifter@liftbook.localhost", SECRET, 7).unwrap();

        assert!(validate_jwt(&token, "another_secret_key_minimum_32_characters").is_err());
    }

    #[test]
    fn test_validate_jwt_garbage() {
        assert!(validate_jwt("not.a.token", SECRET).is_err());
    }
}
