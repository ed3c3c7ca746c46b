#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("This week is locked and cannot be edited.")]
    LockedWeek,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!(value.to_string()))
    }
}

impl From<sea_query::error::Error> for Error {
    fn from(value: sea_query::error::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(value: std::num::TryFromIntError) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked() -> Result<()> {
        Err(Error::LockedWeek)
    }

    fn rejected(name: &str) -> Result<()> {
        bail!("{name} is not allowed")
    }

    #[test]
    fn test_locked_week_message() {
        let err = locked().unwrap_err();
        assert_eq!(err.to_string(), "This week is locked and cannot be edited.");
    }

    #[test]
    fn test_bail_formats_server_error() {
        let err = rejected("squat").unwrap_err();
        assert!(matches!(err, Error::Server(_)));
        assert_eq!(err.to_string(), "squat is not allowed");
    }

    #[test]
    fn test_store_error_keeps_raw_message() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Unknown(_)));
        assert!(err.to_string().contains("no rows returned"));
    }
}
