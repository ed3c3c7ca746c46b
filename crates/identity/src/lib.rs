mod command;
pub mod jwt;
pub(crate) mod repository;

pub use command::*;
pub use jwt::{Claims, generate_jwt, validate_jwt};
pub use repository::UserRow;
