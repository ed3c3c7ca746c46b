mod command;
mod query;
pub(crate) mod repository;
mod types;

pub use command::*;
pub use query::*;
pub use types::*;
