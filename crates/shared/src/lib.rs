mod command;
mod date;
mod difficulty;
mod session;

pub use command::*;
pub use date::*;
pub use difficulty::*;
pub use session::*;
