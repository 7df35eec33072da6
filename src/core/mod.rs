pub mod parser;
pub mod sorter;

pub use crate::domain::model::{Name, SortOutcome};
pub use crate::domain::ports::{LineSink, NameParser};
pub use crate::utils::error::Result;
