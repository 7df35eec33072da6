pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ConsoleSink;
pub use config::CliConfig;
pub use core::parser::CsvNameParser;
pub use core::sorter::SortedFileWriter;
pub use domain::model::{Name, SortOutcome};
pub use utils::error::{Result, SortError};
