use crate::domain::model::Name;
use std::path::Path;

/// Turns a file's contents into an ordered sequence of name records.
///
/// `None` means the file could not be read at all (absent, unreadable,
/// undecodable); `Some(vec![])` means it was read but held no records.
/// The two are distinct so callers never confuse "no data" with "no file".
pub trait NameParser {
    fn parse_names(&self, file: Option<&Path>) -> Option<Vec<Name>>;
}

/// Receives each output line after it has been written, for mirroring to
/// a console or equivalent presentation surface.
pub trait LineSink {
    fn write_line(&self, line: &str);
}
