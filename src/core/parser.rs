use crate::domain::model::Name;
use crate::domain::ports::NameParser;
use crate::utils::error::Result;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Maps one tokenized row onto a name: first field is the last name, last
/// field is the first name. A one-field row uses that field for both, and
/// interior fields of longer rows are discarded.
pub fn name_from_fields(fields: &[&str]) -> Option<Name> {
    let last_name = *fields.first()?;
    let first_name = *fields.last()?;
    Some(Name::new(first_name, last_name))
}

/// Name record parser backed by a delimiter-aware CSV reader: fields are
/// comma separated, trimmed, may be quoted to embed literal commas, and
/// rows may carry any number of fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvNameParser;

impl CsvNameParser {
    pub fn new() -> Self {
        Self
    }

    fn read_names(&self, path: &Path) -> Result<Vec<Name>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();
            if let Some(name) = name_from_fields(&fields) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

impl NameParser for CsvNameParser {
    fn parse_names(&self, file: Option<&Path>) -> Option<Vec<Name>> {
        let path = file?;
        if !path.exists() {
            tracing::debug!("parse_names - file does not exist: {}", path.display());
            return None;
        }

        match self.read_names(path) {
            Ok(names) => {
                tracing::debug!(
                    "parse_names - parsed {} names from file: {}",
                    names.len(),
                    path.display()
                );
                Some(names)
            }
            Err(e) => {
                tracing::error!(
                    "parse_names - failed to parse names from file: {} error: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_test_file(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_name_from_two_fields() {
        let name = name_from_fields(&["SMITH", "FREDRICK"]).unwrap();
        assert_eq!(name, Name::new("FREDRICK", "SMITH"));
    }

    #[test]
    fn test_name_from_single_field_uses_it_for_both() {
        let name = name_from_fields(&["JOHN SMITH"]).unwrap();
        assert_eq!(name.first_name, "JOHN SMITH");
        assert_eq!(name.last_name, "JOHN SMITH");
    }

    #[test]
    fn test_name_from_extra_fields_drops_middle() {
        // Known oddity kept for compatibility: interior fields (middle
        // names, stray delimiters) are thrown away without complaint.
        let name = name_from_fields(&["SMITH", "JOHN", "FREDRICK"]).unwrap();
        assert_eq!(name, Name::new("FREDRICK", "SMITH"));
    }

    #[test]
    fn test_name_from_no_fields_is_none() {
        assert!(name_from_fields(&[]).is_none());
    }

    #[test]
    fn test_parse_names_none_file() {
        assert_eq!(CsvNameParser::new().parse_names(None), None);
    }

    #[test]
    fn test_parse_names_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        assert_eq!(CsvNameParser::new().parse_names(Some(&missing)), None);
    }

    #[test]
    fn test_parse_names_empty_file_parses_to_no_records() {
        let dir = TempDir::new().unwrap();
        let path = write_test_file(&dir, "empty.txt", b"\r\n");

        let names = CsvNameParser::new().parse_names(Some(&path)).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_parse_names_trims_and_unquotes() {
        let dir = TempDir::new().unwrap();
        let path = write_test_file(&dir, "quoted.txt", b"\"SMITH, JR\", JOHN\r\n");

        let names = CsvNameParser::new().parse_names(Some(&path)).unwrap();
        assert_eq!(names, vec![Name::new("JOHN", "SMITH, JR")]);
    }

    #[test]
    fn test_parse_names_preserves_row_order() {
        let dir = TempDir::new().unwrap();
        let path = write_test_file(&dir, "names.txt", b"SMITH, FREDRICK\r\nBAKER, ANDREW\r\n");

        let names = CsvNameParser::new().parse_names(Some(&path)).unwrap();
        assert_eq!(
            names,
            vec![Name::new("FREDRICK", "SMITH"), Name::new("ANDREW", "BAKER")]
        );
    }

    #[test]
    fn test_parse_names_delimiter_only_rows_yield_empty_names() {
        let dir = TempDir::new().unwrap();
        let path = write_test_file(&dir, "bad.txt", b"\t,\r,^~!$,\x0c\n,\r\n\r\n\r\n ,, \r\n");

        let names = CsvNameParser::new().parse_names(Some(&path)).unwrap();
        assert_eq!(names.len(), 4);
        for name in &names {
            assert_eq!(name.first_name, "");
            assert_eq!(name.last_name, "");
        }
    }
}
