use crate::adapters::ConsoleSink;
use crate::core::parser::CsvNameParser;
use crate::domain::model::{Name, SortOutcome};
use crate::domain::ports::{LineSink, NameParser};
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output path contract: the input's directory and base name, extension
/// stripped, with `-sorted.txt` appended. An existing file there is
/// overwritten.
pub fn sorted_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}-sorted.txt", stem))
}

/// Coordinates validation, parsing, sorting and output writing into one
/// user-facing operation. Generic over its parser and line sink so tests
/// can substitute either; stateless across calls.
pub struct SortedFileWriter<P: NameParser, L: LineSink> {
    parser: P,
    sink: L,
}

impl SortedFileWriter<CsvNameParser, ConsoleSink> {
    /// Production wiring: CSV-backed parser, stdout mirror.
    pub fn new() -> Self {
        Self::with_ports(CsvNameParser::new(), ConsoleSink)
    }
}

impl Default for SortedFileWriter<CsvNameParser, ConsoleSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NameParser, L: LineSink> SortedFileWriter<P, L> {
    pub fn with_ports(parser: P, sink: L) -> Self {
        tracing::debug!("SortedFileWriter - instance created");
        Self { parser, sink }
    }

    /// Parses `input_path`, sorts the records by last then first name and
    /// writes them to `{dir}/{basename}-sorted.txt`. Every failure mode is
    /// reported through the returned message; nothing panics or escapes.
    pub fn create_sorted_file(&self, input_path: &str) -> SortOutcome {
        tracing::debug!("create_sorted_file - called with path: {}", input_path);

        if input_path.is_empty() {
            let message = "File path not specified".to_string();
            tracing::info!("create_sorted_file - {}", message);
            return SortOutcome::failure(message);
        }

        let input = Path::new(input_path);
        if !input.exists() {
            let message = format!("File doesn't exist: {}", input_path);
            tracing::info!("create_sorted_file - {}", message);
            return SortOutcome::failure(message);
        }

        // Failure to parse and an empty parse are deliberately collapsed
        // into one user message at this layer.
        let names = match self.parser.parse_names(Some(input)) {
            Some(names) if !names.is_empty() => names,
            _ => {
                let message = format!(
                    "File doesn't contain comma separated last and first names: {}",
                    input_path
                );
                tracing::info!("create_sorted_file - {}", message);
                return SortOutcome::failure(message);
            }
        };

        match self.write_sorted(input, names) {
            Ok(output_file) => {
                let message = format!("Finished: created: {}", output_file.display());
                tracing::info!("create_sorted_file - {}", message);
                SortOutcome::success(message, output_file)
            }
            Err(e) => {
                let message = format!("Failed to create sorted file for: {}", input_path);
                tracing::error!("create_sorted_file - {} error: {}", message, e);
                SortOutcome::failure(message)
            }
        }
    }

    fn write_sorted(&self, input: &Path, mut names: Vec<Name>) -> Result<PathBuf> {
        // Stable sort on (last_name, first_name): full duplicates keep
        // their original file order.
        names.sort();

        let output_path = sorted_output_path(input);
        let mut writer = BufWriter::new(File::create(&output_path)?);
        for name in &names {
            let line = name.to_line();
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\r\n")?;

            // One mirror message per line, post-write.
            self.sink.write_line(&line);
            tracing::info!("create_sorted_file - wrote line: {}", line);
        }
        writer.flush()?;

        Ok(output_path)
    }
}
