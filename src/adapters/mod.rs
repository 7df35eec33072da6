use crate::domain::ports::LineSink;

/// Production line sink: mirrors each written output line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
