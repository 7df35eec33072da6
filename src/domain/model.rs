use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// One parsed name record. Field values are exactly what the tokenizer
/// produced (trimmed, unquoted); no further normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first_name: String,
    pub last_name: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Output-file representation: `LASTNAME, FIRSTNAME`.
    pub fn to_line(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

// Sort key is (last_name, first_name), byte-wise. String's derived order
// would compare first_name first, so the ordering is written out.
impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one `create_sorted_file` call: a user-facing message always,
/// and the written file's path only when one was produced. Callers branch
/// on `output_file`, not on message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub message: String,
    pub output_file: Option<PathBuf>,
}

impl SortOutcome {
    pub fn success(message: String, output_file: PathBuf) -> Self {
        Self {
            message,
            output_file: Some(output_file),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            output_file: None,
        }
    }
}
