use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "name-sort")]
#[command(about = "Sorts a text file of comma separated names by last then first name")]
pub struct CliConfig {
    /// Text file of names, one record per line: last name then first
    /// name, separated by a comma. The sorted copy is written next to it
    /// as <input-file-name>-sorted.txt.
    pub input: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
