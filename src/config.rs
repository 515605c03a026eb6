//! Config fields definitions for trace generation

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::GeneratorError;
use crate::generator::row::RowSchema;
use crate::report::ReportConfig;

#[derive(Debug, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// If not set every run draws its seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Every regular file in this directory is a separate directive source.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Generated trace is written to the file with the same name as its source.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub row_schema: RowSchema,
    /// If not set default output of logs is stdout/stderr
    #[serde(default)]
    pub logs_filepath: Option<String>,
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data_in")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data_out")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            row_schema: RowSchema::default(),
            logs_filepath: None,
            report: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml(config_yaml: &str) -> Result<Self, GeneratorError> {
        Ok(serde_yaml::from_str(config_yaml)?)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, GeneratorError> {
        let config_yaml =
            std::fs::read_to_string(path).map_err(|err| GeneratorError::io(path, err))?;
        Self::from_yaml(&config_yaml)
    }

    /// Seed for the source with index `source_idx` in the sorted list of sources.
    pub fn source_seed(&self, source_idx: usize) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add(source_idx as u64))
    }
}
