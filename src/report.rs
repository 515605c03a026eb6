//! Counters of a generation run and their printing to a file.

use std::{fs::File, io::Write, path::PathBuf};

use prettytable::{row, Table};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub enum OutputFormat {
    #[default]
    JSON,
    PrettyTable,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SourceReport {
    pub source: String,
    pub directives: u64,
    pub rows: u64,
}

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct GenerationReport {
    pub sources: Vec<SourceReport>,
    pub total_directives: u64,
    pub total_rows: u64,
}

impl GenerationReport {
    pub fn add_source(&mut self, source: SourceReport) {
        self.total_directives += source.directives;
        self.total_rows += source.rows;
        self.sources.push(source);
    }
}

pub fn print_report(
    report: &GenerationReport,
    config: &ReportConfig,
) -> Result<(), GeneratorError> {
    let mut report_file = File::create(&config.output_file)
        .map_err(|err| GeneratorError::io(&config.output_file, err))?;
    let content = match config.format {
        OutputFormat::PrettyTable => report_as_pretty_table(report),
        OutputFormat::JSON => report_as_json(report)?,
    };
    report_file
        .write_all(content.as_bytes())
        .map_err(|err| GeneratorError::io(&config.output_file, err))
}

pub fn report_as_pretty_table(report: &GenerationReport) -> String {
    let mut sources_table = Table::new();
    sources_table.add_row(row!["Source", "Directives", "Rows"]);
    for source in report.sources.iter() {
        sources_table.add_row(row![source.source, source.directives, source.rows]);
    }
    sources_table.add_row(row!["Total", report.total_directives, report.total_rows]);
    sources_table.to_string()
}

pub fn report_as_json(report: &GenerationReport) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(report)?)
}
