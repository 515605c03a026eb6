//! Generates traces for every directive file of an input directory.
//!
//! Sources are independent: each gets its own random source and its own output file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generator::builder::{render_trace, TraceBuilder};
use crate::generator::directive::parse_directives;
use crate::generator::row::RowSchema;
use crate::generator::template::TemplateExpander;
use crate::report::{GenerationReport, SourceReport};

/// Regular files of a directory sorted by name.
pub fn list_sources(input_dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    let entries = std::fs::read_dir(input_dir).map_err(|err| GeneratorError::io(input_dir, err))?;
    let mut sources = vec![];
    for entry in entries {
        let path = entry
            .map_err(|err| GeneratorError::io(input_dir, err))?
            .path();
        if path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// File name of a directive source, also used as the name of its trace.
fn source_file_name(input: &Path) -> Result<&OsStr, GeneratorError> {
    input.file_name().ok_or_else(|| {
        GeneratorError::io(
            input,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "directive source path has no file name",
            ),
        )
    })
}

/// Builds the trace of one directive file and writes it to `output`. Nothing is written if
/// generation fails.
pub fn generate_file<R: Rng>(
    input: &Path,
    output: &Path,
    expander: TemplateExpander<R>,
    schema: RowSchema,
) -> Result<SourceReport, GeneratorError> {
    let source_name = source_file_name(input)?.to_string_lossy().into_owned();
    let source = std::fs::read_to_string(input).map_err(|err| GeneratorError::io(input, err))?;

    let wrap = |err: GeneratorError| GeneratorError::Source {
        path: input.to_path_buf(),
        source: Box::new(err),
    };
    let directives = parse_directives(&source).map_err(wrap)?;
    let rows = TraceBuilder::new(expander, schema)
        .build(&directives)
        .map_err(wrap)?;

    std::fs::write(output, render_trace(&rows)).map_err(|err| GeneratorError::io(output, err))?;

    Ok(SourceReport {
        source: source_name,
        directives: directives.len() as u64,
        rows: rows.len() as u64,
    })
}

pub fn generate_directory(config: &GeneratorConfig) -> Result<GenerationReport, GeneratorError> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|err| GeneratorError::io(&config.output_dir, err))?;

    let sources = list_sources(&config.input_dir)?;
    info!(
        "Found {} directive files in {:?}",
        sources.len(),
        config.input_dir
    );

    let mut report = GenerationReport::default();
    for (source_idx, input) in sources.iter().enumerate() {
        let output = config.output_dir.join(source_file_name(input)?);
        let expander = match config.source_seed(source_idx) {
            Some(seed) => TemplateExpander::seeded(seed),
            None => TemplateExpander::from_entropy(),
        };

        let source_report = generate_file(input, &output, expander, config.row_schema.clone())?;
        info!(
            "Generated {} rows from {} directives: {:?} -> {:?}",
            source_report.rows, source_report.directives, input, output
        );
        report.add_source(source_report);
    }

    info!(
        "Total: {} rows from {} directives in {} files",
        report.total_rows,
        report.total_directives,
        report.sources.len()
    );
    Ok(report)
}
