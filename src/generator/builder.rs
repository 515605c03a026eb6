//! Builds a time-ordered trace from a batch of directives.

use log::debug;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::error::GeneratorError;
use crate::generator::directive::{parse_directives, Directive};
use crate::generator::row::{Row, RowSchema};
use crate::generator::template::TemplateExpander;

const MAX_PREALLOCATED_ROWS: u64 = 1 << 20;

pub struct TraceBuilder<R: Rng = Pcg64> {
    expander: TemplateExpander<R>,
    schema: RowSchema,
}

impl<R: Rng> TraceBuilder<R> {
    pub fn new(expander: TemplateExpander<R>, schema: RowSchema) -> Self {
        Self { expander, schema }
    }

    /// Generates all rows of all directives and sorts them by ordering key. Sort is stable, so
    /// rows with equal keys keep the order in which they were generated. Keys are normalized
    /// in [`Row::parse`] so `total_cmp` only differs from numeric order for NaN, which goes last.
    ///
    /// The first failure aborts the whole batch.
    pub fn build(&mut self, directives: &[Directive]) -> Result<Vec<Row>, GeneratorError> {
        let total_rows = directives
            .iter()
            .fold(0u64, |total, directive| total.saturating_add(directive.count));
        let mut rows = Vec::with_capacity(total_rows.min(MAX_PREALLOCATED_ROWS) as usize);

        for directive in directives.iter() {
            debug!(
                "Line {}: generating {} rows from template {:?}",
                directive.line,
                directive.count,
                directive.template.source()
            );
            for text in directive.generate(&mut self.expander) {
                rows.push(Row::parse(text, &self.schema)?);
            }
        }

        rows.sort_by(|lhs, rhs| lhs.ordering_key().total_cmp(&rhs.ordering_key()));
        Ok(rows)
    }

    /// Same as [`TraceBuilder::build`] for raw content of a directive file.
    pub fn build_from_str(&mut self, source: &str) -> Result<Vec<Row>, GeneratorError> {
        let directives = parse_directives(source)?;
        self.build(&directives)
    }
}

/// One row per line, no trailing newline.
pub fn render_trace(rows: &[Row]) -> String {
    rows.iter().map(Row::text).collect::<Vec<_>>().join("\n")
}
