//! Generation directives: one line `<count> <template>` of a directive file.

use rand::Rng;

use crate::error::GeneratorError;
use crate::generator::template::{Template, TemplateExpander};

const FIELD_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// 1-based line number in the directive source.
    pub line: usize,
    pub count: u64,
    pub template: Template,
}

impl Directive {
    /// Returns `None` for blank lines.
    pub fn parse_line(line: usize, raw: &str) -> Result<Option<Self>, GeneratorError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
        if fields.len() != 2 {
            return Err(GeneratorError::MalformedDirective {
                line,
                reason: format!("expected 2 space separated fields, got {}", fields.len()),
            });
        }
        let count = fields[0]
            .parse::<u64>()
            .map_err(|_| GeneratorError::MalformedDirective {
                line,
                reason: format!("repeat count {:?} is not a non-negative integer", fields[0]),
            })?;
        // Template is checked even if it is never expanded (count = 0).
        let template = Template::parse(fields[1])?;

        Ok(Some(Self {
            line,
            count,
            template,
        }))
    }

    /// Expands the template `count` times, rows are in generation order.
    pub fn generate<R: Rng>(&self, expander: &mut TemplateExpander<R>) -> Vec<String> {
        (0..self.count)
            .map(|_| expander.expand_parsed(&self.template))
            .collect()
    }
}

/// Parses all directives of one source, blank lines are skipped.
pub fn parse_directives(source: &str) -> Result<Vec<Directive>, GeneratorError> {
    let mut directives = vec![];
    for (idx, raw) in source.lines().enumerate() {
        if let Some(directive) = Directive::parse_line(idx + 1, raw)? {
            directives.push(directive);
        }
    }
    Ok(directives)
}
