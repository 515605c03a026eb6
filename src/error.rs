//! Errors which may occur while generating a workload trace from directive files.

use std::path::PathBuf;

use thiserror::Error;

/// What exactly is wrong with a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateErrorKind {
    /// Odd number of `$` delimiters in a template.
    UnbalancedDelimiter,
    /// Placeholder body does not contain exactly one `^` separator.
    BadRangeSyntax,
    /// Range bound is not a number of the inferred kind.
    BadNumericLiteral,
}

impl std::fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TemplateErrorKind::UnbalancedDelimiter => "unbalanced '$' delimiters",
            TemplateErrorKind::BadRangeSyntax => "placeholder must contain exactly one '^'",
            TemplateErrorKind::BadNumericLiteral => "range bound is not a valid number",
        };
        f.write_str(description)
    }
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("malformed template {template:?}: {kind}")]
    MalformedTemplate {
        kind: TemplateErrorKind,
        template: String,
    },

    #[error("malformed directive at line {line}: {reason}")]
    MalformedDirective { line: usize, reason: String },

    #[error("invalid range in placeholder {placeholder:?}: low bound exceeds high bound")]
    InvalidRange { placeholder: String },

    /// Generated row has no numeric ordering key. Should not happen for well-formed templates.
    #[error("invalid ordering key in generated row {row:?}")]
    InvalidOrderingKey { row: String },

    #[error("generated row {row:?} does not match row schema: {reason}")]
    RowSchemaMismatch { row: String, reason: String },

    #[error("failed to generate trace from {path:?}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: Box<GeneratorError>,
    },

    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl GeneratorError {
    pub fn malformed_template(kind: TemplateErrorKind, template: &str) -> Self {
        GeneratorError::MalformedTemplate {
            kind,
            template: template.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of a template error, if this is one. Looks through per-source wrapping.
    pub fn template_error_kind(&self) -> Option<TemplateErrorKind> {
        match self {
            GeneratorError::MalformedTemplate { kind, .. } => Some(*kind),
            GeneratorError::Source { source, .. } => source.template_error_kind(),
            _ => None,
        }
    }
}
