//! Generated rows and the schema they are validated against.
//!
//! Row is opaque text for the generator except for the ordering key, which is the field used to
//! sort rows into a time-ordered trace (pod submit time for the simulator).

use serde::Deserialize;

use crate::error::GeneratorError;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Real,
    Text,
}

impl FieldKind {
    fn accepts(&self, field: &str) -> bool {
        match self {
            FieldKind::Int => field.parse::<i64>().is_ok(),
            FieldKind::Real => field.parse::<f64>().is_ok(),
            FieldKind::Text => true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RowSchema {
    pub field_separator: char,
    /// Index of the field holding the ordering key.
    pub ordering_key_field: usize,
    /// If set, every row must have exactly these fields.
    pub fields: Option<Vec<FieldKind>>,
}

impl Default for RowSchema {
    fn default() -> Self {
        Self {
            field_separator: ';',
            ordering_key_field: 0,
            fields: None,
        }
    }
}

impl RowSchema {
    fn validate_fields(&self, text: &str, fields: &[FieldKind]) -> Result<(), GeneratorError> {
        let values: Vec<&str> = text.split(self.field_separator).collect();
        if values.len() != fields.len() {
            return Err(GeneratorError::RowSchemaMismatch {
                row: text.to_string(),
                reason: format!("expected {} fields, got {}", fields.len(), values.len()),
            });
        }
        for (idx, (value, kind)) in values.iter().zip(fields.iter()).enumerate() {
            if !kind.accepts(value) {
                return Err(GeneratorError::RowSchemaMismatch {
                    row: text.to_string(),
                    reason: format!("field {} {:?} is not {:?}", idx, value, kind),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    text: String,
    ordering_key: f64,
}

impl Row {
    /// Validates row against the schema and extracts its ordering key.
    pub fn parse(text: String, schema: &RowSchema) -> Result<Self, GeneratorError> {
        if let Some(fields) = &schema.fields {
            schema.validate_fields(&text, fields)?;
        }

        // Without a separator in the row the whole row is the first field.
        let ordering_key = text
            .split(schema.field_separator)
            .nth(schema.ordering_key_field)
            .and_then(|field| field.parse::<f64>().ok());

        match ordering_key {
            // -0.0 and 0.0 are the same point in time and must compare equal in the sort.
            Some(ordering_key) => Ok(Self {
                text,
                ordering_key: ordering_key + 0.0,
            }),
            None => Err(GeneratorError::InvalidOrderingKey { row: text }),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ordering_key(&self) -> f64 {
        self.ordering_key
    }
}
