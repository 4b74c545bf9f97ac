//! Input form model: turns raw form values and CSV exports into
//! [`AssessmentInput`] snapshots for the scoring engine.
//!
//! Sanitation lives here and only here. Blank values become `0`; values that
//! are present but not numbers are errors. Ranges are never checked.

mod fields;
mod normalizer;
mod parser;

pub use fields::{FieldKind, FormField};

use crate::assessment::AssessmentInput;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read assessment file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid assessment CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' expects a number, found '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<IntakeError>,
    },
}

/// Raw, unvalidated form values keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<FormField, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, raw: impl Into<String>) -> &mut Self {
        self.values.insert(field, raw.into());
        self
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Fields never touched keep their default form value; fields present
    /// but blank become `0`.
    pub fn to_input(&self) -> Result<AssessmentInput, IntakeError> {
        let mut input = AssessmentInput::default();
        for (field, raw) in &self.values {
            let value = normalizer::parse_form_number(*field, raw)?;
            field.write(&mut input, value);
        }
        Ok(input)
    }
}

impl From<&AssessmentInput> for FormSnapshot {
    fn from(input: &AssessmentInput) -> Self {
        let mut snapshot = Self::new();
        for field in FormField::ALL {
            snapshot.set(field, field.read(input).to_string());
        }
        snapshot
    }
}

/// One CSV row ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedAssessment {
    pub line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub input: AssessmentInput,
}

pub struct AssessmentImporter;

impl AssessmentImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedAssessment>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Requires a header row naming all fifteen fields; a `label` column is
    /// optional. Rows come back in file order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedAssessment>, IntakeError> {
        let mut imported = Vec::new();

        for row in parser::parse_rows(reader)? {
            let input = row.snapshot.to_input().map_err(|source| IntakeError::Row {
                line: row.line,
                source: Box::new(source),
            })?;
            debug!(line = row.line, label = ?row.label, "imported assessment row");

            imported.push(ImportedAssessment {
                line: row.line,
                label: row.label,
                input,
            });
        }

        Ok(imported)
    }
}
