use super::fields::FormField;
use super::normalizer::normalize_header;
use super::{FormSnapshot, IntakeError};
use std::io::Read;

pub(crate) const LABEL_COLUMN: &str = "label";

#[derive(Debug)]
pub(crate) struct AssessmentRow {
    pub(crate) line: u64,
    pub(crate) label: Option<String>,
    pub(crate) snapshot: FormSnapshot,
}

/// Column index of every form field, plus the optional label column.
struct ColumnLayout {
    fields: Vec<(FormField, usize)>,
    label: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, IntakeError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |wanted: &str| {
            names
                .iter()
                .position(|name| name.eq_ignore_ascii_case(wanted))
        };

        let mut fields = Vec::with_capacity(FormField::ALL.len());
        for field in FormField::ALL {
            let index = position(field.name()).ok_or(IntakeError::MissingField(field.name()))?;
            fields.push((field, index));
        }

        Ok(Self {
            fields,
            label: position(LABEL_COLUMN),
        })
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AssessmentRow>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        // A row with a different cell count than the header is rejected by
        // the reader; tag it with its line like any other bad row.
        let record = record.map_err(|err| {
            let line = err.position().map(|pos| pos.line());
            match line {
                Some(line) => IntakeError::Row {
                    line,
                    source: Box::new(IntakeError::Csv(err)),
                },
                None => IntakeError::Csv(err),
            }
        })?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let mut snapshot = FormSnapshot::new();
        for (field, index) in &layout.fields {
            snapshot.set(*field, record.get(*index).unwrap_or_default());
        }

        let label = layout
            .label
            .and_then(|index| record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        rows.push(AssessmentRow {
            line,
            label,
            snapshot,
        });
    }

    Ok(rows)
}
