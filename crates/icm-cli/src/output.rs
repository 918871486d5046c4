//! Presentation helpers shared by the `icm` subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use icm_model::{ContainerCode, Separators, Severity};
use icm_validate::{FieldReport, ValidationResult};
use serde::Serialize;

/// How a field is shown in the validation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Ok,
    Warning,
    Error,
}

impl FieldStatus {
    pub fn of(report: &FieldReport) -> Self {
        if !report.valid {
            Self::Error
        } else if report
            .notes
            .iter()
            .any(|note| note.severity() == Severity::Warning)
        {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Error first, then notes, one line each.
pub fn field_details(report: &FieldReport) -> Vec<String> {
    report
        .error
        .iter()
        .map(ToString::to_string)
        .chain(report.notes.iter().map(ToString::to_string))
        .collect()
}

/// One line summary of a validation result.
pub fn verdict(result: &ValidationResult) -> String {
    if let Some(code) = result.container_code() {
        return format!("valid container code {code}");
    }
    match &result.error {
        None => format!("valid {}", result.pattern),
        Some(error) => format!("invalid {}: {error}", result.pattern),
    }
}

#[derive(Serialize)]
struct ValidationEntry<'a> {
    input: &'a str,
    valid: bool,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// JSON array with one object per validated input.
pub fn validation_json(results: &[(String, ValidationResult)]) -> Result<String> {
    let entries: Vec<ValidationEntry<'_>> = results
        .iter()
        .map(|(input, result)| ValidationEntry {
            input,
            valid: result.is_valid(),
            result,
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("serialize validation results")
}

#[derive(Serialize)]
struct GeneratedRow {
    owner: String,
    equipment_category: char,
    serial: String,
    check_digit: u8,
}

/// Writes codes as CSV with a header row. Returns the number of rows.
pub fn write_csv<W, I>(writer: W, codes: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ContainerCode>,
{
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for code in codes {
        csv.serialize(GeneratedRow {
            owner: code.owner().to_string(),
            equipment_category: code.category().as_char(),
            serial: code.serial().to_string(),
            check_digit: code.check_digit(),
        })
        .context("write csv row")?;
        rows += 1;
    }
    csv.flush().context("flush csv output")?;
    Ok(rows)
}

/// Writes one rendered code per line. Returns the number of lines.
pub fn write_text<W, I>(mut writer: W, codes: I, separators: &Separators) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ContainerCode>,
{
    let mut lines = 0;
    for code in codes {
        writeln!(writer, "{}", code.render(separators)).context("write code")?;
        lines += 1;
    }
    writer.flush().context("flush output")?;
    Ok(lines)
}
