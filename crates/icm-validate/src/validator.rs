//! Runs patterns against text and collects per-field diagnostics.

use icm_model::{
    Checksum, ContainerCode, EquipCatId, FieldError, FieldKind, Note, OwnerCode, SerialNumber,
    SizeType,
};
use serde::Serialize;
use tracing::debug;

use crate::field::{Resolved, Span};
use crate::pattern::{Pattern, PatternKind};

/// One field of the chosen pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub kind: FieldKind,
    /// Matched text, empty when nothing matched.
    pub value: String,
    pub span: Option<Span>,
    pub valid: bool,
    pub error: Option<FieldError>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub pattern: PatternKind,
    /// Every field matched its expected length.
    pub fully_matched: bool,
    pub fields: Vec<FieldReport>,
    /// First field error of the pattern, or text left after the last field.
    /// `None` when the input is valid.
    pub error: Option<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.fully_matched && self.error.is_none()
    }

    pub fn field(&self, kind: FieldKind) -> Option<&FieldReport> {
        self.fields.iter().find(|report| report.kind == kind)
    }

    /// Check digit value computed from owner, category and serial, if the
    /// pattern has a check digit and it was calculable.
    pub fn calculated_checksum(&self) -> Option<Checksum> {
        self.field(FieldKind::CheckDigit)?
            .notes
            .iter()
            .find_map(|note| match note {
                Note::CalculatedCheckDigit { value } => Checksum::new(*value).ok(),
                _ => None,
            })
    }

    /// The typed code, when valid and the pattern carries a full code.
    pub fn container_code(&self) -> Option<ContainerCode> {
        if !self.is_valid() {
            return None;
        }
        let value = |kind| self.field(kind).map(|report| report.value.as_str());
        let code = ContainerCode::new(
            OwnerCode::parse(value(FieldKind::Owner)?).ok()?,
            EquipCatId::parse(value(FieldKind::EquipmentCategory)?).ok()?,
            SerialNumber::parse(value(FieldKind::Serial)?).ok()?,
            value(FieldKind::CheckDigit)?.parse().ok()?,
        )
        .ok()?;
        match (
            value(FieldKind::Length),
            value(FieldKind::HeightWidth),
            value(FieldKind::TypeGroup),
        ) {
            (Some(length), Some(height_width), Some(type_code)) => {
                let size_type = SizeType::parse(&format!("{length}{height_width}"), type_code).ok()?;
                Some(code.with_size_type(size_type))
            }
            _ => Some(code),
        }
    }
}

/// Matches and validates `text` against a single pattern.
pub fn evaluate(text: &str, pattern: &Pattern<'_>) -> ValidationResult {
    let spans = pattern.match_spans(text);
    let mut resolved: Vec<Resolved> = Vec::with_capacity(spans.len());
    let mut fields = Vec::with_capacity(spans.len());
    let mut error = None;

    for (field, span) in pattern.fields().iter().zip(spans) {
        let value = span.map_or_else(String::new, |span| text[span.start..span.end].to_string());
        // most recently resolved first
        let siblings: Vec<Resolved> = resolved.iter().rev().cloned().collect();
        let check = field.validate(&value, &siblings);
        debug!(
            field = %field.kind(),
            value = %value,
            error = ?check.error,
            "validated field"
        );

        let well_formed = !matches!(check.error, Some(FieldError::Format { .. }));
        if error.is_none() {
            error.clone_from(&check.error);
        }
        resolved.push(Resolved {
            kind: field.kind(),
            value: value.clone(),
            well_formed,
        });
        fields.push(FieldReport {
            kind: field.kind(),
            value,
            span,
            valid: check.error.is_none(),
            error: check.error,
            notes: check.notes,
        });
    }

    if error.is_none()
        && let (Some(found), Some(last)) = (pattern.trailing_text(text), pattern.fields().last())
    {
        error = Some(FieldError::UnexpectedText {
            after: last.kind(),
            found: found.to_string(),
        });
    }

    ValidationResult {
        pattern: pattern.kind(),
        fully_matched: pattern.fully_matches(text),
        fields,
        error,
    }
}

/// Picks the first pattern that matches structurally and passes every
/// field check. Falls back to the first pattern with its first error.
///
/// # Panics
///
/// Panics if `patterns` is empty.
pub fn validate(text: &str, patterns: &[Pattern<'_>]) -> ValidationResult {
    assert!(!patterns.is_empty(), "at least one candidate pattern is required");
    let mut fallback = None;
    for pattern in patterns {
        let result = evaluate(text, pattern);
        if result.is_valid() {
            debug!(pattern = %pattern.kind(), "input valid");
            return result;
        }
        if fallback.is_none() {
            fallback = Some(result);
        }
    }
    let result = fallback.unwrap_or_else(|| evaluate(text, &patterns[0]));
    debug!(pattern = %result.pattern, error = ?result.error, "input invalid");
    result
}
