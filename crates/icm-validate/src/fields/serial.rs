use icm_model::FieldKind;

use crate::field::{Field, FieldCheck, Siblings, check_format};

/// Six digits, no lookup.
pub struct SerialField;

impl Field for SerialField {
    fn kind(&self) -> FieldKind {
        FieldKind::Serial
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        match check_format(FieldKind::Serial, value) {
            Some(error) => FieldCheck::failed(error),
            None => FieldCheck::ok(),
        }
    }
}
