//! The check digit depends on the owner code, equipment category id and
//! serial number resolved before it. It is calculable only when all three
//! are well formed; whether they are registered does not matter.

use icm_core::{checksum, detect_transpositions};
use icm_model::{Checksum, EquipCatId, FieldError, FieldKind, Note, OwnerCode, SerialNumber};

use crate::field::{Field, FieldCheck, Siblings, check_format, sibling};

pub struct CheckDigitField;

impl CheckDigitField {
    fn parts(siblings: Siblings<'_>) -> Option<(OwnerCode, EquipCatId, SerialNumber)> {
        let value = |kind| {
            sibling(siblings, kind)
                .filter(|resolved| resolved.well_formed)
                .map(|resolved| resolved.value.as_str())
        };
        let owner = OwnerCode::parse(value(FieldKind::Owner)?).ok()?;
        let category = EquipCatId::parse(value(FieldKind::EquipmentCategory)?).ok()?;
        let serial = SerialNumber::parse(value(FieldKind::Serial)?).ok()?;
        Some((owner, category, serial))
    }
}

impl Field for CheckDigitField {
    fn kind(&self) -> FieldKind {
        FieldKind::CheckDigit
    }

    fn validate(&self, value: &str, siblings: Siblings<'_>) -> FieldCheck {
        let parts = Self::parts(siblings);
        let calculated: Option<Checksum> = parts
            .as_ref()
            .map(|(owner, category, serial)| checksum(owner, *category, *serial));
        let calculated_note = |value: Checksum| Note::CalculatedCheckDigit {
            value: value.value(),
        };

        if let Some(error) = check_format(FieldKind::CheckDigit, value) {
            let check = FieldCheck::failed(error);
            return match calculated {
                Some(value) => check.with_note(calculated_note(value)),
                None => check,
            };
        }
        let (Some((owner, category, serial)), Some(calculated)) = (parts, calculated) else {
            return FieldCheck::failed(FieldError::NotCalculable);
        };

        let found = value
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map_or(0, |d| d as u8);
        if !calculated.matches(found) {
            return FieldCheck::failed(FieldError::ChecksumMismatch {
                found,
                calculated: calculated.digit(),
            })
            .with_note(calculated_note(calculated));
        }

        let mut check = FieldCheck::ok().with_note(calculated_note(calculated));
        if calculated.is_ambiguous() {
            check = check.with_note(Note::AmbiguousCheckDigit);
        }
        let transposed = detect_transpositions(&owner, category, serial);
        if !transposed.is_empty() {
            check = check.with_note(Note::PossibleTranspositions {
                codes: transposed.iter().map(ToString::to_string).collect(),
            });
        }
        check
    }
}
