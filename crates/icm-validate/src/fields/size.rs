//! Length, height/width and type code fields of the size/type suffix.

use icm_model::{FieldError, FieldKind, HeightWidthLookup, LengthLookup, Note, TypeGroupLookup};

use crate::field::{Field, FieldCheck, Siblings, check_format};

/// Format check, then lookup; `describe` turns a hit into its note.
fn lookup<F>(kind: FieldKind, value: &str, describe: F) -> FieldCheck
where
    F: FnOnce(&str) -> Option<Note>,
{
    if let Some(error) = check_format(kind, value) {
        return FieldCheck::failed(error);
    }
    let code = value.to_ascii_uppercase();
    match describe(&code) {
        Some(note) => FieldCheck::ok().with_note(note),
        None => FieldCheck::failed(FieldError::NotRegistered { kind, value: code }),
    }
}

pub struct LengthField<'a> {
    lengths: &'a dyn LengthLookup,
}

impl<'a> LengthField<'a> {
    pub fn new(lengths: &'a dyn LengthLookup) -> Self {
        Self { lengths }
    }
}

impl Field for LengthField<'_> {
    fn kind(&self) -> FieldKind {
        FieldKind::Length
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        lookup(FieldKind::Length, value, |code| {
            self.lengths.decode(code).map(|description| Note::Length {
                description: description.to_string(),
            })
        })
    }
}

pub struct HeightWidthField<'a> {
    height_widths: &'a dyn HeightWidthLookup,
}

impl<'a> HeightWidthField<'a> {
    pub fn new(height_widths: &'a dyn HeightWidthLookup) -> Self {
        Self { height_widths }
    }
}

impl Field for HeightWidthField<'_> {
    fn kind(&self) -> FieldKind {
        FieldKind::HeightWidth
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        lookup(FieldKind::HeightWidth, value, |code| {
            self.height_widths.decode(code).map(|hw| Note::HeightWidth {
                height: hw.height.clone(),
                width: hw.width.clone(),
            })
        })
    }
}

pub struct TypeGroupField<'a> {
    types: &'a dyn TypeGroupLookup,
}

impl<'a> TypeGroupField<'a> {
    pub fn new(types: &'a dyn TypeGroupLookup) -> Self {
        Self { types }
    }
}

impl Field for TypeGroupField<'_> {
    fn kind(&self) -> FieldKind {
        FieldKind::TypeGroup
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        lookup(FieldKind::TypeGroup, value, |code| {
            self.types.decode(code).map(|group| Note::TypeGroup {
                type_description: group.type_description.clone(),
                group_description: group.group_description.clone(),
            })
        })
    }
}
