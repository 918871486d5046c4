use icm_model::{EquipCategoryLookup, FieldError, FieldKind, Note};

use crate::field::{Field, FieldCheck, Siblings, check_format};

pub struct EquipCategoryField<'a> {
    categories: &'a dyn EquipCategoryLookup,
}

impl<'a> EquipCategoryField<'a> {
    pub fn new(categories: &'a dyn EquipCategoryLookup) -> Self {
        Self { categories }
    }
}

impl Field for EquipCategoryField<'_> {
    fn kind(&self) -> FieldKind {
        FieldKind::EquipmentCategory
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        let registered = Note::RegisteredCategories {
            ids: self.categories.all_ids(),
        };
        if let Some(error) = check_format(FieldKind::EquipmentCategory, value) {
            return FieldCheck::failed(error).with_note(registered);
        }
        let id = value.to_ascii_uppercase();
        match self.categories.decode(&id) {
            Some(description) => FieldCheck::ok().with_note(Note::EquipmentCategory {
                description: description.to_string(),
            }),
            None => FieldCheck::failed(FieldError::NotRegistered {
                kind: FieldKind::EquipmentCategory,
                value: id,
            })
            .with_note(registered),
        }
    }
}
