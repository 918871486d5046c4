use icm_model::{FieldError, FieldKind, Note, OwnerLookup};

use crate::field::{Field, FieldCheck, Siblings, check_format};

pub struct OwnerField<'a> {
    owners: &'a dyn OwnerLookup,
}

impl<'a> OwnerField<'a> {
    pub fn new(owners: &'a dyn OwnerLookup) -> Self {
        Self { owners }
    }
}

impl Field for OwnerField<'_> {
    fn kind(&self) -> FieldKind {
        FieldKind::Owner
    }

    fn validate(&self, value: &str, _siblings: Siblings<'_>) -> FieldCheck {
        if let Some(error) = check_format(FieldKind::Owner, value) {
            return FieldCheck::failed(error);
        }
        let code = value.to_ascii_uppercase();
        match self.owners.decode(&code) {
            Some(owner) => FieldCheck::ok().with_note(Note::Owner {
                company: owner.company.clone(),
                city: owner.city.clone(),
                country: owner.country.clone(),
            }),
            None => FieldCheck::failed(FieldError::NotRegistered {
                kind: FieldKind::Owner,
                value: code,
            }),
        }
    }
}
