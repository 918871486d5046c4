//! Field implementations, one per [`FieldKind`].

mod category;
mod check_digit;
mod owner;
mod serial;
mod size;

pub use category::EquipCategoryField;
pub use check_digit::CheckDigitField;
pub use owner::OwnerField;
pub use serial::SerialField;
pub use size::{HeightWidthField, LengthField, TypeGroupField};

use icm_model::{Decoders, FieldKind};

use crate::field::Field;

/// Builds the field for `kind`, wired to the lookup it needs.
pub fn field<'a>(kind: FieldKind, decoders: Decoders<'a>) -> Box<dyn Field + 'a> {
    match kind {
        FieldKind::Owner => Box::new(OwnerField::new(decoders.owners)),
        FieldKind::EquipmentCategory => Box::new(EquipCategoryField::new(decoders.categories)),
        FieldKind::Serial => Box::new(SerialField),
        FieldKind::CheckDigit => Box::new(CheckDigitField),
        FieldKind::Length => Box::new(LengthField::new(decoders.lengths)),
        FieldKind::HeightWidth => Box::new(HeightWidthField::new(decoders.height_widths)),
        FieldKind::TypeGroup => Box::new(TypeGroupField::new(decoders.types)),
    }
}
