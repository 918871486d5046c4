pub mod code;
pub mod diagnostic;
pub mod error;
pub mod lookup;

pub use code::{
    Checksum, ContainerCode, EquipCatId, OwnerCode, SERIAL_SPACE, Separators, SerialNumber,
    SizeType,
};
pub use diagnostic::{CharClass, FieldError, FieldKind, Note, Severity};
pub use error::{ModelError, Result};
pub use lookup::{
    Decoders, EquipCategoryLookup, HeightWidth, HeightWidthLookup, LengthLookup, Owner,
    OwnerLookup, TypeGroup, TypeGroupLookup,
};
