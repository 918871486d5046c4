//! Lookup tables embedded at compile time.

/// Registered owner codes.
pub const OWNERS: &str = include_str!("../data/owners.csv");

/// Equipment category ids.
pub const EQUIPMENT_CATEGORIES: &str = include_str!("../data/equipment_categories.csv");

/// Length codes (first character of the size code).
pub const LENGTHS: &str = include_str!("../data/lengths.csv");

/// Height and width codes (second character of the size code).
pub const HEIGHT_WIDTHS: &str = include_str!("../data/height_widths.csv");

/// Type codes with their type group.
pub const TYPES: &str = include_str!("../data/types.csv");
