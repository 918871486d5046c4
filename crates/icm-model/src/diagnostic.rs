use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character class accepted by a field matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Alphanumeric,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Digit => c.is_ascii_digit(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    fn noun(self, count: usize) -> &'static str {
        match (self, count) {
            (Self::Letter, 1) => "letter",
            (Self::Letter, _) => "letters",
            (Self::Digit, 1) => "number",
            (Self::Digit, _) => "numbers",
            (Self::Alphanumeric, 1) => "character",
            (Self::Alphanumeric, _) => "characters",
        }
    }
}

/// The parts a marking can consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Owner,
    EquipmentCategory,
    Serial,
    CheckDigit,
    Length,
    HeightWidth,
    TypeGroup,
}

impl FieldKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "owner code",
            Self::EquipmentCategory => "equipment category id",
            Self::Serial => "serial number",
            Self::CheckDigit => "check digit",
            Self::Length => "length code",
            Self::HeightWidth => "height and width code",
            Self::TypeGroup => "type code",
        }
    }

    pub const fn expected_len(self) -> usize {
        match self {
            Self::Owner => 3,
            Self::Serial => 6,
            Self::TypeGroup => 2,
            Self::EquipmentCategory | Self::CheckDigit | Self::Length | Self::HeightWidth => 1,
        }
    }

    pub const fn char_class(self) -> CharClass {
        match self {
            Self::Owner | Self::EquipmentCategory => CharClass::Letter,
            Self::Serial | Self::CheckDigit => CharClass::Digit,
            Self::Length | Self::HeightWidth | Self::TypeGroup => CharClass::Alphanumeric,
        }
    }

    /// e.g. "3 letters".
    pub fn requirement(self) -> String {
        let len = self.expected_len();
        format!("{len} {}", self.char_class().noun(len))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Additional information attached to a validated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "note", rename_all = "snake_case")]
pub enum Note {
    Owner {
        company: String,
        city: String,
        country: String,
    },
    EquipmentCategory {
        description: String,
    },
    RegisteredCategories {
        ids: Vec<String>,
    },
    CalculatedCheckDigit {
        value: u8,
    },
    AmbiguousCheckDigit,
    PossibleTranspositions {
        codes: Vec<String>,
    },
    Length {
        description: String,
    },
    HeightWidth {
        height: String,
        width: String,
    },
    TypeGroup {
        type_description: String,
        group_description: String,
    },
}

impl Note {
    pub fn severity(&self) -> Severity {
        match self {
            Self::AmbiguousCheckDigit | Self::PossibleTranspositions { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner {
                company,
                city,
                country,
            } => write!(f, "{company}, {city}, {country}"),
            Self::EquipmentCategory { description } => f.write_str(description),
            Self::RegisteredCategories { ids } => {
                write!(f, "registered ids are {}", ids.join(", "))
            }
            Self::CalculatedCheckDigit { value } => {
                write!(f, "calculated check digit is {}", value % 10)
            }
            Self::AmbiguousCheckDigit => f.write_str(
                "check digit value is 10 and printed as 0, \
                 it is recommended not to use this serial number",
            ),
            Self::PossibleTranspositions { codes } => write!(
                f,
                "possible transposition errors pass the check digit: {}",
                codes.join(", ")
            ),
            Self::Length { description } => f.write_str(description),
            Self::HeightWidth { height, width } => write!(f, "height {height}, width {width}"),
            Self::TypeGroup {
                type_description,
                group_description,
            } => write!(f, "{type_description} ({group_description})"),
        }
    }
}

/// First-class validation failure of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{} must be {}", .kind.label(), .kind.requirement())]
    Format { kind: FieldKind, found: String },
    #[error("{} '{}' is not registered", .kind.label(), .value)]
    NotRegistered { kind: FieldKind, value: String },
    #[error(
        "check digit is not calculable, owner code, equipment category id \
         and serial number must be valid first"
    )]
    NotCalculable,
    #[error("check digit {found} does not match calculated check digit {calculated}")]
    ChecksumMismatch { found: u8, calculated: u8 },
    #[error("unexpected '{}' after {}", .found, .after.label())]
    UnexpectedText { after: FieldKind, found: String },
}

impl FieldError {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Format { kind, .. }
            | Self::NotRegistered { kind, .. }
            | Self::UnexpectedText { after: kind, .. } => *kind,
            Self::NotCalculable | Self::ChecksumMismatch { .. } => FieldKind::CheckDigit,
        }
    }
}
