//! Typed container code components.
//!
//! A container code is rendered as
//!
//! ```text
//! OWNER <a> CATEGORY <b> SERIAL <c> CHECK [<d> LENGTH HEIGHTWIDTH <e> TYPE]
//! ```
//!
//! where the separators `<a>`..`<e>` are presentation only. Every
//! constructor here normalizes to uppercase and rejects malformed input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Number of distinct serial numbers (`000000..=999999`).
pub const SERIAL_SPACE: u32 = 1_000_000;

/// Three letter owner code, e.g. `MSK`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerCode(String);

impl OwnerCode {
    pub const LEN: usize = 3;

    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if value.len() != Self::LEN || !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidOwnerCode {
                value: raw.to_string(),
            });
        }
        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OwnerCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<OwnerCode> for String {
    fn from(value: OwnerCode) -> Self {
        value.0
    }
}

impl fmt::Display for OwnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equipment category identifier (`U`, `J` or `Z` in the registered set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EquipCatId(char);

impl EquipCatId {
    /// Freight container.
    pub const FREIGHT: Self = Self('U');

    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim();
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(ModelError::InvalidCategory {
                value: raw.to_string(),
            }),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for EquipCatId {
    fn default() -> Self {
        Self::FREIGHT
    }
}

impl TryFrom<String> for EquipCatId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<EquipCatId> for String {
    fn from(value: EquipCatId) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for EquipCatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Six digit serial number, printed zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber(u32);

impl SerialNumber {
    pub const LEN: usize = 6;
    pub const MAX: u32 = SERIAL_SPACE - 1;

    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(ModelError::SerialOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Reduces `value` into the serial space.
    pub fn wrapping(value: u32) -> Self {
        Self(value % SERIAL_SPACE)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if value.len() != Self::LEN || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ModelError::InvalidSerial {
                value: raw.to_string(),
            });
        }
        value
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidSerial {
                value: raw.to_string(),
            })
    }

    /// Builds a serial number from six decimal digits, most significant first.
    pub fn from_digits(digits: [u8; 6]) -> Result<Self> {
        let mut value = 0u32;
        for digit in digits {
            if digit > 9 {
                return Err(ModelError::InvalidSerial {
                    value: format!("{digits:?}"),
                });
            }
            value = value * 10 + u32::from(digit);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Decimal digits, most significant first.
    pub fn digits(self) -> [u8; 6] {
        let mut digits = [0u8; 6];
        let mut rest = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        digits
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Computed checksum value in `0..=10`.
///
/// The printed check digit is `value % 10`, so a value of 10 is written as
/// `0`. That case is legal but ambiguous and callers are expected to surface
/// it (see [`Checksum::is_ambiguous`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(u8);

impl Checksum {
    pub const AMBIGUOUS: u8 = 10;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::AMBIGUOUS {
            return Err(ModelError::ChecksumOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Reduces a weighted character sum modulo 11.
    pub fn from_weighted_sum(sum: u32) -> Self {
        Self((sum % 11) as u8)
    }

    /// Raw value, 0..=10.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit that is printed on the container.
    pub fn digit(self) -> u8 {
        self.0 % 10
    }

    pub fn is_ambiguous(self) -> bool {
        self.0 == Self::AMBIGUOUS
    }

    /// Compares a supplied check digit against this checksum.
    pub fn matches(self, digit: u8) -> bool {
        self.digit() == digit
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Size and type suffix, e.g. `22` + `G1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeType {
    length: char,
    height_width: char,
    type_code: String,
}

impl SizeType {
    /// Parses a two character size code (length, height/width) and a two
    /// character type code.
    pub fn parse(size_code: &str, type_code: &str) -> Result<Self> {
        let size = size_code.trim();
        let mut chars = size.chars();
        let (length, height_width) = match (chars.next(), chars.next(), chars.next()) {
            (Some(l), Some(hw), None)
                if l.is_ascii_alphanumeric() && hw.is_ascii_alphanumeric() =>
            {
                (l.to_ascii_uppercase(), hw.to_ascii_uppercase())
            }
            _ => {
                return Err(ModelError::InvalidSizeCode {
                    value: size_code.to_string(),
                });
            }
        };
        let kind = type_code.trim();
        if kind.len() != 2 || !kind.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ModelError::InvalidTypeCode {
                value: type_code.to_string(),
            });
        }
        Ok(Self {
            length,
            height_width,
            type_code: kind.to_ascii_uppercase(),
        })
    }

    pub fn length(&self) -> char {
        self.length
    }

    pub fn height_width(&self) -> char {
        self.height_width
    }

    pub fn size_code(&self) -> String {
        format!("{}{}", self.length, self.height_width)
    }

    pub fn type_code(&self) -> &str {
        &self.type_code
    }
}

/// Separators placed between the parts of a rendered code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    pub owner_equip: String,
    pub equip_serial: String,
    pub serial_check: String,
    pub check_size: String,
    pub size_type: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            owner_equip: String::new(),
            equip_serial: " ".to_string(),
            serial_check: " ".to_string(),
            check_size: " ".to_string(),
            size_type: " ".to_string(),
        }
    }
}

/// A complete container code.
///
/// Construction does not verify the check digit; use the checksum engine
/// for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerCode {
    owner: OwnerCode,
    category: EquipCatId,
    serial: SerialNumber,
    check_digit: u8,
    size_type: Option<SizeType>,
}

impl ContainerCode {
    pub fn new(
        owner: OwnerCode,
        category: EquipCatId,
        serial: SerialNumber,
        check_digit: u8,
    ) -> Result<Self> {
        if check_digit > 9 {
            return Err(ModelError::InvalidCheckDigit { value: check_digit });
        }
        Ok(Self {
            owner,
            category,
            serial,
            check_digit,
            size_type: None,
        })
    }

    /// Builds a code whose check digit is the printed digit of `checksum`.
    pub fn from_checksum(
        owner: OwnerCode,
        category: EquipCatId,
        serial: SerialNumber,
        checksum: Checksum,
    ) -> Self {
        Self {
            owner,
            category,
            serial,
            check_digit: checksum.digit(),
            size_type: None,
        }
    }

    #[must_use]
    pub fn with_size_type(mut self, size_type: SizeType) -> Self {
        self.size_type = Some(size_type);
        self
    }

    pub fn owner(&self) -> &OwnerCode {
        &self.owner
    }

    pub fn category(&self) -> EquipCatId {
        self.category
    }

    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    pub fn size_type(&self) -> Option<&SizeType> {
        self.size_type.as_ref()
    }

    pub fn render(&self, separators: &Separators) -> String {
        let mut out = format!(
            "{}{}{}{}{}{}{}",
            self.owner,
            separators.owner_equip,
            self.category,
            separators.equip_serial,
            self.serial,
            separators.serial_check,
            self.check_digit
        );
        if let Some(size_type) = &self.size_type {
            out.push_str(&separators.check_size);
            out.push_str(&size_type.size_code());
            out.push_str(&separators.size_type);
            out.push_str(size_type.type_code());
        }
        out
    }
}

impl fmt::Display for ContainerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Separators::default()))
    }
}
