use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("owner code must be 3 letters, found '{value}'")]
    InvalidOwnerCode { value: String },
    #[error("equipment category id must be 1 letter, found '{value}'")]
    InvalidCategory { value: String },
    #[error("serial number must be 6 numbers, found '{value}'")]
    InvalidSerial { value: String },
    #[error("serial number {value} is out of range 0..=999999")]
    SerialOutOfRange { value: u32 },
    #[error("check digit must be a single digit, found {value}")]
    InvalidCheckDigit { value: u8 },
    #[error("checksum value must be in 0..=10, found {value}")]
    ChecksumOutOfRange { value: u8 },
    #[error("size code must be 2 letters or numbers, found '{value}'")]
    InvalidSizeCode { value: String },
    #[error("type code must be 2 letters or numbers, found '{value}'")]
    InvalidTypeCode { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
