//! Check digit calculation.
//!
//! The owner code, equipment category id and serial number form an eleven
//! character string. Each character is mapped to a number (digits to
//! themselves, letters to 10..=38 skipping multiples of eleven), weighted
//! with `2^position` and summed. The checksum is that sum modulo 11.

use icm_model::{Checksum, ContainerCode, EquipCatId, OwnerCode, SerialNumber};

const LETTER_VALUES: [u32; 26] = [
    10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 35,
    36, 37, 38,
];

/// Weights of the six serial digits; the four prefix characters use 1, 2, 4, 8.
const SERIAL_WEIGHTS: [u32; 6] = [16, 32, 64, 128, 256, 512];

pub(crate) const MODULUS: u32 = 11;

/// Numeric value of a code character, `None` for anything but `0-9A-Za-z`.
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(LETTER_VALUES[(c as u8 - b'A') as usize]),
        'a'..='z' => Some(LETTER_VALUES[(c as u8 - b'a') as usize]),
        _ => None,
    }
}

/// Weighted sum of owner code and category, reduced modulo 11.
pub(crate) fn prefix_residue(owner: &OwnerCode, category: EquipCatId) -> u32 {
    let mut sum = 0;
    let mut weight = 1;
    for c in owner.as_str().chars().chain(std::iter::once(category.as_char())) {
        sum += weight * char_value(c).unwrap_or(0);
        weight *= 2;
    }
    sum % MODULUS
}

pub(crate) fn serial_digits(serial: u32) -> [u8; 6] {
    SerialNumber::wrapping(serial).digits()
}

pub(crate) fn serial_sum(digits: &[u8; 6]) -> u32 {
    digits
        .iter()
        .zip(SERIAL_WEIGHTS)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

pub(crate) fn checksum_from_parts(prefix_residue: u32, digits: &[u8; 6]) -> Checksum {
    Checksum::from_weighted_sum(prefix_residue + serial_sum(digits))
}

/// Computes the checksum value (0..=10) of a code.
pub fn checksum(owner: &OwnerCode, category: EquipCatId, serial: SerialNumber) -> Checksum {
    checksum_from_parts(prefix_residue(owner, category), &serial.digits())
}

/// Builds the complete code, check digit included.
pub fn complete(owner: OwnerCode, category: EquipCatId, serial: SerialNumber) -> ContainerCode {
    let checksum = checksum(&owner, category, serial);
    ContainerCode::from_checksum(owner, category, serial, checksum)
}

/// Whether the check digit of `code` matches its calculated checksum.
pub fn verify(code: &ContainerCode) -> bool {
    checksum(code.owner(), code.category(), code.serial()).matches(code.check_digit())
}
