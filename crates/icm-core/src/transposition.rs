//! Adjacent transpositions the check digit cannot catch.
//!
//! Swapping two different adjacent serial digits always changes the
//! checksum modulo 11, but the printed digit is taken modulo 10, so a swap
//! that turns a checksum of 0 into 10 (or back) goes unnoticed. Moving the
//! last serial digit across the check digit can also reproduce a passing
//! code.

use icm_model::{ContainerCode, EquipCatId, OwnerCode, SerialNumber};

use crate::checksum::{checksum_from_parts, prefix_residue};

/// Transposed serials (with their check digit) that still pass, lowest
/// position first.
pub(crate) fn transposed_serials(
    prefix_residue: u32,
    digits: [u8; 6],
) -> impl Iterator<Item = ([u8; 6], u8)> {
    let check = checksum_from_parts(prefix_residue, &digits).digit();

    let adjacent = (0..digits.len() - 1).filter_map(move |i| {
        if digits[i] == digits[i + 1] {
            return None;
        }
        let mut swapped = digits;
        swapped.swap(i, i + 1);
        checksum_from_parts(prefix_residue, &swapped)
            .matches(check)
            .then_some((swapped, check))
    });

    let last = digits[5];
    let across_check = (last != check)
        .then(|| {
            let mut swapped = digits;
            swapped[5] = check;
            checksum_from_parts(prefix_residue, &swapped)
                .matches(last)
                .then_some((swapped, last))
        })
        .flatten();

    adjacent.chain(across_check)
}

/// Lists the codes differing from `owner category serial` by one adjacent
/// swap that carry a passing check digit.
pub fn detect_transpositions(
    owner: &OwnerCode,
    category: EquipCatId,
    serial: SerialNumber,
) -> Vec<ContainerCode> {
    let residue = prefix_residue(owner, category);
    transposed_serials(residue, serial.digits())
        .filter_map(|(digits, check)| {
            let serial = SerialNumber::from_digits(digits).ok()?;
            ContainerCode::new(owner.clone(), category, serial, check).ok()
        })
        .collect()
}

/// Cheap form of [`detect_transpositions`] that stops at the first hit.
pub fn has_transposition_risk(
    owner: &OwnerCode,
    category: EquipCatId,
    serial: SerialNumber,
) -> bool {
    transposed_serials(prefix_residue(owner, category), serial.digits())
        .next()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{checksum, verify};

    fn owner(code: &str) -> OwnerCode {
        OwnerCode::parse(code).unwrap()
    }

    #[test]
    fn equal_digits_never_transpose() {
        for serial in [0, 111_111, 999_999] {
            let serial = SerialNumber::new(serial).unwrap();
            let found = detect_transpositions(&owner("ABC"), EquipCatId::FREIGHT, serial);
            assert!(found.len() <= 1);
            for code in &found {
                assert_eq!(&code.serial().digits()[..5], &serial.digits()[..5]);
            }
        }
    }

    #[test]
    fn detections_follow_position_order() {
        let serial = SerialNumber::parse("001773").unwrap();
        let found: Vec<String> = detect_transpositions(&owner("ABC"), EquipCatId::FREIGHT, serial)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            found,
            [
                "ABCU 010773 0",
                "ABCU 007173 0",
                "ABCU 001737 0",
                "ABCU 001770 3",
            ]
        );
        assert!(has_transposition_risk(&owner("ABC"), EquipCatId::FREIGHT, serial));
    }

    #[test]
    fn candidates_pass_and_differ_by_one_swap() {
        let owner = owner("NYK");
        let mut seen = 0;
        for value in (0..200_000).step_by(7) {
            let serial = SerialNumber::new(value).unwrap();
            let original = checksum(&owner, EquipCatId::FREIGHT, serial);
            for candidate in detect_transpositions(&owner, EquipCatId::FREIGHT, serial) {
                seen += 1;
                assert!(verify(&candidate), "{candidate} must pass");
                let before = serial.digits();
                let after = candidate.serial().digits();
                let diffs: Vec<usize> = (0..6).filter(|&i| before[i] != after[i]).collect();
                match diffs.as_slice() {
                    [i, j] => {
                        assert_eq!(j - i, 1);
                        assert_eq!(before[*i], after[*j]);
                        assert_eq!(before[*j], after[*i]);
                        assert_eq!(candidate.check_digit(), original.digit());
                    }
                    [5] => {
                        assert_eq!(after[5], original.digit());
                        assert_eq!(candidate.check_digit(), before[5]);
                    }
                    other => panic!("unexpected difference at {other:?}"),
                }
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn adjacent_swaps_only_hit_zero_and_ten() {
        let owner = owner("CSQ");
        for value in (0..100_000).step_by(3) {
            let serial = SerialNumber::new(value).unwrap();
            let original = checksum(&owner, EquipCatId::FREIGHT, serial);
            let adjacent_hit = detect_transpositions(&owner, EquipCatId::FREIGHT, serial)
                .iter()
                .any(|code| code.serial().digits()[..5] != serial.digits()[..5]);
            if adjacent_hit {
                assert_eq!(original.digit(), 0);
            }
        }
    }

    #[test]
    fn risk_agrees_with_detection() {
        let owner = owner("ABC");
        for value in (0..50_000).step_by(11) {
            let serial = SerialNumber::new(value).unwrap();
            assert_eq!(
                has_transposition_risk(&owner, EquipCatId::FREIGHT, serial),
                !detect_transpositions(&owner, EquipCatId::FREIGHT, serial).is_empty()
            );
        }
    }
}
