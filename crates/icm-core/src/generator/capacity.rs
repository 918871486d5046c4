//! Exact count of the codes a configuration can produce.
//!
//! Whether a serial is excluded depends only on the serial and on the
//! owner+category weighted sum modulo 11, so admissible serials are counted
//! once per distinct residue in the owner pool.

use std::collections::BTreeMap;

use tracing::debug;

use super::config::{Exclusions, SerialRange};

pub(crate) fn capacity(residues: &[u32], range: SerialRange, exclusions: Exclusions) -> usize {
    if !exclusions.any() {
        return range.len() as usize * residues.len();
    }
    let mut per_residue: BTreeMap<u32, usize> = BTreeMap::new();
    residues
        .iter()
        .map(|&residue| {
            *per_residue.entry(residue).or_insert_with(|| {
                let count = range
                    .serials()
                    .filter(|&serial| !exclusions.excludes(residue, serial))
                    .count();
                debug!(residue, admissible = count, "counted admissible serials");
                count
            })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use icm_model::{SERIAL_SPACE, SerialNumber};

    use super::*;

    fn range(start: u32, end: u32) -> SerialRange {
        SerialRange::new(
            SerialNumber::new(start).unwrap(),
            SerialNumber::new(end).unwrap(),
        )
    }

    #[test]
    fn no_exclusions_is_range_times_owners() {
        let full = capacity(&[1, 2, 3], SerialRange::full(), Exclusions::default());
        assert_eq!(full, 3 * SERIAL_SPACE as usize);
        assert_eq!(capacity(&[4], range(0, 9), Exclusions::default()), 10);
    }

    #[test]
    fn checksum_ten_removes_about_one_eleventh() {
        let exclusions = Exclusions {
            check_digit_10: true,
            transposition_errors: false,
        };
        let per_owner = capacity(&[0], SerialRange::full(), exclusions);
        assert!((905_000..=913_000).contains(&per_owner), "{per_owner}");
        // same residue twice counts twice
        assert_eq!(capacity(&[0, 0], SerialRange::full(), exclusions), per_owner * 2);
    }

    #[test]
    fn transposition_exclusion_only_shrinks() {
        let both = Exclusions {
            check_digit_10: true,
            transposition_errors: true,
        };
        let ten_only = Exclusions {
            check_digit_10: true,
            transposition_errors: false,
        };
        let r = range(0, 9_999);
        assert!(capacity(&[5], r, both) <= capacity(&[5], r, ten_only));
        assert!(capacity(&[5], r, ten_only) < 10_000);
    }
}
