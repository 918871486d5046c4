//! Quadratic residue permutation of the serial space.
//!
//! For a prime `p ≡ 3 (mod 4)` the map `x -> x² mod p` (mirrored to
//! `p - x² mod p` for the upper half) is a bijection of `[0, p)`. Values in
//! `[p, 1_000_000)` map to themselves.

use icm_model::SERIAL_SPACE;

/// Largest prime below the serial space that is congruent to 3 mod 4.
pub(crate) const PRIME: u64 = 999_983;

pub(crate) fn permute(x: u32) -> u32 {
    let x = u64::from(x);
    if x >= PRIME {
        return x as u32;
    }
    let residue = x * x % PRIME;
    if x <= PRIME / 2 {
        residue as u32
    } else {
        (PRIME - residue) as u32
    }
}

/// Permuted serial for a counter value shifted by `offset`.
pub(crate) fn scrambled_serial(counter: u32, offset: u32) -> u32 {
    permute((counter % SERIAL_SPACE + offset % SERIAL_SPACE) % SERIAL_SPACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_is_three_mod_four() {
        assert_eq!(PRIME % 4, 3);
        assert!((2..1000u64).all(|d| PRIME % d != 0));
    }

    #[test]
    fn permutation_is_bijective() {
        let mut seen = vec![false; SERIAL_SPACE as usize];
        for x in 0..SERIAL_SPACE {
            let y = permute(x);
            assert!(y < SERIAL_SPACE);
            assert!(!seen[y as usize], "{y} produced twice");
            seen[y as usize] = true;
        }
    }

    #[test]
    fn excess_range_passes_through() {
        for x in PRIME as u32..SERIAL_SPACE {
            assert_eq!(permute(x), x);
        }
        assert_eq!(permute(0), 0);
        assert_eq!(permute(1), 1);
        assert_eq!(permute(2), 4);
    }
}
