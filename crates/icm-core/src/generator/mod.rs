//! Unique code generation.
//!
//! Two modes share one pull-based iterator:
//!
//! - **Random**: a counter runs through the serial space, is shifted by a
//!   random offset and fed through a quadratic residue permutation, so
//!   serials look random but never repeat. Each full pass over the serial
//!   space uses the next owner of the pool, starting at a random owner.
//! - **Sequential**: serials are taken in order from an inclusive range and,
//!   for every serial, each owner of the pool in turn.
//!
//! Excluded candidates are skipped in a loop; the capacity check up front
//! guarantees the iterator yields exactly `count` codes.

mod capacity;
mod config;
mod permutation;

pub use config::{Exclusions, GeneratorConfig, SerialRange};

use icm_model::{ContainerCode, EquipCatId, OwnerCode, SERIAL_SPACE, SerialNumber};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, trace};

use crate::checksum::{checksum_from_parts, prefix_residue, serial_digits};
use crate::error::GeneratorError;

#[derive(Debug, Clone)]
struct PoolEntry {
    owner: OwnerCode,
    residue: u32,
}

impl GeneratorConfig {
    /// Owner pool without duplicates, first occurrence wins.
    fn pool(&self) -> Vec<PoolEntry> {
        let mut pool: Vec<PoolEntry> = Vec::with_capacity(self.owners.len());
        for owner in &self.owners {
            if pool.iter().all(|entry| entry.owner != *owner) {
                pool.push(PoolEntry {
                    residue: prefix_residue(owner, self.category),
                    owner: owner.clone(),
                });
            }
        }
        pool
    }

    fn capacity_of(&self, pool: &[PoolEntry]) -> usize {
        let residues: Vec<u32> = pool.iter().map(|entry| entry.residue).collect();
        let space = self.range.unwrap_or_else(SerialRange::full);
        capacity::capacity(&residues, space, self.exclusions)
    }

    /// Number of distinct codes this configuration admits, ignoring `count`.
    pub fn capacity(&self) -> usize {
        self.capacity_of(&self.pool())
    }
}

#[derive(Debug, Clone)]
enum Cursor {
    Random {
        offset: u32,
        first_owner: usize,
        pass: usize,
        counter: u32,
    },
    Sequential {
        range: SerialRange,
        step: u32,
        owner: usize,
    },
}

impl Cursor {
    /// Next `(owner index, serial)` candidate, `None` once the space is used up.
    fn advance(&mut self, owners: usize) -> Option<(usize, u32)> {
        match self {
            Self::Random {
                offset,
                first_owner,
                pass,
                counter,
            } => {
                if *counter == SERIAL_SPACE {
                    *pass += 1;
                    *counter = 0;
                }
                if *pass >= owners {
                    return None;
                }
                let serial = permutation::scrambled_serial(*counter, *offset);
                *counter += 1;
                Some(((*first_owner + *pass) % owners, serial))
            }
            Self::Sequential { range, step, owner } => {
                if *step >= range.len() {
                    return None;
                }
                let candidate = (*owner, range.nth(*step));
                *owner += 1;
                if *owner == owners {
                    *owner = 0;
                    *step += 1;
                }
                Some(candidate)
            }
        }
    }
}

/// Iterator over distinct, checksum-valid codes.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    pool: Vec<PoolEntry>,
    category: EquipCatId,
    exclusions: Exclusions,
    cursor: Cursor,
    remaining: usize,
    capacity: usize,
}

impl CodeGenerator {
    /// Validates `config` and prepares the iterator.
    ///
    /// # Errors
    ///
    /// Fails when `count` is zero, the owner pool is empty or `count`
    /// exceeds the number of distinct admissible codes.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.count < 1 {
            return Err(GeneratorError::InvalidCount);
        }
        let pool = config.pool();
        if pool.is_empty() {
            return Err(GeneratorError::EmptyOwnerPool);
        }
        let capacity = config.capacity_of(&pool);
        if config.count > capacity {
            return Err(GeneratorError::CapacityExceeded {
                count: config.count,
                capacity,
            });
        }

        let cursor = match config.range {
            Some(range) => Cursor::Sequential {
                range,
                step: 0,
                owner: 0,
            },
            None => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Cursor::Random {
                    offset: rng.random_range(0..SERIAL_SPACE),
                    first_owner: rng.random_range(0..pool.len()),
                    pass: 0,
                    counter: 0,
                }
            }
        };

        info!(
            mode = if config.range.is_some() { "sequential" } else { "random" },
            count = config.count,
            capacity,
            owners = pool.len(),
            "code generator ready"
        );

        Ok(Self {
            pool,
            category: config.category,
            exclusions: config.exclusions,
            cursor,
            remaining: config.count,
            capacity,
        })
    }

    /// Number of distinct codes this configuration could produce at most.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Iterator for CodeGenerator {
    type Item = ContainerCode;

    fn next(&mut self) -> Option<ContainerCode> {
        if self.remaining == 0 {
            return None;
        }
        while let Some((index, serial)) = self.cursor.advance(self.pool.len()) {
            let entry = &self.pool[index];
            if self.exclusions.excludes(entry.residue, serial) {
                trace!(owner = %entry.owner, serial, "skipped excluded serial");
                continue;
            }
            self.remaining -= 1;
            let checksum = checksum_from_parts(entry.residue, &serial_digits(serial));
            return Some(ContainerCode::from_checksum(
                entry.owner.clone(),
                self.category,
                SerialNumber::wrapping(serial),
                checksum,
            ));
        }
        self.remaining = 0;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Shorthand for [`CodeGenerator::new`].
///
/// # Errors
///
/// See [`CodeGenerator::new`].
pub fn generate(config: GeneratorConfig) -> Result<CodeGenerator, GeneratorError> {
    CodeGenerator::new(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::checksum::{checksum, verify};
    use crate::transposition::has_transposition_risk;

    fn owners(codes: &[&str]) -> Vec<OwnerCode> {
        codes.iter().map(|c| OwnerCode::parse(c).unwrap()).collect()
    }

    fn range(start: u32, end: u32) -> SerialRange {
        SerialRange::new(
            SerialNumber::new(start).unwrap(),
            SerialNumber::new(end).unwrap(),
        )
    }

    #[test]
    fn rejects_zero_count() {
        let config = GeneratorConfig::new(owners(&["ABC"])).with_count(0);
        assert_eq!(generate(config).unwrap_err(), GeneratorError::InvalidCount);
    }

    #[test]
    fn rejects_empty_pool() {
        let config = GeneratorConfig::new(Vec::new()).with_count(1);
        assert_eq!(generate(config).unwrap_err(), GeneratorError::EmptyOwnerPool);
    }

    #[test]
    fn rejects_count_above_capacity() {
        let config = GeneratorConfig::new(owners(&["ABC", "ABC"])).with_count(1_000_001);
        assert_eq!(
            generate(config).unwrap_err(),
            GeneratorError::CapacityExceeded {
                count: 1_000_001,
                capacity: 1_000_000,
            }
        );
    }

    #[test]
    fn random_codes_are_distinct_and_valid() {
        let config = GeneratorConfig::new(owners(&["ABC", "NYK"]))
            .with_count(20_000)
            .with_seed(42);
        let codes: Vec<ContainerCode> = generate(config).unwrap().collect();
        assert_eq!(codes.len(), 20_000);
        let unique: HashSet<&ContainerCode> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.iter().all(verify));
    }

    #[test]
    fn seed_makes_random_mode_reproducible() {
        let make = || {
            generate(
                GeneratorConfig::new(owners(&["ABC", "CSQ", "NYK"]))
                    .with_count(50)
                    .with_seed(9),
            )
            .unwrap()
            .collect::<Vec<_>>()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn sequential_round_robins_owners() {
        let config = GeneratorConfig::new(owners(&["ABC", "NYK"]))
            .with_count(4)
            .with_range(range(999_999, 0));
        let codes: Vec<String> = generate(config).unwrap().map(|c| c.to_string()).collect();
        let expected: Vec<String> = [
            ("ABC", 999_999),
            ("NYK", 999_999),
            ("ABC", 0),
            ("NYK", 0),
        ]
        .into_iter()
        .map(|(owner, serial)| {
            crate::checksum::complete(
                OwnerCode::parse(owner).unwrap(),
                EquipCatId::FREIGHT,
                SerialNumber::new(serial).unwrap(),
            )
            .to_string()
        })
        .collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn sequential_fills_capacity_exactly() {
        let config = GeneratorConfig::new(owners(&["NYK", "ABC"]))
            .with_range(range(0, 199))
            .exclude_check_digit_10(true)
            .exclude_transposition_errors(true);
        let capacity = config.capacity();
        assert!(capacity < 400);
        assert_eq!(generate(config.clone()).unwrap().capacity(), capacity);

        let codes: Vec<ContainerCode> = generate(config.clone().with_count(capacity))
            .unwrap()
            .collect();
        assert_eq!(codes.len(), capacity);
        let unique: HashSet<&ContainerCode> = codes.iter().collect();
        assert_eq!(unique.len(), capacity);
        for code in &codes {
            let value = checksum(code.owner(), code.category(), code.serial());
            assert!(!value.is_ambiguous());
            assert!(!has_transposition_risk(
                code.owner(),
                code.category(),
                code.serial()
            ));
        }

        let err = generate(config.with_count(capacity + 1)).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::CapacityExceeded {
                count: capacity + 1,
                capacity,
            }
        );
    }

    #[test]
    fn excluded_checksum_ten_never_emitted() {
        let config = GeneratorConfig::new(owners(&["NYK"]))
            .with_count(5_000)
            .exclude_check_digit_10(true)
            .with_seed(1);
        for code in generate(config).unwrap() {
            assert!(!checksum(code.owner(), code.category(), code.serial()).is_ambiguous());
        }
    }

    #[test]
    fn random_pass_advances_to_next_owner() {
        let mut cursor = Cursor::Random {
            offset: 0,
            first_owner: 1,
            pass: 0,
            counter: SERIAL_SPACE - 1,
        };
        assert_eq!(cursor.advance(2).map(|(owner, _)| owner), Some(1));
        assert_eq!(cursor.advance(2).map(|(owner, _)| owner), Some(0));
        let mut last = cursor.clone();
        if let Cursor::Random { counter, pass, .. } = &mut last {
            *counter = SERIAL_SPACE;
            *pass = 1;
        }
        assert_eq!(last.advance(2), None);
    }
}
