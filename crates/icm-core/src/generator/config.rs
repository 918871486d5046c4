use icm_model::{EquipCatId, OwnerCode, SERIAL_SPACE, SerialNumber};

use crate::checksum::{checksum_from_parts, serial_digits};
use crate::transposition::transposed_serials;

/// Inclusive serial range; wraps from 999999 back to 0 when `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialRange {
    start: SerialNumber,
    end: SerialNumber,
}

impl SerialRange {
    pub fn new(start: SerialNumber, end: SerialNumber) -> Self {
        Self { start, end }
    }

    /// `000000..=999999`.
    pub fn full() -> Self {
        Self::new(SerialNumber::wrapping(0), SerialNumber::wrapping(SerialNumber::MAX))
    }

    pub fn start(self) -> SerialNumber {
        self.start
    }

    pub fn end(self) -> SerialNumber {
        self.end
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u32 {
        let (start, end) = (self.start.value(), self.end.value());
        if end >= start {
            end - start + 1
        } else {
            SERIAL_SPACE - start + end + 1
        }
    }

    /// Serial at position `step` (0-based) within the range.
    pub(crate) fn nth(self, step: u32) -> u32 {
        (self.start.value() + step) % SERIAL_SPACE
    }

    pub(crate) fn serials(self) -> impl Iterator<Item = u32> {
        (0..self.len()).map(move |step| self.nth(step))
    }
}

/// Candidate filters applied during generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusions {
    /// Skip serials whose checksum value is 10.
    pub check_digit_10: bool,
    /// Skip serials for which an adjacent transposition would also pass.
    pub transposition_errors: bool,
}

impl Exclusions {
    pub fn any(self) -> bool {
        self.check_digit_10 || self.transposition_errors
    }

    pub(crate) fn excludes(self, prefix_residue: u32, serial: u32) -> bool {
        if !self.any() {
            return false;
        }
        let digits = serial_digits(serial);
        if self.check_digit_10 && checksum_from_parts(prefix_residue, &digits).is_ambiguous() {
            return true;
        }
        self.transposition_errors && transposed_serials(prefix_residue, digits).next().is_some()
    }
}

/// Parameters of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub(crate) count: usize,
    pub(crate) owners: Vec<OwnerCode>,
    pub(crate) category: EquipCatId,
    pub(crate) range: Option<SerialRange>,
    pub(crate) exclusions: Exclusions,
    pub(crate) seed: Option<u64>,
}

impl GeneratorConfig {
    /// A configuration producing a single random code from `owners`.
    pub fn new<I>(owners: I) -> Self
    where
        I: IntoIterator<Item = OwnerCode>,
    {
        Self {
            count: 1,
            owners: owners.into_iter().collect(),
            category: EquipCatId::default(),
            range: None,
            exclusions: Exclusions::default(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: EquipCatId) -> Self {
        self.category = category;
        self
    }

    /// Switch to sequential mode over `range`.
    #[must_use]
    pub fn with_range(mut self, range: SerialRange) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn exclude_check_digit_10(mut self, enable: bool) -> Self {
        self.exclusions.check_digit_10 = enable;
        self
    }

    #[must_use]
    pub fn exclude_transposition_errors(mut self, enable: bool) -> Self {
        self.exclusions.transposition_errors = enable;
        self
    }

    /// Fix the random offsets so random mode is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn owners(&self) -> &[OwnerCode] {
        &self.owners
    }

    pub fn category(&self) -> EquipCatId {
        self.category
    }

    pub fn range(&self) -> Option<SerialRange> {
        self.range
    }

    pub fn exclusions(&self) -> Exclusions {
        self.exclusions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> SerialRange {
        SerialRange::new(
            SerialNumber::new(start).unwrap(),
            SerialNumber::new(end).unwrap(),
        )
    }

    #[test]
    fn range_length_wraps() {
        assert_eq!(range(10, 19).len(), 10);
        assert_eq!(range(5, 5).len(), 1);
        assert_eq!(range(999_998, 1).len(), 4);
        assert_eq!(SerialRange::full().len(), SERIAL_SPACE);
        let serials: Vec<u32> = range(999_998, 1).serials().collect();
        assert_eq!(serials, vec![999_998, 999_999, 0, 1]);
    }

    #[test]
    fn builder_keeps_settings() {
        let config = GeneratorConfig::new([OwnerCode::parse("ABC").unwrap()])
            .with_count(5)
            .with_category(EquipCatId::parse("J").unwrap())
            .exclude_check_digit_10(true)
            .with_seed(7);
        assert_eq!(config.count(), 5);
        assert_eq!(config.category().as_char(), 'J');
        assert!(config.exclusions().check_digit_10);
        assert!(!config.exclusions().transposition_errors);
        assert!(config.range().is_none());
    }
}
