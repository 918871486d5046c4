//! Property tests for the check digit engine and the generator.

use std::collections::HashSet;

use icm_core::{GeneratorConfig, checksum, complete, detect_transpositions, generate, verify};
use icm_model::{EquipCatId, OwnerCode, SerialNumber};
use proptest::prelude::*;

fn owner_code() -> impl Strategy<Value = OwnerCode> {
    "[A-Z]{3}".prop_map(|code| OwnerCode::parse(&code).unwrap())
}

fn category() -> impl Strategy<Value = EquipCatId> {
    prop::sample::select(vec!['U', 'J', 'Z'])
        .prop_map(|c| EquipCatId::parse(&c.to_string()).unwrap())
}

fn serial() -> impl Strategy<Value = SerialNumber> {
    (0u32..1_000_000).prop_map(|value| SerialNumber::new(value).unwrap())
}

proptest! {
    #[test]
    fn checksum_is_deterministic_and_bounded(
        owner in owner_code(),
        category in category(),
        serial in serial(),
    ) {
        let first = checksum(&owner, category, serial);
        let second = checksum(&owner, category, serial);
        prop_assert_eq!(first, second);
        prop_assert!(first.value() <= 10);
        prop_assert_eq!(first.digit(), first.value() % 10);
    }

    #[test]
    fn completed_codes_verify(owner in owner_code(), category in category(), serial in serial()) {
        let code = complete(owner, category, serial);
        prop_assert!(verify(&code));
    }

    #[test]
    fn lowercase_owner_has_same_checksum(owner in "[a-z]{3}", serial in serial()) {
        let lower = OwnerCode::parse(&owner).unwrap();
        let upper = OwnerCode::parse(&owner.to_uppercase()).unwrap();
        prop_assert_eq!(
            checksum(&lower, EquipCatId::FREIGHT, serial),
            checksum(&upper, EquipCatId::FREIGHT, serial)
        );
    }

    #[test]
    fn transposition_candidates_pass_and_differ(
        owner in owner_code(),
        serial in serial(),
    ) {
        let original = complete(owner.clone(), EquipCatId::FREIGHT, serial);
        for candidate in detect_transpositions(&owner, EquipCatId::FREIGHT, serial) {
            prop_assert!(verify(&candidate));
            prop_assert_ne!(&candidate, &original);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn seeded_generation_is_distinct_and_valid(
        owners in prop::collection::vec(owner_code(), 1..4),
        count in 1usize..2_000,
        seed in any::<u64>(),
        exclude_ten in any::<bool>(),
    ) {
        let config = GeneratorConfig::new(owners.clone())
            .with_count(count)
            .exclude_check_digit_10(exclude_ten)
            .with_seed(seed);
        let codes: Vec<_> = generate(config).unwrap().collect();
        prop_assert_eq!(codes.len(), count);
        let unique: HashSet<_> = codes.iter().collect();
        prop_assert_eq!(unique.len(), count);
        for code in &codes {
            prop_assert!(verify(code));
            prop_assert!(owners.contains(code.owner()));
            if exclude_ten {
                prop_assert!(!checksum(code.owner(), code.category(), code.serial()).is_ambiguous());
            }
        }
    }
}
