//! Generator behaviour through the public API.

use std::collections::HashSet;

use icm_core::{
    GeneratorConfig, GeneratorError, SerialRange, checksum, generate, has_transposition_risk,
    verify,
};
use icm_model::{ContainerCode, EquipCatId, OwnerCode, SerialNumber};

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
fn seeded_batch_has_ten_thousand_distinct_codes() {
    let config = GeneratorConfig::new(owners(&["MSK", "CSQ"]))
        .with_count(10_000)
        .with_seed(2024);
    let codes: Vec<ContainerCode> = generate(config).unwrap().collect();
    assert_eq!(codes.len(), 10_000);
    assert_eq!(codes.iter().collect::<HashSet<_>>().len(), 10_000);
    assert!(codes.iter().all(verify));
}

#[test]
fn capacity_boundary_in_sequential_mode() {
    let config = GeneratorConfig::new(owners(&["ABC", "NYK"]))
        .with_range(range(0, 99))
        .exclude_check_digit_10(true);
    let capacity = config.capacity();
    assert!(capacity > 150 && capacity < 200, "{capacity}");

    let codes: Vec<ContainerCode> = generate(config.clone().with_count(capacity))
        .unwrap()
        .collect();
    assert_eq!(codes.len(), capacity);
    assert_eq!(codes.iter().collect::<HashSet<_>>().len(), capacity);
    assert!(codes.iter().all(|code| {
        !checksum(code.owner(), code.category(), code.serial()).is_ambiguous()
    }));

    let result = generate(config.with_count(capacity + 1));
    assert!(matches!(
        result,
        Err(GeneratorError::CapacityExceeded { .. })
    ));
}

#[test]
fn single_owner_cannot_exceed_serial_space() {
    let config = GeneratorConfig::new(owners(&["ZIM"])).with_count(1_000_001);
    assert_eq!(
        generate(config).unwrap_err(),
        GeneratorError::CapacityExceeded {
            count: 1_000_001,
            capacity: 1_000_000,
        }
    );
}

#[test]
fn duplicate_owners_do_not_add_capacity() {
    let once = GeneratorConfig::new(owners(&["ABC"])).exclude_check_digit_10(true);
    let twice = GeneratorConfig::new(owners(&["ABC", "ABC"])).exclude_check_digit_10(true);
    assert_eq!(once.capacity(), twice.capacity());
}

#[test]
fn sequential_range_wraps_around() {
    let config = GeneratorConfig::new(owners(&["HLX"]))
        .with_count(4)
        .with_range(range(999_998, 1));
    let serials: Vec<u32> = generate(config)
        .unwrap()
        .map(|code| code.serial().value())
        .collect();
    assert_eq!(serials, vec![999_998, 999_999, 0, 1]);
}

#[test]
fn category_is_carried_into_codes() {
    let config = GeneratorConfig::new(owners(&["TGH"]))
        .with_count(3)
        .with_category(EquipCatId::parse("j").unwrap())
        .with_seed(5);
    for code in generate(config).unwrap() {
        assert_eq!(code.category().as_char(), 'J');
        assert!(verify(&code));
    }
}

#[test]
fn transposition_exclusion_holds_in_random_mode() {
    let config = GeneratorConfig::new(owners(&["ONE"]))
        .with_count(2_000)
        .exclude_transposition_errors(true)
        .with_seed(77);
    for code in generate(config).unwrap() {
        assert!(!has_transposition_risk(
            code.owner(),
            code.category(),
            code.serial()
        ));
    }
}

#[test]
fn infeasible_configs_fail_before_output() {
    assert_eq!(
        generate(GeneratorConfig::new(owners(&["ABC"])).with_count(0)).unwrap_err(),
        GeneratorError::InvalidCount
    );
    assert_eq!(
        generate(GeneratorConfig::new(Vec::new())).unwrap_err(),
        GeneratorError::EmptyOwnerPool
    );
}
