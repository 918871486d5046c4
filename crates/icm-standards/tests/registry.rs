//! Loading the lookup tables.

use std::fs;
use std::path::PathBuf;

use icm_model::{EquipCategoryLookup, LengthLookup, OwnerLookup, TypeGroupLookup};
use icm_standards::{Registry, StandardsError, TableFile};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "icm-standards-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn embedded_tables_decode_known_codes() {
    let registry = Registry::embedded().unwrap();
    let owner = OwnerLookup::decode(&registry, "MSK").unwrap();
    assert_eq!(owner.city, "Copenhagen");
    assert!(OwnerLookup::decode(&registry, "csq").is_some());
    assert_eq!(
        EquipCategoryLookup::decode(&registry, "U"),
        Some("freight container")
    );
    assert_eq!(LengthLookup::decode(&registry, "4"), Some("12192 mm"));
    let group = TypeGroupLookup::decode(&registry, "g1").unwrap();
    assert_eq!(
        group.group_description,
        "general purpose container without ventilation"
    );
    assert_eq!(registry.all_ids(), vec!["J", "U", "Z"]);
}

#[test]
fn every_embedded_table_is_non_empty() {
    let registry = Registry::embedded().unwrap();
    assert!(registry.owners().count() >= 10);
    assert_eq!(registry.categories().count(), 3);
    assert!(registry.lengths().count() > 0);
    assert!(registry.height_widths().count() > 0);
    assert!(registry.types().count() > 0);
}

#[test]
fn random_codes_are_distinct_and_registered() {
    let registry = Registry::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let codes = registry.random_codes(5, &mut rng);
    assert_eq!(codes.len(), 5);
    for code in &codes {
        assert!(OwnerLookup::decode(&registry, code).is_some());
    }
    let mut unique = codes.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);

    let all = registry.random_codes(1_000, &mut rng);
    assert_eq!(all.len(), registry.all_codes().len());
}

#[test]
fn directory_tables_replace_embedded_ones() {
    let dir = unique_temp_dir("override");
    fs::write(
        dir.join(TableFile::Owners.file_name()),
        "code,company,city,country\nXYZ,Example Leasing,Rotterdam,Netherlands\n",
    )
    .unwrap();

    let registry = Registry::load_from_dir(&dir).unwrap();
    assert_eq!(registry.all_codes(), vec!["XYZ"]);
    // untouched tables come from the embedded data
    assert_eq!(registry.categories().count(), 3);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_is_an_error() {
    let dir = std::env::temp_dir().join("icm-standards-does-not-exist-4711");
    let err = Registry::load_from_dir(&dir).unwrap_err();
    assert!(matches!(err, StandardsError::DirectoryNotFound { .. }));
}
