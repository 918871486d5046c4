//! CSV parsing of the lookup tables.

use std::collections::BTreeMap;

use icm_model::{FieldKind, HeightWidth, Owner, TypeGroup};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::embedded;
use crate::error::{Result, StandardsError};

/// The five tables, each stored in a file of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFile {
    Owners,
    EquipmentCategories,
    Lengths,
    HeightWidths,
    Types,
}

impl TableFile {
    pub const ALL: [TableFile; 5] = [
        Self::Owners,
        Self::EquipmentCategories,
        Self::Lengths,
        Self::HeightWidths,
        Self::Types,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Owners => "owners.csv",
            Self::EquipmentCategories => "equipment_categories.csv",
            Self::Lengths => "lengths.csv",
            Self::HeightWidths => "height_widths.csv",
            Self::Types => "types.csv",
        }
    }

    pub const fn embedded(self) -> &'static str {
        match self {
            Self::Owners => embedded::OWNERS,
            Self::EquipmentCategories => embedded::EQUIPMENT_CATEGORIES,
            Self::Lengths => embedded::LENGTHS,
            Self::HeightWidths => embedded::HEIGHT_WIDTHS,
            Self::Types => embedded::TYPES,
        }
    }

    /// Field whose format the table's key column must have.
    const fn key_kind(self) -> FieldKind {
        match self {
            Self::Owners => FieldKind::Owner,
            Self::EquipmentCategories => FieldKind::EquipmentCategory,
            Self::Lengths => FieldKind::Length,
            Self::HeightWidths => FieldKind::HeightWidth,
            Self::Types => FieldKind::TypeGroup,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    id: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct LengthRow {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct HeightWidthRow {
    code: String,
    height: String,
    width: String,
}

#[derive(Debug, Deserialize)]
struct TypeRow {
    code: String,
    type_description: String,
    group_description: String,
}

fn read_rows<T: DeserializeOwned>(content: &str, table: TableFile) -> Result<Vec<T>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    reader
        .deserialize()
        .map(|row| row.map_err(|source| StandardsError::csv(table.file_name(), source)))
        .collect()
}

/// Keys rows by their normalized key column. Rows with a malformed key
/// are skipped with a warning, duplicate keys are an error.
fn index<T, F>(rows: Vec<T>, table: TableFile, mut key: F) -> Result<BTreeMap<String, T>>
where
    F: FnMut(&mut T) -> &mut String,
{
    let kind = table.key_kind();
    let class = kind.char_class();
    let mut map = BTreeMap::new();
    for (idx, mut row) in rows.into_iter().enumerate() {
        let column = key(&mut row);
        let normalized = column.trim().to_ascii_uppercase();
        if normalized.chars().count() != kind.expected_len()
            || !normalized.chars().all(|c| class.matches(c))
        {
            warn!(
                file = table.file_name(),
                line = idx + 2,
                key = %normalized,
                expected = %kind.requirement(),
                "skipping lookup row with malformed key"
            );
            continue;
        }
        column.clone_from(&normalized);
        if map.insert(normalized.clone(), row).is_some() {
            return Err(StandardsError::DuplicateKey {
                file: table.file_name().to_string(),
                key: normalized,
            });
        }
    }
    Ok(map)
}

pub fn parse_owners(content: &str) -> Result<BTreeMap<String, Owner>> {
    let rows: Vec<Owner> = read_rows(content, TableFile::Owners)?;
    index(rows, TableFile::Owners, |owner| &mut owner.code)
}

pub fn parse_categories(content: &str) -> Result<BTreeMap<String, String>> {
    let rows: Vec<CategoryRow> = read_rows(content, TableFile::EquipmentCategories)?;
    let map = index(rows, TableFile::EquipmentCategories, |row| &mut row.id)?;
    Ok(map
        .into_iter()
        .map(|(id, row)| (id, row.description))
        .collect())
}

pub fn parse_lengths(content: &str) -> Result<BTreeMap<String, String>> {
    let rows: Vec<LengthRow> = read_rows(content, TableFile::Lengths)?;
    let map = index(rows, TableFile::Lengths, |row| &mut row.code)?;
    Ok(map
        .into_iter()
        .map(|(code, row)| (code, row.description))
        .collect())
}

pub fn parse_height_widths(content: &str) -> Result<BTreeMap<String, HeightWidth>> {
    let rows: Vec<HeightWidthRow> = read_rows(content, TableFile::HeightWidths)?;
    let map = index(rows, TableFile::HeightWidths, |row| &mut row.code)?;
    Ok(map
        .into_iter()
        .map(|(code, row)| {
            let decoded = HeightWidth {
                height: row.height,
                width: row.width,
            };
            (code, decoded)
        })
        .collect())
}

pub fn parse_types(content: &str) -> Result<BTreeMap<String, TypeGroup>> {
    let rows: Vec<TypeRow> = read_rows(content, TableFile::Types)?;
    let map = index(rows, TableFile::Types, |row| &mut row.code)?;
    Ok(map
        .into_iter()
        .map(|(code, row)| {
            let decoded = TypeGroup {
                type_description: row.type_description,
                group_description: row.group_description,
            };
            (code, decoded)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_keys_are_uppercased() {
        let owners = parse_owners("code,company,city,country\nmsk,Maersk,Copenhagen,Denmark\n")
            .unwrap();
        assert_eq!(owners["MSK"].code, "MSK");
        assert_eq!(owners["MSK"].city, "Copenhagen");
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let lengths = parse_lengths("code,description\n22,too long\n4,12192 mm\n").unwrap();
        assert_eq!(lengths.len(), 1);
        assert_eq!(lengths["4"], "12192 mm");
    }

    #[test]
    fn duplicate_keys_fail() {
        let err = parse_categories("id,description\nU,freight\nu,again\n").unwrap_err();
        assert!(matches!(err, StandardsError::DuplicateKey { ref key, .. } if key == "U"));
    }

    #[test]
    fn missing_column_reports_file() {
        let err = parse_types("code,type_description\nG1,vented\n").unwrap_err();
        assert!(err.to_string().contains("types.csv"), "{err}");
    }
}
