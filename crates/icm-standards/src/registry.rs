//! In-memory lookup registry implementing every lookup trait.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use icm_model::{
    Decoders, EquipCategoryLookup, HeightWidth, HeightWidthLookup, LengthLookup, Owner,
    OwnerLookup, TypeGroup, TypeGroupLookup,
};
use tracing::{debug, info};

use crate::error::{Result, StandardsError};
use crate::loaders::{
    TableFile, parse_categories, parse_height_widths, parse_lengths, parse_owners, parse_types,
};
use crate::paths::data_dir_from_env;

/// Loaded lookup tables. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    owners: BTreeMap<String, Owner>,
    categories: BTreeMap<String, String>,
    lengths: BTreeMap<String, String>,
    height_widths: BTreeMap<String, HeightWidth>,
    types: BTreeMap<String, TypeGroup>,
}

impl Registry {
    /// Tables from `ICM_DATA_DIR` when set, the embedded ones otherwise.
    pub fn load() -> Result<Self> {
        match data_dir_from_env() {
            Some(dir) => Self::load_from_dir(&dir),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Self> {
        Self::from_sources(|table| Ok(Cow::Borrowed(table.embedded())))
    }

    /// Reads tables from `dir`. A table missing from the directory falls
    /// back to the embedded one.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(StandardsError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        Self::from_sources(|table| {
            let path = dir.join(table.file_name());
            if path.is_file() {
                debug!(path = %path.display(), "reading lookup table");
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| StandardsError::io(&path, source))
            } else {
                debug!(file = table.file_name(), "table not in data directory, using embedded");
                Ok(Cow::Borrowed(table.embedded()))
            }
        })
    }

    fn from_sources<F>(mut read: F) -> Result<Self>
    where
        F: FnMut(TableFile) -> Result<Cow<'static, str>>,
    {
        let registry = Self {
            owners: parse_owners(&read(TableFile::Owners)?)?,
            categories: parse_categories(&read(TableFile::EquipmentCategories)?)?,
            lengths: parse_lengths(&read(TableFile::Lengths)?)?,
            height_widths: parse_height_widths(&read(TableFile::HeightWidths)?)?,
            types: parse_types(&read(TableFile::Types)?)?,
        };
        info!(
            owners = registry.owners.len(),
            categories = registry.categories.len(),
            lengths = registry.lengths.len(),
            height_widths = registry.height_widths.len(),
            types = registry.types.len(),
            "lookup tables loaded"
        );
        Ok(registry)
    }

    pub fn decoders(&self) -> Decoders<'_> {
        Decoders {
            owners: self,
            categories: self,
            lengths: self,
            height_widths: self,
            types: self,
        }
    }

    pub fn owners(&self) -> impl Iterator<Item = &Owner> {
        self.owners.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .map(|(id, description)| (id.as_str(), description.as_str()))
    }

    pub fn lengths(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lengths
            .iter()
            .map(|(code, description)| (code.as_str(), description.as_str()))
    }

    pub fn height_widths(&self) -> impl Iterator<Item = (&str, &HeightWidth)> {
        self.height_widths.iter().map(|(code, hw)| (code.as_str(), hw))
    }

    pub fn types(&self) -> impl Iterator<Item = (&str, &TypeGroup)> {
        self.types.iter().map(|(code, group)| (code.as_str(), group))
    }
}

impl OwnerLookup for Registry {
    fn decode(&self, code: &str) -> Option<&Owner> {
        self.owners.get(&code.to_ascii_uppercase())
    }

    fn all_codes(&self) -> Vec<String> {
        self.owners.keys().cloned().collect()
    }
}

impl EquipCategoryLookup for Registry {
    fn decode(&self, id: &str) -> Option<&str> {
        self.categories
            .get(&id.to_ascii_uppercase())
            .map(String::as_str)
    }

    fn all_ids(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }
}

impl LengthLookup for Registry {
    fn decode(&self, code: &str) -> Option<&str> {
        self.lengths
            .get(&code.to_ascii_uppercase())
            .map(String::as_str)
    }
}

impl HeightWidthLookup for Registry {
    fn decode(&self, code: &str) -> Option<&HeightWidth> {
        self.height_widths.get(&code.to_ascii_uppercase())
    }
}

impl TypeGroupLookup for Registry {
    fn decode(&self, code: &str) -> Option<&TypeGroup> {
        self.types.get(&code.to_ascii_uppercase())
    }
}
