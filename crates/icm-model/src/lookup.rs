//! Lookup collaborators consumed by validation and generation.
//!
//! Implementations are read-only snapshots: nothing in the validation or
//! generation path mutates or reloads them.

use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Registered owner of an owner code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub code: String,
    pub company: String,
    pub city: String,
    pub country: String,
}

/// Decoded height and width of a height/width code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightWidth {
    pub height: String,
    pub width: String,
}

/// Decoded type code together with its type group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeGroup {
    pub type_description: String,
    pub group_description: String,
}

pub trait OwnerLookup {
    fn decode(&self, code: &str) -> Option<&Owner>;

    fn all_codes(&self) -> Vec<String>;

    /// Picks up to `count` distinct registered codes.
    fn random_codes(&self, count: usize, rng: &mut dyn RngCore) -> Vec<String> {
        let codes = self.all_codes();
        codes.choose_multiple(rng, count).cloned().collect()
    }
}

pub trait EquipCategoryLookup {
    fn decode(&self, id: &str) -> Option<&str>;

    fn all_ids(&self) -> Vec<String>;
}

pub trait LengthLookup {
    fn decode(&self, code: &str) -> Option<&str>;
}

pub trait HeightWidthLookup {
    fn decode(&self, code: &str) -> Option<&HeightWidth>;
}

pub trait TypeGroupLookup {
    fn decode(&self, code: &str) -> Option<&TypeGroup>;
}

/// The full set of lookup collaborators, passed explicitly to whatever
/// builds validation fields.
#[derive(Clone, Copy)]
pub struct Decoders<'a> {
    pub owners: &'a dyn OwnerLookup,
    pub categories: &'a dyn EquipCategoryLookup,
    pub lengths: &'a dyn LengthLookup,
    pub height_widths: &'a dyn HeightWidthLookup,
    pub types: &'a dyn TypeGroupLookup,
}
