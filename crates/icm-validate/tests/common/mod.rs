#![allow(dead_code)]

use std::collections::BTreeMap;

use icm_model::{
    Decoders, EquipCategoryLookup, HeightWidth, HeightWidthLookup, LengthLookup, Owner,
    OwnerLookup, TypeGroup, TypeGroupLookup,
};

/// Small in-memory lookup tables.
#[derive(Debug, Default)]
pub struct Tables {
    owners: BTreeMap<String, Owner>,
    categories: BTreeMap<String, String>,
    lengths: BTreeMap<String, String>,
    height_widths: BTreeMap<String, HeightWidth>,
    types: BTreeMap<String, TypeGroup>,
}

impl Tables {
    pub fn new() -> Self {
        let mut tables = Self::default();
        for (code, company, city, country) in [
            ("ABC", "ABC Container Line", "Hamburg", "Germany"),
            ("NYK", "Nippon Yusen Kaisha", "Tokyo", "Japan"),
            ("CSQ", "COSCO Shipping Lines", "Shanghai", "China"),
        ] {
            tables.owners.insert(
                code.to_string(),
                Owner {
                    code: code.to_string(),
                    company: company.to_string(),
                    city: city.to_string(),
                    country: country.to_string(),
                },
            );
        }
        for (id, description) in [
            ("U", "freight container"),
            ("J", "detachable freight container-related equipment"),
            ("Z", "trailer and chassis"),
        ] {
            tables.categories.insert(id.to_string(), description.to_string());
        }
        tables.lengths.insert("2".to_string(), "6.058 m".to_string());
        tables.lengths.insert("4".to_string(), "12.192 m".to_string());
        for (code, height) in [("0", "2438 mm"), ("2", "2591 mm"), ("5", "2896 mm")] {
            tables.height_widths.insert(
                code.to_string(),
                HeightWidth {
                    height: height.to_string(),
                    width: "2438 mm".to_string(),
                },
            );
        }
        tables.types.insert(
            "G1".to_string(),
            TypeGroup {
                type_description: "passive vents at upper part of cargo space".to_string(),
                group_description: "general purpose container without ventilation".to_string(),
            },
        );
        tables
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
}

impl OwnerLookup for Tables {
    fn decode(&self, code: &str) -> Option<&Owner> {
        self.owners.get(code)
    }

    fn all_codes(&self) -> Vec<String> {
        self.owners.keys().cloned().collect()
    }
}

impl EquipCategoryLookup for Tables {
    fn decode(&self, id: &str) -> Option<&str> {
        self.categories.get(id).map(String::as_str)
    }

    fn all_ids(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }
}

impl LengthLookup for Tables {
    fn decode(&self, code: &str) -> Option<&str> {
        self.lengths.get(code).map(String::as_str)
    }
}

impl HeightWidthLookup for Tables {
    fn decode(&self, code: &str) -> Option<&HeightWidth> {
        self.height_widths.get(code)
    }
}

impl TypeGroupLookup for Tables {
    fn decode(&self, code: &str) -> Option<&TypeGroup> {
        self.types.get(code)
    }
}
