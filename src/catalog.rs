//! Material catalog
//!
//! Static registry of the recycling categories an item can belong to.

use serde::{Deserialize, Serialize};

/// Material category of a falling item (and of the bin that accepts it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Paper,
    Plastic,
    Glass,
    Organic,
    Metal,
}

/// Catalog entry for a material
#[derive(Debug)]
pub struct MaterialCategory {
    pub material: Material,
    /// Stable id token
    pub id: &'static str,
    /// Keyboard shortcut that sends the lowest item to this bin
    pub shortcut: char,
    /// Educational facts, one is shown after each correct sort
    pub facts: &'static [&'static str],
}

/// All categories, in shortcut order
pub static CATALOG: [MaterialCategory; 5] = [
    MaterialCategory {
        material: Material::Paper,
        id: "paper",
        shortcut: '1',
        facts: &[
            "Paper can be recycled up to 7 times.",
            "Recycling 1 tonne of paper saves about 17 trees.",
            "Use both sides of the sheet to cut down on paper.",
        ],
    },
    MaterialCategory {
        material: Material::Plastic,
        id: "plastic",
        shortcut: '2',
        facts: &[
            "A plastic bottle can take 500 years to break down.",
            "Avoid single-use plastics whenever you can.",
            "Reusing bottles shrinks your ecological footprint.",
        ],
    },
    MaterialCategory {
        material: Material::Glass,
        id: "glass",
        shortcut: '3',
        facts: &[
            "Glass is 100% recyclable, over and over again.",
            "Keep glass separate to avoid accidents and improve recycling.",
            "Recycling glass saves energy in manufacturing.",
        ],
    },
    MaterialCategory {
        material: Material::Organic,
        id: "organic",
        shortcut: '4',
        facts: &[
            "Organic scraps can be turned into compost.",
            "Don't mix organics with recyclables: it contaminates the material.",
            "Compost improves the soil and helps it hold moisture.",
        ],
    },
    MaterialCategory {
        material: Material::Metal,
        id: "metal",
        shortcut: '5',
        facts: &[
            "Aluminium can be recycled forever without losing quality.",
            "Crushing cans saves space in the bin.",
            "Recycling metal saves a lot of energy.",
        ],
    },
];

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Paper,
        Material::Plastic,
        Material::Glass,
        Material::Organic,
        Material::Metal,
    ];

    /// Catalog entry for this material
    pub fn category(self) -> &'static MaterialCategory {
        match self {
            Material::Paper => &CATALOG[0],
            Material::Plastic => &CATALOG[1],
            Material::Glass => &CATALOG[2],
            Material::Organic => &CATALOG[3],
            Material::Metal => &CATALOG[4],
        }
    }

    pub fn id(self) -> &'static str {
        self.category().id
    }

    pub fn shortcut(self) -> char {
        self.category().shortcut
    }

    pub fn facts(self) -> &'static [&'static str] {
        self.category().facts
    }

    /// Look up a material by its id token
    pub fn from_id(id: &str) -> Option<Self> {
        CATALOG.iter().find(|c| c.id == id).map(|c| c.material)
    }

    /// Look up a material by its keyboard shortcut
    pub fn from_shortcut(key: char) -> Option<Self> {
        CATALOG.iter().find(|c| c.shortcut == key).map(|c| c.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_match_materials() {
        for m in Material::ALL {
            assert_eq!(m.category().material, m);
            assert_eq!(m.facts().len(), 3);
        }
    }

    #[test]
    fn test_lookup_by_shortcut_and_id() {
        assert_eq!(Material::from_shortcut('1'), Some(Material::Paper));
        assert_eq!(Material::from_shortcut('5'), Some(Material::Metal));
        assert_eq!(Material::from_shortcut('6'), None);
        assert_eq!(Material::from_id("glass"), Some(Material::Glass));
        assert_eq!(Material::from_id("wood"), None);
        assert_eq!(Material::Organic.shortcut(), '4');
    }

    #[test]
    fn test_ids_and_shortcuts_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.shortcut, b.shortcut);
            }
        }
    }
}
