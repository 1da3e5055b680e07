//! Portfolio image records and the built-in seed catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gallery category an image belongs to.
///
/// Serialized in lowercase, matching both the persisted browser storage and
/// the `assets.js` module written by the sync helper. Unknown category
/// strings are a deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Portrait,
    Event,
    Baby,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Portrait, Category::Event, Category::Baby];

    /// Lowercase wire name, e.g. `"portrait"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Portrait => "portrait",
            Category::Event => "event",
            Category::Baby => "baby",
        }
    }

    /// Human-facing label for selectors, e.g. `"Baby Picture"`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Portrait => "Portrait",
            Category::Event => "Event",
            Category::Baby => "Baby Picture",
        }
    }

    /// Parse a lowercase wire name; `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "portrait" => Some(Category::Portrait),
            "event" => Some(Category::Event),
            "baby" => Some(Category::Baby),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single portfolio image: unique id, source URL (site-relative path or
/// inlined `data:` URI), and gallery category. Insertion order in the store
/// is the only ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    pub category: Category,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            category,
        }
    }
}

/// The built-in asset catalog used whenever no valid persisted state exists.
pub fn seed_catalog() -> Vec<ImageRecord> {
    vec![
        ImageRecord::new("seed-1", "/hero_bg.png", Category::Portrait),
        ImageRecord::new("seed-2", "/portrait_2.png", Category::Portrait),
        ImageRecord::new("seed-3", "/portrait_3.png", Category::Portrait),
        ImageRecord::new("seed-4", "/portrait_4.png", Category::Portrait),
        ImageRecord::new("seed-5", "/event_1.png", Category::Event),
        ImageRecord::new("seed-6", "/event_2.png", Category::Event),
        ImageRecord::new("seed-7", "/event_3.png", Category::Event),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Baby).unwrap();
        assert_eq!(json, "\"baby\"");
        let back: Category = serde_json::from_str("\"portrait\"").unwrap();
        assert_eq!(back, Category::Portrait);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result: Result<Category, _> = serde_json::from_str("\"landscape\"");
        assert!(result.is_err());
    }

    #[test]
    fn parse_matches_wire_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("Portrait"), None);
    }

    #[test]
    fn seed_catalog_ids_are_unique() {
        let catalog = seed_catalog();
        for (i, record) in catalog.iter().enumerate() {
            assert!(catalog.iter().skip(i + 1).all(|other| other.id != record.id));
        }
    }
}
