//! The portfolio store and its persisted representation.
//!
//! The store is an ordered list of [`ImageRecord`]s. It is persisted as a
//! versioned envelope:
//!
//! ```json
//! {"version": 1, "images": [{"id": "...", "url": "...", "category": "..."}]}
//! ```
//!
//! under the fixed storage key. Earlier builds stored a bare JSON array;
//! [`decode_persisted`] still accepts that shape and the next save upgrades
//! it to the envelope. Any other shape is rejected and the caller falls back
//! to the seed catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset::{Category, ImageRecord};
use crate::error::StateError;

/// Browser storage key for the persisted image list.
pub const STORAGE_KEY: &str = "photography_portfolio_images";

/// Current persisted-envelope schema version.
const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    images: &'a [ImageRecord],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    images: Vec<ImageRecord>,
}

/// The in-memory image list driving every gallery view.
///
/// Ids are unique at all times; callers obtain new ids through
/// [`Portfolio::allocate_id`]. Insertion order is preserved and is the only
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Portfolio {
    images: Vec<ImageRecord>,
}

impl Portfolio {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Records in the given category, in insertion order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ImageRecord> {
        self.images.iter().filter(move |img| img.category == category)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.images.iter().any(|img| img.id == id)
    }

    /// Append a record. The id must come from [`Portfolio::allocate_id`] (or
    /// otherwise be unique); an existing record with the same id is replaced
    /// rather than duplicated, keeping the uniqueness invariant.
    pub fn add(&mut self, record: ImageRecord) {
        self.remove(&record.id);
        self.images.push(record);
    }

    /// Remove the record with the given id. Removing an unknown id is a
    /// no-op.
    pub fn remove(&mut self, id: &str) {
        self.images.retain(|img| img.id != id);
    }

    /// Smallest non-colliding id for a millisecond creation timestamp.
    ///
    /// Two uploads in the same millisecond get `<ts>` and `<ts>-1`.
    pub fn allocate_id(&self, timestamp_millis: u64) -> String {
        let base = timestamp_millis.to_string();
        if !self.contains_id(&base) {
            return base;
        }
        let mut bump = 1u32;
        loop {
            let candidate = format!("{base}-{bump}");
            if !self.contains_id(&candidate) {
                return candidate;
            }
            bump += 1;
        }
    }
}

/// Serialize an image list to the versioned storage envelope.
pub fn encode_persisted(images: &[ImageRecord]) -> Result<String, StateError> {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        images,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a persisted value into an image list.
///
/// Accepts the current envelope and the legacy bare-array shape; everything
/// else is a [`StateError`].
pub fn decode_persisted(raw: &str) -> Result<Vec<ImageRecord>, StateError> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_array() {
        // Legacy shape; the next save rewrites it as an envelope.
        return Ok(serde_json::from_value(value)?);
    }
    let envelope: Envelope = serde_json::from_value(value)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(StateError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope.images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::seed_catalog;

    fn sample() -> Portfolio {
        Portfolio::new(vec![
            ImageRecord::new("1", "a.png", Category::Portrait),
            ImageRecord::new("2", "b.png", Category::Event),
        ])
    }

    #[test]
    fn by_category_filters_in_insertion_order() {
        let mut portfolio = sample();
        portfolio.add(ImageRecord::new("3", "c.png", Category::Portrait));

        let portraits: Vec<&str> = portfolio
            .by_category(Category::Portrait)
            .map(|img| img.url.as_str())
            .collect();
        assert_eq!(portraits, ["a.png", "c.png"]);

        let events: Vec<&str> = portfolio
            .by_category(Category::Event)
            .map(|img| img.url.as_str())
            .collect();
        assert_eq!(events, ["b.png"]);

        assert_eq!(portfolio.by_category(Category::Baby).count(), 0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut portfolio = sample();
        portfolio.remove("no-such-id");
        assert_eq!(portfolio, sample());
        portfolio.remove("1");
        portfolio.remove("1");
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn add_then_remove_restores_prior_content() {
        let mut portfolio = sample();
        let before = portfolio.clone();
        let id = portfolio.allocate_id(1_700_000_000_000);
        portfolio.add(ImageRecord::new(id.clone(), "d.png", Category::Baby));
        assert_eq!(portfolio.len(), 3);
        portfolio.remove(&id);
        assert_eq!(portfolio, before);
    }

    #[test]
    fn allocate_id_bumps_on_collision() {
        let mut portfolio = Portfolio::default();
        let first = portfolio.allocate_id(42);
        assert_eq!(first, "42");
        portfolio.add(ImageRecord::new(first, "a.png", Category::Portrait));
        let second = portfolio.allocate_id(42);
        assert_eq!(second, "42-1");
        portfolio.add(ImageRecord::new(second, "b.png", Category::Portrait));
        assert_eq!(portfolio.allocate_id(42), "42-2");
    }

    #[test]
    fn persisted_state_round_trips() {
        let portfolio = Portfolio::new(seed_catalog());
        let raw = encode_persisted(portfolio.images()).unwrap();
        let restored = decode_persisted(&raw).unwrap();
        assert_eq!(restored, portfolio.images());
    }

    #[test]
    fn legacy_bare_array_is_accepted() {
        let raw = r#"[{"id":"1","url":"a.png","category":"portrait"}]"#;
        let images = decode_persisted(raw).unwrap();
        assert_eq!(images, [ImageRecord::new("1", "a.png", Category::Portrait)]);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            decode_persisted("not json"),
            Err(StateError::Malformed(_))
        ));
        // Parses as JSON, but is neither an envelope nor a record array.
        assert!(matches!(
            decode_persisted(r#"{"images":"nope"}"#),
            Err(StateError::Malformed(_))
        ));
        assert!(matches!(
            decode_persisted(r#"[{"id":"1"}]"#),
            Err(StateError::Malformed(_))
        ));
    }

    #[test]
    fn future_schema_versions_are_rejected() {
        let raw = r#"{"version":2,"images":[]}"#;
        assert!(matches!(
            decode_persisted(raw),
            Err(StateError::UnsupportedVersion(2))
        ));
    }
}
