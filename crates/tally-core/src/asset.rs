use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::{RecordId, Resource};

/// Asset identifier.
///
/// Asset ids travel as JSON strings. Numeric ids are kept in canonical decimal
/// form, so `"007"` and `"7"` name the same asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AssetId {
    fn from(raw: String) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Self(n.to_string()),
            Err(_) => Self(raw),
        }
    }
}

impl From<&str> for AssetId {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordId for AssetId {
    fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }

    fn sequence(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

/// A priced item with a unique slug and an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    /// Kept as a JSON number so the submitted representation round-trips.
    pub price: Number,
    pub slug: String,
    pub image: String,
}

/// Validated fields for a new asset.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub name: String,
    pub price: Number,
    pub slug: String,
    pub image: String,
}

/// Validated partial update for an asset. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub price: Option<Number>,
    pub slug: Option<String>,
    pub image: Option<String>,
}

impl Resource for Asset {
    type Id = AssetId;
    type Draft = NewAsset;
    type Patch = AssetPatch;

    const KIND: &'static str = "asset";
    const SECONDARY_KEY: Option<&'static str> = Some("slug");

    fn id(&self) -> &AssetId {
        &self.id
    }

    fn secondary_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn create(id: AssetId, draft: NewAsset) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            slug: draft.slug,
            image: draft.image,
        }
    }

    fn apply(&mut self, patch: AssetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}
