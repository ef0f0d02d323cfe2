use crate::utils::error::{ArticError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One artwork record as returned by the list, search and detail endpoints.
///
/// Only `id` is required. With field selection (`fields=`) or on search hits
/// most of the descriptive fields are missing or `null`; anything the API
/// sends beyond the named fields ends up in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artwork {
    pub fn has_image(&self) -> bool {
        self.image_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `{data, pagination}` wrapper every endpoint answers with.
///
/// Decoded as-is: `data` and `pagination` stay raw JSON values (`data` is an
/// array for list and search, an object for a single artwork) and are only
/// interpreted through the typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Number of entries in a list `data`; a single object counts as one.
    pub fn len(&self) -> usize {
        match &self.data {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `pagination` decoded on demand; absent or `null` gives `None`.
    pub fn pagination(&self) -> Result<Option<Pagination>> {
        match &self.pagination {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => Ok(Some(Pagination::deserialize(raw)?)),
        }
    }

    /// `data` decoded as a list of artworks.
    pub fn artworks(&self) -> Result<Vec<Artwork>> {
        match &self.data {
            Value::Array(_) => Ok(Vec::<Artwork>::deserialize(&self.data)?),
            Value::Null => Ok(Vec::new()),
            other => Err(shape_mismatch("a list of artworks", other)),
        }
    }

    /// `data` decoded as a single artwork.
    pub fn artwork(&self) -> Result<Artwork> {
        match &self.data {
            Value::Object(_) => Ok(Artwork::deserialize(&self.data)?),
            other => Err(shape_mismatch("a single artwork", other)),
        }
    }
}

fn shape_mismatch(expected: &str, found: &Value) -> ArticError {
    ArticError::DecodeError(serde::de::Error::custom(format!(
        "expected {} in `data`, got {}",
        expected,
        json_kind(found)
    )))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Size tokens understood by the IIIF image service.
pub struct ImageSize;

impl ImageSize {
    pub const THUMBNAIL: &'static str = "200";
    pub const CARD: &'static str = "400";
    pub const STANDARD: &'static str = "843";
    pub const LARGE: &'static str = "1686";
    pub const FULL: &'static str = "full";

    pub const ALLOWED: [&'static str; 5] = [
        Self::THUMBNAIL,
        Self::CARD,
        Self::STANDARD,
        Self::LARGE,
        Self::FULL,
    ];
}

pub const DEFAULT_IMAGE_SIZE: &str = ImageSize::STANDARD;
