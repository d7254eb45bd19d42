use crate::providers::json::JsonSerializerImpl;
use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize)]
pub enum Category {
    #[serde(rename = "missions")]
    Missions,
    #[serde(rename = "astronauts")]
    Astronauts,
    #[serde(rename = "celestial-bodies")]
    CelestialBodies,
}

impl Category {
    /// Type slug understood by the content API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Missions => "missions",
            Category::Astronauts => "astronauts",
            Category::CelestialBodies => "celestial-bodies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Missions => "missions",
            Category::Astronauts => "astronauts",
            Category::CelestialBodies => "celestial bodies",
        };
        f.write_str(label)
    }
}

// Base record shared by every category
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "M: Default + Deserialize<'de>"))]
pub struct CosmicObject<M> {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: M,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub status: Option<String>,
}

/// A select-dropdown value as stored: machine key plus display label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Selected<K> {
    pub key: K,
    #[serde(rename = "value")]
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImageRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub imgix_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const MISSION_CARD: ImageSize = ImageSize::new(600, 300);
    pub const MISSION_HERO: ImageSize = ImageSize::new(1200, 600);
    pub const CREW_PORTRAIT: ImageSize = ImageSize::new(300, 300);
    pub const ASTRONAUT_CARD: ImageSize = ImageSize::new(600, 600);
    pub const ASTRONAUT_PORTRAIT: ImageSize = ImageSize::new(800, 800);
    pub const CELESTIAL_BODY_CARD: ImageSize = ImageSize::new(600, 400);
    pub const CELESTIAL_BODY_HERO: ImageSize = ImageSize::new(1200, 600);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ImageRef {
    /// Prefers the transform-capable URL and falls back to the raw upload.
    pub fn base_url(&self) -> &str {
        if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        }
    }

    pub fn sized(&self, size: ImageSize) -> String {
        format!(
            "{}?w={}&h={}&fit=crop&auto=format,compress",
            self.base_url(),
            size.width,
            size.height
        )
    }
}

// Lenient field helpers: the store emits null or "" for cleared fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

pub(crate) fn optional_image<'de, D>(deserializer: D) -> Result<Option<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredImage {
        Image(ImageRef),
        Cleared(String),
    }

    match Option::<StoredImage>::deserialize(deserializer)? {
        Some(StoredImage::Image(image)) if !image.base_url().trim().is_empty() => Ok(Some(image)),
        Some(StoredImage::Cleared(s)) if !s.trim().is_empty() => Err(serde::de::Error::custom(
            format!("expected an image object, got: {s}"),
        )),
        _ => Ok(None),
    }
}

/// A select value; `""`, `null` or an object without a key reads as unset.
pub(crate) fn optional_selected<'de, D, K>(deserializer: D) -> Result<Option<Selected<K>>, D::Error>
where
    D: Deserializer<'de>,
    K: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::Object(fields))
            if fields
                .get("key")
                .and_then(Value::as_str)
                .map_or(true, |key| key.trim().is_empty()) =>
        {
            Ok(None)
        }
        Some(value) => JsonSerializerImpl::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => Ok(flag),
        Some(Flag::Text(s)) => match s.trim().to_lowercase().as_str() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            _ => Err(serde::de::Error::custom(format!("invalid flag: {s}"))),
        },
        None => Ok(false),
    }
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Ok(Some(n)),
        Some(Count::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Count::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid count: {s}"))),
        None => Ok(None),
    }
}
