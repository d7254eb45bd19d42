use crate::domain::content_model::non_empty_string;
use crate::domain::content_model::optional_image;
use crate::domain::content_model::CosmicObject;
use crate::domain::content_model::ImageRef;
use crate::domain::content_model::Selected;
use log::warn;
use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBodyType {
    Planet,
    Moon,
    Asteroid,
    Star,
    Galaxy,
    Nebula,
}

impl FromStr for CelestialBodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planet" => Ok(CelestialBodyType::Planet),
            "moon" => Ok(CelestialBodyType::Moon),
            "asteroid" => Ok(CelestialBodyType::Asteroid),
            "star" => Ok(CelestialBodyType::Star),
            "galaxy" => Ok(CelestialBodyType::Galaxy),
            "nebula" => Ok(CelestialBodyType::Nebula),
            _ => Err(format!("unknown celestial body type: {}", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CelestialBodyMetadata {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "body_type")]
    pub body_type: Option<Selected<CelestialBodyType>>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub distance_from_earth: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub diameter: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub discovery_date: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub key_facts: Option<String>,
    #[serde(default, deserialize_with = "optional_image")]
    pub image: Option<ImageRef>,
}

pub type CelestialBody = CosmicObject<CelestialBodyMetadata>;

impl CelestialBody {
    pub fn display_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or(&self.title)
    }
}

/// Normalizes both stored shapes of the type field to `{key, label}`.
/// Older records carry a bare string.
fn body_type<'de, D>(deserializer: D) -> Result<Option<Selected<CelestialBodyType>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct StoredSelected {
        #[serde(default)]
        key: Option<String>,
        #[serde(default, rename = "value")]
        label: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredType {
        Selected(StoredSelected),
        Bare(String),
    }

    match Option::<StoredType>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StoredType::Bare(raw)) if raw.trim().is_empty() => Ok(None),
        Some(StoredType::Bare(raw)) => {
            warn!("celestial body type stored as bare string: {}", raw);
            let key = raw.parse().map_err(D::Error::custom)?;
            Ok(Some(Selected {
                key,
                label: raw.trim().to_string(),
            }))
        }
        Some(StoredType::Selected(selected)) => {
            let raw_key = match selected.key {
                Some(key) if !key.trim().is_empty() => key,
                _ => return Ok(None),
            };
            let key: CelestialBodyType = raw_key.parse().map_err(D::Error::custom)?;
            let label = match selected.label {
                Some(label) if !label.trim().is_empty() => label,
                _ => raw_key,
            };
            Ok(Some(Selected { key, label }))
        }
    }
}
