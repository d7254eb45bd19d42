use crate::domain::astronaut_model::Astronaut;
use crate::domain::content_model::non_empty_string;
use crate::domain::content_model::optional_image;
use crate::domain::content_model::optional_selected;
use crate::domain::content_model::Category;
use crate::domain::content_model::CosmicObject;
use crate::domain::content_model::ImageRef;
use crate::domain::content_model::Selected;
use crate::providers::json::JsonSerializerImpl;
use log::warn;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Planned => "planned",
            MissionStatus::Active => "active",
            MissionStatus::Completed => "completed",
            MissionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MissionMetadata {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mission_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub agency: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub launch_date: Option<String>,
    #[serde(default, deserialize_with = "optional_selected")]
    pub mission_status: Option<Selected<MissionStatus>>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mission_objectives: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mission_description: Option<String>,
    #[serde(default, deserialize_with = "optional_image")]
    pub mission_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "crew_members")]
    pub crew_members: Vec<Astronaut>,
}

pub type Mission = CosmicObject<MissionMetadata>;

/// Keeps only resolved astronaut records, in stored order. Unexpanded
/// references and records of another type are dropped.
fn crew_members<'de, D>(deserializer: D) -> Result<Vec<Astronaut>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(entries
        .into_iter()
        .filter_map(|entry| match JsonSerializerImpl::from_value::<Astronaut>(entry) {
            Ok(astronaut) => match astronaut.category {
                None | Some(Category::Astronauts) => Some(astronaut),
                Some(other) => {
                    warn!(
                        "dropping crew member {} of type {}",
                        astronaut.slug,
                        other.as_str()
                    );
                    None
                }
            },
            Err(err) => {
                warn!("dropping unresolved crew member: {}", err);
                None
            }
        })
        .collect())
}
