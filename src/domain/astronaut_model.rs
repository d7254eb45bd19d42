use crate::domain::content_model::lenient_count;
use crate::domain::content_model::lenient_flag;
use crate::domain::content_model::non_empty_string;
use crate::domain::content_model::optional_image;
use crate::domain::content_model::CosmicObject;
use crate::domain::content_model::ImageRef;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AstronautMetadata {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub space_agency: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub total_time_in_space: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub number_of_spaceflights: Option<u32>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub biography: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub major_achievements: Option<String>,
    #[serde(default, deserialize_with = "optional_image")]
    pub portrait: Option<ImageRef>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub still_active: bool,
}

pub type Astronaut = CosmicObject<AstronautMetadata>;

impl Astronaut {
    /// Full name, when it adds something beyond the title.
    pub fn distinct_full_name(&self) -> Option<&str> {
        self.metadata
            .full_name
            .as_deref()
            .filter(|name| *name != self.title)
    }

    /// Spaceflight count worth displaying; zero reads as unset.
    pub fn spaceflights(&self) -> Option<u32> {
        self.metadata.number_of_spaceflights.filter(|n| *n > 0)
    }
}
