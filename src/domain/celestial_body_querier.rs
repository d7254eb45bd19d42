use crate::domain::celestial_body_model::CelestialBody;
use crate::domain::content_model::Category;
use crate::domain::content_querier::get_object;
use crate::domain::content_querier::list_objects;
use crate::domain::content_querier::ContentQuerierError;
use crate::providers::content::ContentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CelestialBodyQuerier {
    content: Arc<dyn ContentStore>,
}

impl CelestialBodyQuerier {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }
}

impl CelestialBodyQuerier {
    pub async fn list_celestial_bodies(&self) -> Result<Vec<CelestialBody>, ContentQuerierError> {
        list_objects(self.content.as_ref(), Category::CelestialBodies).await
    }
}

impl CelestialBodyQuerier {
    pub async fn get_celestial_body(
        &self,
        slug: &str,
    ) -> Result<Option<CelestialBody>, ContentQuerierError> {
        get_object(self.content.as_ref(), Category::CelestialBodies, slug).await
    }
}
