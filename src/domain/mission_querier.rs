use crate::domain::content_model::Category;
use crate::domain::content_querier::get_object;
use crate::domain::content_querier::list_objects;
use crate::domain::content_querier::ContentQuerierError;
use crate::domain::mission_model::Mission;
use crate::providers::content::ContentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct MissionQuerier {
    content: Arc<dyn ContentStore>,
}

impl MissionQuerier {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }
}

impl MissionQuerier {
    pub async fn list_missions(&self) -> Result<Vec<Mission>, ContentQuerierError> {
        list_objects(self.content.as_ref(), Category::Missions).await
    }
}

impl MissionQuerier {
    pub async fn get_mission(&self, slug: &str) -> Result<Option<Mission>, ContentQuerierError> {
        get_object(self.content.as_ref(), Category::Missions, slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mem_content::MemoryContentImpl;
    use serde_json::json;

    fn querier() -> MissionQuerier {
        MissionQuerier::new(Arc::new(MemoryContentImpl::new(vec![
            json!({
                "id": "m1", "slug": "apollo-11", "title": "Apollo 11", "type": "missions",
                "metadata": {
                    "agency": "NASA",
                    "launch_date": "1969-07-16",
                    "mission_status": {"key": "completed", "value": "Completed"},
                    "crew_members": [
                        {"id": "a1", "slug": "neil-armstrong", "title": "Neil Armstrong", "type": "astronauts", "metadata": {}}
                    ]
                }
            }),
            json!({"id": "a1", "slug": "neil-armstrong", "title": "Neil Armstrong", "type": "astronauts", "metadata": {}}),
        ])))
    }

    #[tokio::test]
    async fn lists_only_missions() {
        let missions = querier().list_missions().await.unwrap();

        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].metadata.crew_members[0].title, "Neil Armstrong");
    }

    #[tokio::test]
    async fn repeated_gets_return_equal_records() {
        let querier = querier();
        let first = querier.get_mission("apollo-11").await.unwrap();
        let second = querier.get_mission("apollo-11").await.unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_slug_is_absent() {
        assert_eq!(querier().get_mission("gemini-4").await.unwrap(), None);
    }
}
