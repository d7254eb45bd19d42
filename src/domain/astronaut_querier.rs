use crate::domain::astronaut_model::Astronaut;
use crate::domain::content_model::Category;
use crate::domain::content_querier::get_object;
use crate::domain::content_querier::list_objects;
use crate::domain::content_querier::ContentQuerierError;
use crate::providers::content::ContentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AstronautQuerier {
    content: Arc<dyn ContentStore>,
}

impl AstronautQuerier {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }
}

impl AstronautQuerier {
    pub async fn list_astronauts(&self) -> Result<Vec<Astronaut>, ContentQuerierError> {
        list_objects(self.content.as_ref(), Category::Astronauts).await
    }
}

impl AstronautQuerier {
    pub async fn get_astronaut(
        &self,
        slug: &str,
    ) -> Result<Option<Astronaut>, ContentQuerierError> {
        get_object(self.content.as_ref(), Category::Astronauts, slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_querier::tests::ScriptedContent;

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let querier = AstronautQuerier::new(Arc::new(ScriptedContent::not_found()));
        assert!(querier.list_astronauts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_not_absence() {
        let querier = AstronautQuerier::new(Arc::new(ScriptedContent::failing()));

        assert!(matches!(
            querier.get_astronaut("sally-ride").await,
            Err(ContentQuerierError::GetFailed { .. })
        ));
        assert!(matches!(
            querier.list_astronauts().await,
            Err(ContentQuerierError::ListFailed { .. })
        ));
    }
}
