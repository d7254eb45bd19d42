use crate::config::CosmicConfig;
use crate::providers::content::ContentImplError;
use crate::providers::content::ContentStore;
use crate::providers::content::ObjectQuery;
use crate::providers::content::QueryOutcome;
use crate::providers::json::JsonSerializerImpl;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;

#[derive(Deserialize)]
struct ObjectsResponse {
    #[serde(default)]
    objects: Vec<Value>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Client for the hosted content API's object endpoints.
#[derive(Clone)]
pub struct CosmicContentImpl {
    client: Client,
    objects_url: String,
    read_key: String,
}

impl CosmicContentImpl {
    pub fn new(config: &CosmicConfig) -> Result<Self, ContentImplError> {
        let client = Client::builder()
            .user_agent(concat!("space-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            objects_url: format!(
                "{}/buckets/{}/objects",
                config.api_url.trim_end_matches('/'),
                config.bucket_slug
            ),
            read_key: config.read_key.clone(),
        })
    }
}

impl CosmicContentImpl {
    fn query_params(&self, query: &ObjectQuery, limit: Option<u32>) -> Vec<(&'static str, String)> {
        let mut filter = json!({ "type": query.category.as_str() });
        if let Some(slug) = &query.slug {
            filter["slug"] = json!(slug);
        }

        let mut params = vec![
            ("read_key", self.read_key.clone()),
            ("query", JsonSerializerImpl::to_query_string(&filter)),
            ("props", query.props.join(",")),
            ("depth", query.depth.to_string()),
        ];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    async fn fetch_objects(
        &self,
        query: &ObjectQuery,
        limit: Option<u32>,
    ) -> QueryOutcome<Vec<Value>> {
        debug!(
            "querying {} objects (slug: {:?}, depth: {})",
            query.category, query.slug, query.depth
        );

        let response = match self
            .client
            .get(&self.objects_url)
            .query(&self.query_params(query, limit))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return QueryOutcome::Failed(ContentImplError::Transport(err)),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return QueryOutcome::Failed(ContentImplError::Transport(err)),
        };

        if status == StatusCode::NOT_FOUND {
            return QueryOutcome::NotFound;
        }

        if !status.is_success() {
            let message = match JsonSerializerImpl::deserialize::<ErrorResponse>(&body) {
                Ok(err) => err.message,
                Err(_) => body,
            };
            return QueryOutcome::Failed(ContentImplError::Status {
                status: status.as_u16(),
                message,
            });
        }

        match JsonSerializerImpl::deserialize::<ObjectsResponse>(&body) {
            Ok(parsed) => QueryOutcome::Found(parsed.objects),
            Err(err) => QueryOutcome::Failed(ContentImplError::Decode(err)),
        }
    }
}

#[async_trait]
impl ContentStore for CosmicContentImpl {
    async fn find_many(&self, query: &ObjectQuery) -> QueryOutcome<Vec<Value>> {
        self.fetch_objects(query, None).await
    }

    async fn find_one(&self, query: &ObjectQuery) -> QueryOutcome<Value> {
        match self.fetch_objects(query, Some(1)).await {
            QueryOutcome::Found(objects) => match objects.into_iter().next() {
                Some(object) => QueryOutcome::Found(object),
                None => QueryOutcome::NotFound,
            },
            other => other.map(|_| Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_model::Category;

    fn cosmic() -> CosmicContentImpl {
        CosmicContentImpl::new(&CosmicConfig {
            bucket_slug: "space-db".to_string(),
            read_key: "read-key".to_string(),
            write_key: None,
            api_url: "https://api.example.com/v3/".to_string(),
        })
        .expect("client should build")
    }

    #[test]
    fn objects_url_is_scoped_to_the_bucket() {
        assert_eq!(
            cosmic().objects_url,
            "https://api.example.com/v3/buckets/space-db/objects"
        );
    }

    #[test]
    fn find_one_params_filter_by_type_and_slug() {
        let query = ObjectQuery::find_one(Category::CelestialBodies, "mars");
        let params = cosmic().query_params(&query, Some(1));

        let filter = params
            .iter()
            .find(|(k, _)| *k == "query")
            .map(|(_, v)| serde_json::from_str::<Value>(v).unwrap())
            .unwrap();
        assert_eq!(filter, json!({"type": "celestial-bodies", "slug": "mars"}));
        assert!(params.contains(&("props", "id,title,slug,metadata".to_string())));
        assert!(params.contains(&("depth", "1".to_string())));
        assert!(params.contains(&("limit", "1".to_string())));
        assert!(params.contains(&("read_key", "read-key".to_string())));
    }

    #[test]
    fn find_many_params_have_no_limit() {
        let query = ObjectQuery::find(Category::Astronauts);
        let params = cosmic().query_params(&query, None);

        assert!(params.iter().all(|(k, _)| *k != "limit"));
    }
}
