use crate::providers::content::ContentImplError;
use crate::providers::content::ContentStore;
use crate::providers::content::ObjectQuery;
use crate::providers::content::QueryOutcome;
use crate::providers::json::JsonSerializerImpl;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Wrapped { objects: Vec<Value> },
    Bare(Vec<Value>),
}

/// In-process store holding fully expanded records, as returned by the API
/// at depth 1. Mirrors the API in answering "not found" when nothing matches.
#[derive(Clone, Default)]
pub struct MemoryContentImpl {
    objects: Vec<Value>,
}

impl MemoryContentImpl {
    pub fn new(objects: Vec<Value>) -> Self {
        Self { objects }
    }

    pub async fn from_file(path: &Path) -> Result<Self, ContentImplError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let objects = match JsonSerializerImpl::deserialize::<FixtureFile>(&raw)? {
            FixtureFile::Wrapped { objects } => objects,
            FixtureFile::Bare(objects) => objects,
        };

        Ok(Self::new(objects))
    }
}

impl MemoryContentImpl {
    fn matching<'a>(&'a self, query: &'a ObjectQuery) -> impl Iterator<Item = Value> + 'a {
        self.objects
            .iter()
            .filter(move |object| {
                object.get("type").and_then(Value::as_str) == Some(query.category.as_str())
            })
            .filter(move |object| match &query.slug {
                Some(slug) => object.get("slug").and_then(Value::as_str) == Some(slug.as_str()),
                None => true,
            })
            .map(move |object| project(object, &query.props))
    }
}

fn project(object: &Value, props: &[String]) -> Value {
    match object {
        Value::Object(fields) if !props.is_empty() => Value::Object(
            fields
                .iter()
                .filter(|(key, _)| props.iter().any(|p| p == *key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

#[async_trait]
impl ContentStore for MemoryContentImpl {
    async fn find_many(&self, query: &ObjectQuery) -> QueryOutcome<Vec<Value>> {
        let objects: Vec<Value> = self.matching(query).collect();
        if objects.is_empty() {
            QueryOutcome::NotFound
        } else {
            QueryOutcome::Found(objects)
        }
    }

    async fn find_one(&self, query: &ObjectQuery) -> QueryOutcome<Value> {
        match self.matching(query).next() {
            Some(object) => QueryOutcome::Found(object),
            None => QueryOutcome::NotFound,
        }
    }
}
