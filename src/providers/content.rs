use crate::domain::content_model::Category;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Top-level fields requested for every record.
pub const DEFAULT_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

/// Resolves one level of embedded records, e.g. a mission's crew.
pub const DEFAULT_DEPTH: u8 = 1;

#[derive(Debug, Error)]
pub enum ContentImplError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("content api responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ContentImplError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ContentImplError::Status { status, .. } => Some(*status),
            ContentImplError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum QueryOutcome<T> {
    Found(T),
    NotFound,
    Failed(ContentImplError),
}

impl<T> QueryOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryOutcome<U> {
        match self {
            QueryOutcome::Found(v) => QueryOutcome::Found(f(v)),
            QueryOutcome::NotFound => QueryOutcome::NotFound,
            QueryOutcome::Failed(err) => QueryOutcome::Failed(err),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectQuery {
    pub category: Category,
    pub slug: Option<String>,
    pub props: Vec<String>,
    pub depth: u8,
}

impl ObjectQuery {
    pub fn find(category: Category) -> Self {
        Self {
            category,
            slug: None,
            props: DEFAULT_PROPS.iter().map(|p| p.to_string()).collect(),
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn find_one(category: Category, slug: &str) -> Self {
        Self {
            slug: Some(slug.to_string()),
            ..Self::find(category)
        }
    }

    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

/// Read-only query interface over the hosted content store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_many(&self, query: &ObjectQuery) -> QueryOutcome<Vec<Value>>;

    async fn find_one(&self, query: &ObjectQuery) -> QueryOutcome<Value>;
}
