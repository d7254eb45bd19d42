use crate::domain::content_model::Category;
use crate::domain::content_model::CosmicObject;
use crate::providers::content::ContentImplError;
use crate::providers::content::ContentStore;
use crate::providers::content::ObjectQuery;
use crate::providers::content::QueryOutcome;
use crate::providers::json::JsonSerializerImpl;
use log::error;
use log::info;
use log::warn;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentQuerierError {
    #[error("failed to fetch {category}")]
    ListFailed {
        category: Category,
        #[source]
        source: ContentImplError,
    },
    #[error("failed to fetch {category}: {slug}")]
    GetFailed {
        category: Category,
        slug: String,
        #[source]
        source: ContentImplError,
    },
}

/// Every record of one category, in store order. An unpopulated category
/// is an empty list, not an error. Records that fail validation are
/// skipped.
pub(crate) async fn list_objects<M>(
    content: &dyn ContentStore,
    category: Category,
) -> Result<Vec<CosmicObject<M>>, ContentQuerierError>
where
    M: DeserializeOwned + Default,
{
    info!("fetching {}", category);

    match content.find_many(&ObjectQuery::find(category)).await {
        QueryOutcome::Found(objects) => Ok(objects
            .into_iter()
            .filter_map(|object| {
                let slug = object
                    .get("slug")
                    .and_then(|slug| slug.as_str())
                    .unwrap_or_default()
                    .to_string();
                match JsonSerializerImpl::from_value::<CosmicObject<M>>(object) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!("skipping {} record {}: {}", category, slug, err);
                        None
                    }
                }
            })
            .collect()),
        QueryOutcome::NotFound => Ok(vec![]),
        QueryOutcome::Failed(source) => {
            error!("error fetching {}: {}", category, source);
            Err(ContentQuerierError::ListFailed { category, source })
        }
    }
}

/// One record by slug; absence is `Ok(None)` so callers can route to a
/// not-found page.
pub(crate) async fn get_object<M>(
    content: &dyn ContentStore,
    category: Category,
    slug: &str,
) -> Result<Option<CosmicObject<M>>, ContentQuerierError>
where
    M: DeserializeOwned + Default,
{
    info!("fetching {} with slug {}", category, slug);

    let fail = |source: ContentImplError| {
        error!("error fetching {} with slug {}: {}", category, slug, source);
        ContentQuerierError::GetFailed {
            category,
            slug: slug.to_string(),
            source,
        }
    };

    match content
        .find_one(&ObjectQuery::find_one(category, slug))
        .await
    {
        QueryOutcome::Found(object) => JsonSerializerImpl::from_value::<CosmicObject<M>>(object)
            .map(Some)
            .map_err(|err| fail(ContentImplError::Decode(err))),
        QueryOutcome::NotFound => Ok(None),
        QueryOutcome::Failed(err) => Err(fail(err)),
    }
}
