mod into_responses;

use crate::domain::astronaut_querier::AstronautQuerier;
use crate::domain::celestial_body_querier::CelestialBodyQuerier;
use crate::domain::content_querier::ContentQuerierError;
use crate::domain::home_querier::HomeQuerier;
use crate::domain::mission_querier::MissionQuerier;
use crate::pages::astronauts::astronaut_page;
use crate::pages::astronauts::astronauts_page;
use crate::pages::celestial_bodies::celestial_bodies_page;
use crate::pages::celestial_bodies::celestial_body_page;
use crate::pages::home::home_page;
use crate::pages::missions::mission_page;
use crate::pages::missions::missions_page;
use axum::extract::Path;
use axum::routing::get;
use axum::Extension;
use axum::Router;
use maud::Markup;
use std::sync::Arc;
use thiserror::Error;

/// A rendered HTML document, served with 200.
pub struct Page(pub Markup);

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,
    #[error(transparent)]
    Content(#[from] ContentQuerierError),
}

async fn home(
    Extension(home_querier): Extension<Arc<HomeQuerier>>,
) -> Result<Page, PageError> {
    let summary = home_querier.get_summary().await?;

    Ok(Page(home_page(&summary)))
}

async fn list_missions(
    Extension(mission_querier): Extension<Arc<MissionQuerier>>,
) -> Result<Page, PageError> {
    let missions = mission_querier.list_missions().await?;

    Ok(Page(missions_page(&missions)))
}

async fn get_mission(
    Extension(mission_querier): Extension<Arc<MissionQuerier>>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let mission = mission_querier
        .get_mission(&slug)
        .await?
        .ok_or(PageError::NotFound)?;

    Ok(Page(mission_page(&mission)))
}

async fn list_astronauts(
    Extension(astronaut_querier): Extension<Arc<AstronautQuerier>>,
) -> Result<Page, PageError> {
    let astronauts = astronaut_querier.list_astronauts().await?;

    Ok(Page(astronauts_page(&astronauts)))
}

async fn get_astronaut(
    Extension(astronaut_querier): Extension<Arc<AstronautQuerier>>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let astronaut = astronaut_querier
        .get_astronaut(&slug)
        .await?
        .ok_or(PageError::NotFound)?;

    Ok(Page(astronaut_page(&astronaut)))
}

async fn list_celestial_bodies(
    Extension(celestial_body_querier): Extension<Arc<CelestialBodyQuerier>>,
) -> Result<Page, PageError> {
    let bodies = celestial_body_querier.list_celestial_bodies().await?;

    Ok(Page(celestial_bodies_page(&bodies)))
}

async fn get_celestial_body(
    Extension(celestial_body_querier): Extension<Arc<CelestialBodyQuerier>>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let body = celestial_body_querier
        .get_celestial_body(&slug)
        .await?
        .ok_or(PageError::NotFound)?;

    Ok(Page(celestial_body_page(&body)))
}

async fn not_found() -> PageError {
    PageError::NotFound
}

pub fn explorer_route(
    mission_querier: Arc<MissionQuerier>,
    astronaut_querier: Arc<AstronautQuerier>,
    celestial_body_querier: Arc<CelestialBodyQuerier>,
    home_querier: Arc<HomeQuerier>,
) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/missions", get(list_missions))
        .route("/missions/:slug", get(get_mission))
        .route("/astronauts", get(list_astronauts))
        .route("/astronauts/:slug", get(get_astronaut))
        .route("/celestial-bodies", get(list_celestial_bodies))
        .route("/celestial-bodies/:slug", get(get_celestial_body))
        .fallback(not_found)
        .layer(Extension(mission_querier))
        .layer(Extension(astronaut_querier))
        .layer(Extension(celestial_body_querier))
        .layer(Extension(home_querier))
}
