use axum::Server;
use log::info;
use space_explorer::config::Config;
use space_explorer::config::ContentSource;
use space_explorer::domain::astronaut_querier::AstronautQuerier;
use space_explorer::domain::celestial_body_querier::CelestialBodyQuerier;
use space_explorer::domain::home_querier::HomeQuerier;
use space_explorer::domain::mission_querier::MissionQuerier;
use space_explorer::explorer_route;
use space_explorer::providers::content::ContentStore;
use space_explorer::providers::cosmic::CosmicContentImpl;
use space_explorer::providers::mem_content::MemoryContentImpl;
use std::sync::Arc;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("could not listen for shutdown signal: {}", err);
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init_timed();

    let config = Config::from_env().expect("could not load configuration");

    let content_impl: Arc<dyn ContentStore> = match &config.content {
        ContentSource::Cosmic(cosmic) => {
            info!(
                "serving content from bucket {} at {}",
                cosmic.bucket_slug, cosmic.api_url
            );
            Arc::new(CosmicContentImpl::new(cosmic).expect("could not build content api client"))
        }
        ContentSource::Fixtures(path) => {
            info!("serving content from fixtures at {}", path.display());
            Arc::new(
                MemoryContentImpl::from_file(path)
                    .await
                    .expect("could not load content fixtures"),
            )
        }
    };

    let mission_querier = Arc::new(MissionQuerier::new(content_impl.clone()));
    let astronaut_querier = Arc::new(AstronautQuerier::new(content_impl.clone()));
    let celestial_body_querier = Arc::new(CelestialBodyQuerier::new(content_impl.clone()));
    let home_querier = Arc::new(HomeQuerier::new(
        mission_querier.clone(),
        astronaut_querier.clone(),
    ));

    let app = explorer_route(
        mission_querier,
        astronaut_querier,
        celestial_body_querier,
        home_querier,
    );

    info!("listening on {}", config.server_address);

    Server::bind(&config.server_address)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
