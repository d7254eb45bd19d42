#![allow(dead_code)]

use axum::Router;
use axum::Server;
use hyper::body::to_bytes;
use hyper::Client;
use space_explorer::domain::astronaut_querier::AstronautQuerier;
use space_explorer::domain::celestial_body_querier::CelestialBodyQuerier;
use space_explorer::domain::home_querier::HomeQuerier;
use space_explorer::domain::mission_querier::MissionQuerier;
use space_explorer::explorer_route;
use space_explorer::providers::content::ContentStore;
use space_explorer::providers::mem_content::MemoryContentImpl;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

pub(crate) fn fixtures_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/space.json"))
}

pub(crate) async fn fixture_content() -> Arc<dyn ContentStore> {
    Arc::new(
        MemoryContentImpl::from_file(fixtures_path())
            .await
            .expect("fixtures should load"),
    )
}

/// Binds the router to an ephemeral port and serves it in the background.
pub(crate) async fn spawn(app: Router) -> SocketAddr {
    let server = Server::bind(&"127.0.0.1:0".parse().expect("valid address"))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

pub(crate) async fn spawn_site(content: Arc<dyn ContentStore>) -> SocketAddr {
    let mission_querier = Arc::new(MissionQuerier::new(content.clone()));
    let astronaut_querier = Arc::new(AstronautQuerier::new(content.clone()));
    let celestial_body_querier = Arc::new(CelestialBodyQuerier::new(content));
    let home_querier = Arc::new(HomeQuerier::new(
        mission_querier.clone(),
        astronaut_querier.clone(),
    ));

    spawn(explorer_route(
        mission_querier,
        astronaut_querier,
        celestial_body_querier,
        home_querier,
    ))
    .await
}

pub(crate) fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}

pub(crate) async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let client = Client::new();
    let res = client
        .get(url(addr, path).parse().expect("valid uri"))
        .await
        .expect("error in response");
    let status = res.status().as_u16();
    let body = to_bytes(res.into_body()).await.expect("error reading body");

    (status, String::from_utf8_lossy(&body).into_owned())
}
