pub mod config;
pub mod domain;
pub mod http;
pub mod pages;
pub mod providers;

pub use http::explorer_route;
