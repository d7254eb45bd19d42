pub mod astronaut_model;
pub mod astronaut_querier;
pub mod celestial_body_model;
pub mod celestial_body_querier;
pub mod content_model;
pub mod content_querier;
pub mod home_querier;
pub mod mission_model;
pub mod mission_querier;
