use crate::domain::astronaut_model::Astronaut;
use crate::domain::astronaut_querier::AstronautQuerier;
use crate::domain::content_querier::ContentQuerierError;
use crate::domain::mission_model::Mission;
use crate::domain::mission_querier::MissionQuerier;
use futures_util::future::try_join;
use std::sync::Arc;

pub const FEATURED_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct HomeSummary {
    pub featured_missions: Vec<Mission>,
    pub featured_astronauts: Vec<Astronaut>,
    pub total_missions: usize,
    pub total_astronauts: usize,
}

/// Leading records in store order; no re-sorting.
pub fn featured<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().take(FEATURED_COUNT).cloned().collect()
}

#[derive(Clone)]
pub struct HomeQuerier {
    missions: Arc<MissionQuerier>,
    astronauts: Arc<AstronautQuerier>,
}

impl HomeQuerier {
    pub fn new(missions: Arc<MissionQuerier>, astronauts: Arc<AstronautQuerier>) -> Self {
        Self {
            missions,
            astronauts,
        }
    }
}

impl HomeQuerier {
    /// Both lists are fetched concurrently; either failure fails the summary.
    pub async fn get_summary(&self) -> Result<HomeSummary, ContentQuerierError> {
        let (missions, astronauts) = try_join(
            self.missions.list_missions(),
            self.astronauts.list_astronauts(),
        )
        .await?;

        Ok(HomeSummary {
            featured_missions: featured(&missions),
            featured_astronauts: featured(&astronauts),
            total_missions: missions.len(),
            total_astronauts: astronauts.len(),
        })
    }
}
