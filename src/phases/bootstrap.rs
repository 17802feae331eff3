//! BootstrapWorkerPhase: First worker for a lone starting city.

use crate::phase::*;
use log::*;

/// A single city with no workers gets a worker before anything else, so the
/// opening turns are not spent on armies.
pub struct BootstrapWorkerPhase;

impl TurnPhase for BootstrapWorkerPhase {
    fn name(&self) -> &str {
        "bootstrap_worker"
    }

    fn is_applicable(&self, state: &TurnState) -> bool {
        state.us.cities.len() == 1 && state.us.workers.is_empty()
    }

    fn run(&self, state: &mut TurnState) {
        let city = state.us.cities[0].position;
        if state.produce_worker(city).is_some() {
            debug!("Bootstrap worker at ({}, {})", city.x(), city.y());
        }
    }
}
