//! WorkerProductionPhase: Fills the least loaded city with workers.
//!
//! Load is worker saturation plus a share of enemy pressure, so contested
//! cities get armies rather than workers, and workers are spread across
//! cities to limit the loss when one falls.

use crate::phase::*;
use crate::threat::*;
use itertools::*;
use log::*;

pub struct WorkerProductionPhase;

impl WorkerProductionPhase {
    fn city_loads(state: &TurnState) -> Vec<f64> {
        state
            .us
            .cities
            .iter()
            .map(|city| {
                saturation(state.us, city, state.map)
                    + city_pressure(state.us, &state.them, city, state.map)
                        / state.config.pressure_divisor
            })
            .collect()
    }
}

impl TurnPhase for WorkerProductionPhase {
    fn name(&self) -> &str {
        "worker_production"
    }

    fn run(&self, state: &mut TurnState) {
        while state.can_afford(state.config.worker_cost) {
            let loads = Self::city_loads(state);
            let Some(index) = loads.iter().position_min_by(|a, b| a.total_cmp(b)) else {
                break;
            };

            if loads[index] >= state.config.saturation_limit {
                break;
            }

            let city = state.us.cities[index].position;
            if state.produce_worker(city).is_none() {
                break;
            }
            trace!(
                "Worker at ({}, {}), load was {:.3}",
                city.x(),
                city.y(),
                loads[index]
            );
        }
    }
}
