//! GarrisonPhase: One defending army on every city that has none.

use crate::phase::*;
use log::*;

pub struct GarrisonPhase;

impl TurnPhase for GarrisonPhase {
    fn name(&self) -> &str {
        "garrison"
    }

    fn run(&self, state: &mut TurnState) {
        for city_index in 0..state.us.cities.len() {
            let city = state.us.cities[city_index].position;
            if state.us.has_army_at(city) {
                continue;
            }

            if state.left_over_food > 0 && state.produce_army(city).is_some() {
                state.left_over_food -= 1;
                debug!("Garrison army at ({}, {})", city.x(), city.y());
            }
        }
    }
}
