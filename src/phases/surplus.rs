//! SurplusArmyPhase: Spends what is left on armies at the most pressured city.

use crate::phase::*;
use crate::threat::*;
use crate::utility::first_max_by;
use log::*;

pub struct SurplusArmyPhase;

impl TurnPhase for SurplusArmyPhase {
    fn name(&self) -> &str {
        "surplus_armies"
    }

    fn run(&self, state: &mut TurnState) {
        while state.can_afford(state.config.army_cost) && state.left_over_food > 0 {
            let target = first_max_by(state.us.cities.iter(), |city| {
                city_pressure(state.us, &state.them, city, state.map)
            })
            .map(|(city, _)| city.position);

            let Some(city) = target else {
                break;
            };
            if state.produce_army(city).is_none() {
                break;
            }
            state.left_over_food -= 1;

            trace!("Surplus army at ({}, {})", city.x(), city.y());
        }
    }
}
