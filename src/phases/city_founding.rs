//! CityFoundingPhase: Founds one city per turn at the best scoring site.

use crate::location::*;
use crate::phase::*;
use crate::scoring::*;
use log::*;

pub struct CityFoundingPhase;

impl TurnPhase for CityFoundingPhase {
    fn name(&self) -> &str {
        "city_founding"
    }

    fn is_applicable(&self, state: &TurnState) -> bool {
        state.can_afford(state.config.city_cost)
    }

    fn run(&self, state: &mut TurnState) {
        let site = best_city_site(state.us, &state.them, state.map);

        // The no-site sentinel on an existing city is a no-op, not a founding.
        if site == Location::ORIGIN
            && (state.us.has_city_at(site) || state.them.iter().any(|p| p.has_city_at(site)))
        {
            debug!("No city site available");
            return;
        }

        if state.produce_city(site).is_some() {
            debug!("Founded city at ({}, {})", site.x(), site.y());
        }
    }
}
