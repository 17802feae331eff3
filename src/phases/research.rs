//! ResearchPhase: Spends trade on whichever strength lags.

use crate::phase::*;
use crate::plan::TechnologyKind;
use log::*;

/// Researches while trade is strictly above one research cost. Offense wins
/// ties.
pub struct ResearchPhase;

impl TurnPhase for ResearchPhase {
    fn name(&self) -> &str {
        "research"
    }

    fn run(&self, state: &mut TurnState) {
        while state.us.resources.trade > state.config.research_cost {
            let kind = if state.us.defensive_strength >= state.us.offensive_strength {
                TechnologyKind::Offense
            } else {
                TechnologyKind::Defense
            };

            if !state.research(kind) {
                break;
            }
        }

        debug!(
            "Research: offense {:.1}, defense {:.1}, trade left {}",
            state.us.offensive_strength, state.us.defensive_strength, state.us.resources.trade
        );
    }
}
