//! ReservePhase: Holds back part of a large production pool.

use crate::phase::*;
use log::*;

/// Removes a share of production from this turn's budget, kept for
/// emergencies on later turns.
pub struct ReservePhase;

impl TurnPhase for ReservePhase {
    fn name(&self) -> &str {
        "reserve"
    }

    fn is_applicable(&self, state: &TurnState) -> bool {
        state.production() >= state.config.reserve_threshold
    }

    fn run(&self, state: &mut TurnState) {
        let production = state.production();
        let reserved = if production < state.config.reserve_split {
            production / state.config.reserve_divisor_small
        } else {
            production / state.config.reserve_divisor_large
        };

        state.us.resources.production -= reserved;
        state.reserved_production += reserved;

        debug!("Reserved {} of {} production", reserved, production);
    }
}
