//! BankingPhase: Unspent production decays by half unless a city was founded.

use crate::phase::*;
use log::*;

pub struct BankingPhase;

impl TurnPhase for BankingPhase {
    fn name(&self) -> &str {
        "banking"
    }

    fn is_applicable(&self, state: &TurnState) -> bool {
        state.founded_city.is_none()
    }

    fn run(&self, state: &mut TurnState) {
        let before = state.production();
        state.us.resources.production = before / 2;
        trace!("Banked production {} -> {}", before, state.production());
    }
}
