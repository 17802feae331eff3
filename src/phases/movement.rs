//! Movement phases: reposition workers, then advance armies.

use crate::armies::*;
use crate::phase::*;
use crate::workers::*;
use log::*;

pub struct WorkerMovementPhase;

impl TurnPhase for WorkerMovementPhase {
    fn name(&self) -> &str {
        "worker_movement"
    }

    fn run(&self, state: &mut TurnState) {
        let moves = rebalance(state.map, state.us);
        debug!("Worker moves: {}", moves.len());
        state.commands.extend(moves);
    }
}

pub struct ArmyMovementPhase;

impl TurnPhase for ArmyMovementPhase {
    fn name(&self) -> &str {
        "army_movement"
    }

    fn run(&self, state: &mut TurnState) {
        let moves = advance_armies(
            state.us,
            &state.them,
            state.map,
            state.config.army_engage_range,
        );
        debug!("Army moves: {}", moves.len());
        state.commands.extend(moves);
    }
}
