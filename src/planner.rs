//! Public API for the turn planner.
//!
//! The `TurnPlannerBuilder` provides a fluent, append-only API for configuring
//! the phase stack. Phases run in the order they were added, once each, over
//! a single snapshot of the game.

use crate::error::TurnError;
use crate::phase::*;
use crate::phases::default_phases;
use crate::terrain::GameMap;
use crate::world::*;
use log::*;

// Re-export key types for convenience
pub use crate::phase::TurnConfig;
pub use crate::plan::{
    Command, CommandExecutor, CommandRecorder, ProductionKind, TechnologyKind, TurnPlan, UnitKind,
};

/// Append-only builder for configuring the turn planner.
pub struct TurnPlannerBuilder {
    phases: Vec<Box<dyn TurnPhase>>,
    config: TurnConfig,
}

impl TurnPlannerBuilder {
    /// Start with an empty phase stack and the default config.
    pub fn new() -> Self {
        TurnPlannerBuilder {
            phases: Vec::new(),
            config: TurnConfig::default(),
        }
    }

    /// Append a phase to the end of the stack.
    pub fn add_phase(mut self, phase: Box<dyn TurnPhase>) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn config(mut self, config: TurnConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TurnPlanner {
        TurnPlanner {
            phases: self.phases,
            config: self.config,
        }
    }
}

impl Default for TurnPlannerBuilder {
    /// Returns a builder pre-loaded with the default 11-phase stack.
    fn default() -> Self {
        let mut builder = TurnPlannerBuilder::new();
        for phase in default_phases() {
            builder.phases.push(phase);
        }
        builder
    }
}

pub struct TurnPlanner {
    phases: Vec<Box<dyn TurnPhase>>,
    config: TurnConfig,
}

impl Default for TurnPlanner {
    fn default() -> Self {
        TurnPlannerBuilder::default().build()
    }
}

impl TurnPlanner {
    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    pub fn phase_names(&self) -> Vec<&str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Decide one turn for `players[index]`.
    ///
    /// The acting player's resources, strengths and unit lists are updated
    /// to reflect the returned commands. Opponents are only read.
    pub fn plan_turn(
        &self,
        map: &GameMap,
        players: &mut [Player],
        index: usize,
    ) -> Result<TurnPlan, TurnError> {
        validate_snapshot(map, players, index)?;

        let (before, rest) = players.split_at_mut(index);
        let (us, after) = rest
            .split_first_mut()
            .ok_or(TurnError::PlayerIndex { index, count: 0 })?;
        let them: Vec<&Player> = before.iter().chain(after.iter()).collect();

        let mut state = TurnState::new(map, us, them, &self.config);

        for phase in &self.phases {
            if !phase.is_applicable(&state) {
                trace!("Phase {} skipped", phase.name());
                continue;
            }

            let issued = state.commands.len();
            phase.run(&mut state);
            debug!(
                "Phase {}: {} commands, production {}",
                phase.name(),
                state.commands.len() - issued,
                state.production()
            );
        }

        Ok(state.into_plan())
    }
}

/// Check the contract the turn logic relies on: a valid acting player and
/// every unit on the map.
pub fn validate_snapshot(map: &GameMap, players: &[Player], index: usize) -> Result<(), TurnError> {
    if index >= players.len() {
        return Err(TurnError::PlayerIndex {
            index,
            count: players.len(),
        });
    }

    for (what, loc) in players.iter().flat_map(|p| {
        p.armies
            .iter()
            .map(|a| ("army", a.position))
            .chain(p.cities.iter().map(|c| ("city", c.position)))
            .chain(p.workers.iter().map(|w| ("worker", w.position)))
    }) {
        if !map.in_bounds(loc) {
            return Err(TurnError::OutOfBounds {
                what,
                x: loc.x(),
                y: loc.y(),
                size: map.size(),
            });
        }
    }

    Ok(())
}

/// Plan a turn with the default phase stack and config.
pub fn plan_turn(map: &GameMap, players: &mut [Player], index: usize) -> Result<TurnPlan, TurnError> {
    TurnPlanner::default().plan_turn(map, players, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::terrain::TileType;

    #[test]
    fn default_stack_order() {
        let planner = TurnPlanner::default();
        assert_eq!(
            planner.phase_names(),
            vec![
                "research",
                "bootstrap_worker",
                "emergency_defense",
                "reserve",
                "garrison",
                "worker_production",
                "city_founding",
                "banking",
                "surplus_armies",
                "worker_movement",
                "army_movement",
            ]
        );
    }

    #[test]
    fn rejects_bad_index() {
        let map = GameMap::filled(4, TileType::Grassland);
        let mut players = vec![Player::default()];
        assert_eq!(
            plan_turn(&map, &mut players, 1),
            Err(TurnError::PlayerIndex { index: 1, count: 1 })
        );
    }

    #[test]
    fn rejects_units_off_the_map() {
        let map = GameMap::filled(4, TileType::Grassland);
        let mut enemy = Player::default();
        enemy.add_worker(Location::from_coords(4, 1));
        let mut players = vec![Player::default(), enemy];
        assert!(matches!(
            plan_turn(&map, &mut players, 0),
            Err(TurnError::OutOfBounds { what: "worker", .. })
        ));
    }

    #[test]
    fn empty_stack_issues_nothing() {
        let map = GameMap::filled(4, TileType::Grassland);
        let mut us = Player::default();
        us.resources.production = 100;
        let mut players = vec![us];

        let plan = TurnPlannerBuilder::new()
            .build()
            .plan_turn(&map, &mut players, 0)
            .unwrap();
        assert!(plan.commands.is_empty());
        assert_eq!(players[0].resources.production, 100);
    }
}
