//! Core types for the turn phase stack.
//!
//! `TurnState` is the evolving state passed through the phases of one turn.
//! `TurnPhase` is the trait each step of the turn implements.
//! `TurnConfig` holds the budget policy the phases read.

use crate::constants::*;
use crate::location::*;
use crate::plan::*;
use crate::terrain::*;
use crate::world::*;
use serde::{Deserialize, Serialize};

/// Budget policy for a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    pub army_cost: i32,
    pub worker_cost: i32,
    pub city_cost: i32,
    /// Hitpoints of a freshly produced army.
    pub army_hitpoints: i32,
    pub research_cost: i32,
    pub research_step: f64,
    /// Production at or above which part of the pool is held back.
    pub reserve_threshold: i32,
    /// Pools below this keep `1/reserve_divisor_small`, others
    /// `1/reserve_divisor_large`.
    pub reserve_split: i32,
    pub reserve_divisor_small: i32,
    pub reserve_divisor_large: i32,
    /// Worker production stops once every city's load reaches this.
    pub saturation_limit: f64,
    pub pressure_divisor: f64,
    pub army_engage_range: u32,
}

impl Default for TurnConfig {
    fn default() -> Self {
        TurnConfig {
            army_cost: ARMY_COST,
            worker_cost: WORKER_COST,
            city_cost: CITY_COST,
            army_hitpoints: ARMY_HITPOINTS,
            research_cost: RESEARCH_COST,
            research_step: RESEARCH_STEP,
            reserve_threshold: RESERVE_THRESHOLD,
            reserve_split: RESERVE_SPLIT,
            reserve_divisor_small: RESERVE_DIVISOR_SMALL,
            reserve_divisor_large: RESERVE_DIVISOR_LARGE,
            saturation_limit: SATURATION_LIMIT,
            pressure_divisor: PRESSURE_DIVISOR,
            army_engage_range: ARMY_ENGAGE_RANGE,
        }
    }
}

/// The state passed through the phases of one turn.
///
/// Opponents and the map are shared and read-only. The acting player is
/// borrowed mutably: every command that creates or moves a unit is mirrored
/// onto its records before the command is recorded, so later phases see it.
pub struct TurnState<'a> {
    pub map: &'a GameMap,
    pub us: &'a mut Player,
    pub them: Vec<&'a Player>,
    pub config: &'a TurnConfig,
    pub commands: Vec<Command>,
    /// Food headroom for new armies, before the engine's 1/4 upkeep.
    pub left_over_food: i32,
    pub reserved_production: i32,
    pub founded_city: Option<Location>,
}

impl<'a> TurnState<'a> {
    pub fn new(
        map: &'a GameMap,
        us: &'a mut Player,
        them: Vec<&'a Player>,
        config: &'a TurnConfig,
    ) -> Self {
        let left_over_food =
            i32::try_from(i64::from(us.resources.food) * 4 / 3).unwrap_or(i32::MAX);

        TurnState {
            map,
            us,
            them,
            config,
            commands: Vec::new(),
            left_over_food,
            reserved_production: 0,
            founded_city: None,
        }
    }

    #[inline]
    pub fn production(&self) -> i32 {
        self.us.resources.production
    }

    pub fn can_afford(&self, cost: i32) -> bool {
        self.production() >= cost
    }

    /// Pay for and produce an army at `location`. Returns the army's index,
    /// or `None` if production does not cover it.
    pub fn produce_army(&mut self, location: Location) -> Option<usize> {
        if !self.us.resources.try_spend_production(self.config.army_cost) {
            return None;
        }
        let index = self.us.add_army(location, self.config.army_hitpoints);
        self.push_produce(ProductionKind::Army, location);
        Some(index)
    }

    pub fn produce_worker(&mut self, location: Location) -> Option<usize> {
        if !self.us.resources.try_spend_production(self.config.worker_cost) {
            return None;
        }
        let index = self.us.add_worker(location);
        self.push_produce(ProductionKind::Worker, location);
        Some(index)
    }

    pub fn produce_city(&mut self, location: Location) -> Option<usize> {
        if !self.us.resources.try_spend_production(self.config.city_cost) {
            return None;
        }
        let index = self.us.add_city(location);
        self.push_produce(ProductionKind::City, location);
        self.founded_city = Some(location);
        Some(index)
    }

    /// Move one of our armies a single step.
    pub fn move_army(&mut self, index: usize, to: Location) {
        let from = self.us.armies[index].position;
        debug_assert!(from.distance_to(to) <= 1);
        self.us.armies[index].position = to;
        self.commands.push(Command::Move {
            kind: UnitKind::Army,
            from,
            to,
        });
    }

    pub fn research(&mut self, kind: TechnologyKind) -> bool {
        if !self.us.resources.try_spend_trade(self.config.research_cost) {
            return false;
        }
        match kind {
            TechnologyKind::Offense => self.us.offensive_strength += self.config.research_step,
            TechnologyKind::Defense => self.us.defensive_strength += self.config.research_step,
        }
        self.commands.push(Command::Research { kind });
        true
    }

    fn push_produce(&mut self, kind: ProductionKind, location: Location) {
        self.commands.push(Command::Produce { kind, location });
    }

    pub fn into_plan(self) -> TurnPlan {
        TurnPlan {
            commands: self.commands,
            reserved_production: self.reserved_production,
            founded_city: self.founded_city,
            left_over_food: self.left_over_food,
        }
    }
}

/// One step of the turn.
///
/// Phases are stateless; everything they change lives in `TurnState`. A
/// phase that cannot afford its action simply does nothing.
pub trait TurnPhase {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Quick check before running. Return false to skip the phase.
    fn is_applicable(&self, _state: &TurnState) -> bool {
        true
    }

    fn run(&self, state: &mut TurnState);
}
