use crate::location::*;
use serde::{Deserialize, Serialize};

/// What a produce command creates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ProductionKind {
    Army,
    Worker,
    City,
}

impl ProductionKind {
    pub fn api_index(self) -> i32 {
        match self {
            ProductionKind::Army => 0,
            ProductionKind::Worker => 1,
            ProductionKind::City => 2,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TechnologyKind {
    Offense,
    Defense,
}

impl TechnologyKind {
    pub fn api_index(self) -> i32 {
        match self {
            TechnologyKind::Offense => 0,
            TechnologyKind::Defense => 1,
        }
    }
}

/// Units that can be moved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitKind {
    Army,
    Worker,
}

// ---------------------------------------------------------------------------
// Commands (pure data, no engine API)
// ---------------------------------------------------------------------------

/// A command the planner wants the game engine to perform.
///
/// `Move` always targets a tile at distance at most 1 from `from`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Produce {
        kind: ProductionKind,
        location: Location,
    },
    Research {
        kind: TechnologyKind,
    },
    Move {
        kind: UnitKind,
        from: Location,
        to: Location,
    },
}

/// Engine-side sink for commands.
///
/// Implement this in the turn-loop integration where the engine's command
/// API is available.
pub trait CommandExecutor {
    fn produce(&mut self, kind: ProductionKind, location: Location);

    fn research(&mut self, kind: TechnologyKind);

    fn move_unit(&mut self, kind: UnitKind, from: Location, to: Location);
}

/// An executor that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<Command>,
}

impl CommandExecutor for CommandRecorder {
    fn produce(&mut self, kind: ProductionKind, location: Location) {
        self.commands.push(Command::Produce { kind, location });
    }

    fn research(&mut self, kind: TechnologyKind) {
        self.commands.push(Command::Research { kind });
    }

    fn move_unit(&mut self, kind: UnitKind, from: Location, to: Location) {
        self.commands.push(Command::Move { kind, from, to });
    }
}

// ---------------------------------------------------------------------------
// Turn plan
// ---------------------------------------------------------------------------

/// Everything decided for one turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnPlan {
    /// Commands in issue order.
    pub commands: Vec<Command>,
    /// Production set aside for emergencies and removed from the pool.
    pub reserved_production: i32,
    /// City founded this turn, if any.
    pub founded_city: Option<Location>,
    /// Food headroom left for new armies.
    pub left_over_food: i32,
}

impl TurnPlan {
    /// Replay the commands against an executor, in order.
    pub fn execute<E: CommandExecutor + ?Sized>(&self, executor: &mut E) {
        for command in &self.commands {
            match *command {
                Command::Produce { kind, location } => executor.produce(kind, location),
                Command::Research { kind } => executor.research(kind),
                Command::Move { kind, from, to } => executor.move_unit(kind, from, to),
            }
        }
    }

    pub fn count_produced(&self, kind: ProductionKind) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Produce { kind: k, .. } if *k == kind))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_replays_in_order() {
        let a = Location::from_coords(1, 1);
        let b = Location::from_coords(1, 2);
        let plan = TurnPlan {
            commands: vec![
                Command::Research {
                    kind: TechnologyKind::Defense,
                },
                Command::Produce {
                    kind: ProductionKind::Army,
                    location: a,
                },
                Command::Move {
                    kind: UnitKind::Army,
                    from: a,
                    to: b,
                },
            ],
            ..TurnPlan::default()
        };

        let mut recorder = CommandRecorder::default();
        plan.execute(&mut recorder);
        assert_eq!(recorder.commands, plan.commands);
        assert_eq!(plan.count_produced(ProductionKind::Army), 1);
        assert_eq!(plan.count_produced(ProductionKind::City), 0);
    }

    #[test]
    fn api_indices() {
        assert_eq!(ProductionKind::City.api_index(), 2);
        assert_eq!(TechnologyKind::Defense.api_index(), 1);
    }
}
