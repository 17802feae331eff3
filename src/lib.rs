pub mod armies;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod location;
pub mod phase;
pub mod phases;
pub mod plan;
pub mod planner;
pub mod scoring;
pub mod terrain;
pub mod threat;
pub mod utility;
pub mod workers;
pub mod world;

pub use error::TurnError;
pub use location::Location;
pub use planner::*;
pub use terrain::{GameMap, TileType};
pub use world::*;
