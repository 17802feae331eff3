/// Manhattan radius a city works around itself.
pub const WORKED_RADIUS: u32 = 2;
/// Manhattan radius at which an enemy army is an immediate threat.
pub const THREAT_RADIUS: u32 = 1;

pub const FOOD_WEIGHT: f64 = 0.75;
pub const PRODUCTION_WEIGHT: f64 = 1.0;
pub const TRADE_WEIGHT: f64 = 0.5;

pub const CENTRALITY_WEIGHT: f64 = 5.0;
pub const SPACING_WEIGHT: f64 = 8.0;
/// Distance to the nearest own city beyond which spacing stops mattering.
/// Also the spacing credit a player with no cities receives.
pub const SPACING_CAP: u32 = 5;
pub const ENEMY_PRESENCE_PENALTY: f64 = 100.0;

pub const ENEMY_WORKER_PRESSURE: f64 = 1.0;
pub const ENEMY_CITY_PRESSURE: f64 = 3.0;
pub const ENEMY_ARMY_PRESSURE: f64 = 6.0;

/// Bonus the defender's own tile multiplier gets when sizing a counter attack.
pub const HOME_TILE_ADVANTAGE: f64 = 1.5;

pub const ARMY_COST: i32 = 8;
pub const WORKER_COST: i32 = 8;
pub const CITY_COST: i32 = 24;
pub const ARMY_HITPOINTS: i32 = 100;

pub const RESEARCH_COST: i32 = 20;
pub const RESEARCH_STEP: f64 = 0.1;

pub const RESERVE_THRESHOLD: i32 = 15;
pub const RESERVE_SPLIT: i32 = 100;
pub const RESERVE_DIVISOR_SMALL: i32 = 5;
pub const RESERVE_DIVISOR_LARGE: i32 = 3;

pub const SATURATION_LIMIT: f64 = 0.9;
pub const PRESSURE_DIVISOR: f64 = 3.0;

/// Armies ignore targets farther away than this.
pub const ARMY_ENGAGE_RANGE: u32 = 5;
