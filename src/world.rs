//! Players and the units they own.
//!
//! Each unit vector is an append-only arena for the duration of a turn: the
//! planner appends a record when it issues a produce command, so indices
//! handed out earlier in the turn stay valid.

use crate::location::*;
use serde::{Deserialize, Serialize};

/// A player's resource pool.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAmounts {
    pub food: i32,
    pub production: i32,
    pub trade: i32,
}

impl ResourceAmounts {
    pub fn new(food: i32, production: i32, trade: i32) -> Self {
        ResourceAmounts {
            food,
            production,
            trade,
        }
    }

    /// Debit `amount` production if the pool covers it.
    pub fn try_spend_production(&mut self, amount: i32) -> bool {
        if self.production >= amount {
            self.production -= amount;
            true
        } else {
            false
        }
    }

    /// Debit `amount` trade if the pool covers it.
    pub fn try_spend_trade(&mut self, amount: i32) -> bool {
        if self.trade >= amount {
            self.trade -= amount;
            true
        } else {
            false
        }
    }
}

/// Something owned by a player with a place on the board.
pub trait BoardObject {
    fn position(&self) -> Location;

    fn distance_to(&self, other: Location) -> u32 {
        self.position().distance_to(other)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub position: Location,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub position: Location,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Army {
    pub position: Location,
    pub hitpoints: i32,
}

impl City {
    pub fn new(position: Location) -> Self {
        City { position }
    }
}

impl Worker {
    pub fn new(position: Location) -> Self {
        Worker { position }
    }
}

impl Army {
    pub fn new(position: Location, hitpoints: i32) -> Self {
        Army {
            position,
            hitpoints,
        }
    }
}

impl BoardObject for City {
    fn position(&self) -> Location {
        self.position
    }
}

impl BoardObject for Worker {
    fn position(&self) -> Location {
        self.position
    }
}

impl BoardObject for Army {
    fn position(&self) -> Location {
        self.position
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub offensive_strength: f64,
    pub defensive_strength: f64,
    pub cities: Vec<City>,
    pub workers: Vec<Worker>,
    pub armies: Vec<Army>,
    pub resources: ResourceAmounts,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            offensive_strength: 1.0,
            defensive_strength: 1.0,
            cities: Vec::new(),
            workers: Vec::new(),
            armies: Vec::new(),
            resources: ResourceAmounts::default(),
        }
    }
}

impl Player {
    pub fn add_city(&mut self, position: Location) -> usize {
        self.cities.push(City::new(position));
        self.cities.len() - 1
    }

    pub fn add_worker(&mut self, position: Location) -> usize {
        self.workers.push(Worker::new(position));
        self.workers.len() - 1
    }

    pub fn add_army(&mut self, position: Location, hitpoints: i32) -> usize {
        self.armies.push(Army::new(position, hitpoints));
        self.armies.len() - 1
    }

    pub fn workers_at(&self, loc: Location) -> usize {
        self.workers.iter().filter(|w| w.position == loc).count()
    }

    pub fn has_worker_at(&self, loc: Location) -> bool {
        self.workers.iter().any(|w| w.position == loc)
    }

    pub fn armies_at(&self, loc: Location) -> impl Iterator<Item = &Army> + '_ {
        self.armies.iter().filter(move |a| a.position == loc)
    }

    pub fn has_army_at(&self, loc: Location) -> bool {
        self.armies.iter().any(|a| a.position == loc)
    }

    pub fn cities_at(&self, loc: Location) -> usize {
        self.cities.iter().filter(|c| c.position == loc).count()
    }

    pub fn has_city_at(&self, loc: Location) -> bool {
        self.cities.iter().any(|c| c.position == loc)
    }

    /// Every unit position the player holds: armies, then cities, then
    /// workers.
    pub fn unit_positions(&self) -> impl Iterator<Item = Location> + '_ {
        self.armies
            .iter()
            .map(|a| a.position)
            .chain(self.cities.iter().map(|c| c.position))
            .chain(self.workers.iter().map(|w| w.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_is_guarded() {
        let mut pool = ResourceAmounts::new(0, 10, 5);
        assert!(pool.try_spend_production(8));
        assert!(!pool.try_spend_production(8));
        assert_eq!(pool.production, 2);
        assert!(!pool.try_spend_trade(20));
        assert_eq!(pool.trade, 5);
    }

    #[test]
    fn arena_indices_are_stable() {
        let mut player = Player::default();
        let a = player.add_worker(Location::from_coords(1, 1));
        let b = player.add_worker(Location::from_coords(1, 1));
        assert_eq!((a, b), (0, 1));
        assert_eq!(player.workers_at(Location::from_coords(1, 1)), 2);
        assert!(!player.has_worker_at(Location::ORIGIN));
    }
}
