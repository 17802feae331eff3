//! EmergencyDefensePhase: Counter-attacks enemy armies next to our cities.
//!
//! Each threatening stack is sized by its strongest army and the stack size,
//! scaled by research strengths and by the combat multipliers of our city
//! tile (with a home advantage) and the enemy's tile. The resulting armies
//! are produced on the city and sent straight onto the threat tile.

use crate::constants::*;
use crate::phase::*;
use crate::terrain::*;
use crate::threat::*;
use crate::world::*;
use log::*;

/// Armies needed to destroy the stack described by `threat`, defending from
/// `city`. A fogged tile counts with a neutral multiplier.
pub fn armies_needed(
    us: &Player,
    threat: &Threat,
    city: &City,
    map: &GameMap,
    hitpoints_per_army: i32,
) -> u32 {
    let own_multiplier = map.combat_multiplier(city.position).unwrap_or(1.0);
    let enemy_multiplier = map.combat_multiplier(threat.position).unwrap_or(1.0);

    let strength = (us.offensive_strength / threat.player.defensive_strength)
        * ((own_multiplier * HOME_TILE_ADVANTAGE) / enemy_multiplier);
    let needed = threat.max_hitpoints as f64 / (strength / threat.num_armies as f64);

    (needed / hitpoints_per_army as f64).ceil() as u32
}

pub struct EmergencyDefensePhase;

impl TurnPhase for EmergencyDefensePhase {
    fn name(&self) -> &str {
        "emergency_defense"
    }

    fn run(&self, state: &mut TurnState) {
        for city_index in 0..state.us.cities.len() {
            let city = state.us.cities[city_index];
            let threats = immediate_threats(state.us, &state.them, &city, state.map);

            // Summary only; every threat is sized below.
            if log_enabled!(Level::Debug) {
                if let Some(strongest) = strongest_threat(&threats) {
                    debug!(
                        "City ({}, {}) under {} threats, strongest {} hp at ({}, {})",
                        city.position.x(),
                        city.position.y(),
                        threats.len(),
                        strongest.max_hitpoints,
                        strongest.position.x(),
                        strongest.position.y()
                    );
                }
            }

            for threat in threats {
                let count = armies_needed(
                    state.us,
                    &threat,
                    &city,
                    state.map,
                    state.config.army_hitpoints,
                );

                debug!(
                    "Threat at ({}, {}): {} armies, max {} hp; sending {}",
                    threat.position.x(),
                    threat.position.y(),
                    threat.num_armies,
                    threat.max_hitpoints,
                    count
                );

                for _ in 0..count {
                    let Some(army) = state.produce_army(city.position) else {
                        break;
                    };
                    state.move_army(army, threat.position);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn grassland_stack_needs_one_army() {
        let map = GameMap::filled(8, TileType::Grassland);
        let us = Player::default();
        let enemy = Player::default();
        let city = City::new(Location::from_coords(3, 3));
        let threat = Threat {
            position: Location::from_coords(3, 4),
            num_armies: 1,
            max_hitpoints: 100,
            player: &enemy,
        };

        assert_eq!(armies_needed(&us, &threat, &city, &map, 100), 1);
    }

    #[test]
    fn mountain_stack_needs_more() {
        let mut map = GameMap::filled(8, TileType::Ocean);
        map.set(Location::from_coords(3, 4), TileType::Mountains);
        let us = Player::default();
        let enemy = Player::default();
        let city = City::new(Location::from_coords(3, 3));
        let threat = Threat {
            position: Location::from_coords(3, 4),
            num_armies: 3,
            max_hitpoints: 100,
            player: &enemy,
        };

        // 100 / ((0.5 * 1.5 / 2.0) / 3) = 800 hitpoints of attackers.
        assert_eq!(armies_needed(&us, &threat, &city, &map, 100), 8);
    }
}
