//! Spreads existing workers over their city's worked tiles.
//!
//! Each worker is considered once per pass, under the first city (in city
//! list order) whose worked radius contains it. Moves are applied to the
//! worker immediately so later workers see the new occupancy.

use crate::constants::*;
use crate::geometry::*;
use crate::location::*;
use crate::plan::*;
use crate::scoring::tile_score;
use crate::terrain::*;
use crate::utility::first_max_by;
use crate::world::*;
use fnv::FnvHashSet;
use log::*;

/// Which relocation rule applies to a worker, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RebalanceRule {
    /// Another of our workers shares the tile.
    Collision,
    /// The worker sits next to the city, blocking the ring new workers
    /// step onto.
    CityAdjacent,
    /// The worker stands on the city tile.
    OnCity,
}

pub fn classify_worker(us: &Player, index: usize, city: Location) -> Option<RebalanceRule> {
    let pos = us.workers[index].position;

    let shares_tile = us
        .workers
        .iter()
        .enumerate()
        .any(|(other, w)| other != index && w.position == pos);

    if shares_tile {
        Some(RebalanceRule::Collision)
    } else if pos.distance_to(city) == 1 {
        Some(RebalanceRule::CityAdjacent)
    } else if pos == city {
        Some(RebalanceRule::OnCity)
    } else {
        None
    }
}

fn choose_move(
    map: &GameMap,
    us: &Player,
    from: Location,
    city: Location,
    worked: &FnvHashSet<Location>,
    rule: RebalanceRule,
) -> Option<Location> {
    let candidates = legal_moves(from, map.size())
        .into_iter()
        .filter(|to| match rule {
            RebalanceRule::Collision => worked.contains(to),
            RebalanceRule::CityAdjacent => worked.contains(to) && to.distance_to(city) > 1,
            RebalanceRule::OnCity => true,
        })
        .filter(|&to| !us.has_worker_at(to));

    first_max_by(candidates, |&to| tile_score(to, map)).map(|(to, _)| to)
}

/// Move workers off shared, city-adjacent and city tiles. Returns the move
/// commands in the order they were decided.
pub fn rebalance(map: &GameMap, us: &mut Player) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut handled: FnvHashSet<usize> = FnvHashSet::default();

    for city_index in 0..us.cities.len() {
        let city = us.cities[city_index].position;
        let worked: FnvHashSet<Location> = worked_tiles(city, map.size()).into_iter().collect();

        let in_range: Vec<usize> = us
            .workers
            .iter()
            .enumerate()
            .filter(|(i, w)| !handled.contains(i) && w.distance_to(city) <= WORKED_RADIUS)
            .map(|(i, _)| i)
            .collect();

        for index in in_range {
            handled.insert(index);

            let Some(rule) = classify_worker(us, index, city) else {
                continue;
            };

            let from = us.workers[index].position;
            match choose_move(map, us, from, city, &worked, rule) {
                Some(to) => {
                    trace!(
                        "Worker {} {:?}: ({}, {}) -> ({}, {})",
                        index,
                        rule,
                        from.x(),
                        from.y(),
                        to.x(),
                        to.y()
                    );
                    us.workers[index].position = to;
                    commands.push(Command::Move {
                        kind: UnitKind::Worker,
                        from,
                        to,
                    });
                }
                None => trace!("Worker {} {:?}: no free tile", index, rule),
            }
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    fn moves(commands: &[Command]) -> Vec<(Location, Location)> {
        commands
            .iter()
            .filter_map(|c| match *c {
                Command::Move { from, to, .. } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn worker_on_city_steps_to_best_neighbor() {
        let mut map = GameMap::filled(16, TileType::Grassland);
        map.set(loc(8, 9), TileType::Forest);
        let mut us = Player::default();
        us.add_city(loc(8, 8));
        us.add_worker(loc(8, 8));

        let commands = rebalance(&map, &mut us);
        assert_eq!(moves(&commands), vec![(loc(8, 8), loc(8, 9))]);
        assert_eq!(us.workers[0].position, loc(8, 9));
    }

    #[test]
    fn city_adjacent_worker_moves_outward() {
        let mut map = GameMap::filled(16, TileType::Grassland);
        map.set(loc(9, 9), TileType::Hills);
        let mut us = Player::default();
        us.add_city(loc(8, 8));
        us.add_worker(loc(9, 8));

        let commands = rebalance(&map, &mut us);
        assert_eq!(moves(&commands), vec![(loc(9, 8), loc(9, 9))]);
    }

    #[test]
    fn collision_resolves_in_legal_move_order() {
        let map = GameMap::filled(16, TileType::Grassland);
        let mut us = Player::default();
        us.add_city(loc(8, 8));
        us.add_worker(loc(10, 8));
        us.add_worker(loc(10, 8));

        let commands = rebalance(&map, &mut us);
        // First worker takes the first worked neighbour; the second is then
        // alone and stays.
        assert_eq!(moves(&commands), vec![(loc(10, 8), loc(9, 8))]);
        assert_ne!(us.workers[0].position, us.workers[1].position);
    }

    #[test]
    fn boxed_in_city_worker_stays() {
        let map = GameMap::filled(3, TileType::Grassland);
        let mut us = Player::default();
        us.add_city(loc(1, 1));
        us.add_worker(loc(1, 1));
        for n in legal_moves(loc(1, 1), 3) {
            us.add_worker(n);
        }
        // The ring workers spread to the corners; the city worker was
        // evaluated first and had nowhere to go.
        let commands = rebalance(&map, &mut us);
        assert_eq!(us.workers[0].position, loc(1, 1));
        let positions: FnvHashSet<Location> = us.workers.iter().map(|w| w.position).collect();
        assert_eq!(positions.len(), us.workers.len());
        assert!(moves(&commands).iter().all(|(_, to)| to.distance_to(loc(1, 1)) == 2));
    }

    #[test]
    fn worker_handled_under_first_city_only() {
        let map = GameMap::filled(16, TileType::Grassland);
        let mut us = Player::default();
        us.add_city(loc(4, 4));
        us.add_city(loc(3, 6));
        us.add_worker(loc(4, 5));

        // The move lands next to the second city, which must not push it again.
        let commands = rebalance(&map, &mut us);
        assert_eq!(moves(&commands), vec![(loc(4, 5), loc(3, 5))]);
    }
}
