//! Enemy presence around our cities.

use crate::constants::*;
use crate::geometry::*;
use crate::location::*;
use crate::terrain::*;
use crate::world::*;

/// Enemy armies stacked on a tile adjacent to one of our cities.
#[derive(Copy, Clone, Debug)]
pub struct Threat<'a> {
    pub position: Location,
    pub num_armies: usize,
    pub max_hitpoints: i32,
    pub player: &'a Player,
}

/// Weighted count of enemy workers, cities and armies over the city's worked
/// tiles, the city tile included.
pub fn city_pressure(_us: &Player, them: &[&Player], city: &City, map: &GameMap) -> f64 {
    worked_tiles(city.position, map.size())
        .into_iter()
        .map(|loc| {
            let workers: usize = them.iter().map(|p| p.workers_at(loc)).sum();
            let cities: usize = them.iter().map(|p| p.cities_at(loc)).sum();
            let armies: usize = them.iter().map(|p| p.armies_at(loc).count()).sum();

            ENEMY_WORKER_PRESSURE * workers as f64
                + ENEMY_CITY_PRESSURE * cities as f64
                + ENEMY_ARMY_PRESSURE * armies as f64
        })
        .sum()
}

/// One threat per (adjacent tile, opponent) holding at least one army,
/// ordered by tile and then by opponent.
pub fn immediate_threats<'a>(
    _us: &Player,
    them: &[&'a Player],
    city: &City,
    map: &GameMap,
) -> Vec<Threat<'a>> {
    let mut threats = Vec::new();

    for pos in adjacent_tiles(city.position, map.size()) {
        for &player in them {
            let (num_armies, max_hitpoints) = player
                .armies_at(pos)
                .fold((0, 0), |(count, max), a| (count + 1, max.max(a.hitpoints)));

            if num_armies > 0 {
                threats.push(Threat {
                    position: pos,
                    num_armies,
                    max_hitpoints,
                    player,
                });
            }
        }
    }

    threats
}

/// The threat with the largest `max_hitpoints`; the first one on ties.
pub fn strongest_threat<'a>(threats: &[Threat<'a>]) -> Option<Threat<'a>> {
    threats.iter().fold(None, |best: Option<Threat<'a>>, &t| match best {
        Some(b) if b.max_hitpoints >= t.max_hitpoints => Some(b),
        _ => Some(t),
    })
}

/// Own workers on the worked tiles (city tile included) per worked tile.
/// A load figure, not clamped to 1.
pub fn saturation(us: &Player, city: &City, map: &GameMap) -> f64 {
    let tiles = worked_tiles(city.position, map.size());
    let workers: usize = tiles.iter().map(|&loc| us.workers_at(loc)).sum();

    workers as f64 / tiles.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    fn setup() -> (GameMap, Player) {
        let map = GameMap::filled(16, TileType::Grassland);
        let mut us = Player::default();
        us.add_city(loc(8, 8));
        (map, us)
    }

    #[test]
    fn pressure_weights_unit_kinds() {
        let (map, us) = setup();
        let mut a = Player::default();
        a.add_worker(loc(8, 9));
        a.add_army(loc(7, 8), 100);
        let mut b = Player::default();
        b.add_city(loc(10, 8));
        b.add_army(loc(8, 8), 50);
        b.add_army(loc(12, 12), 50);

        let pressure = city_pressure(&us, &[&a, &b], &us.cities[0], &map);
        assert_eq!(pressure, 1.0 + 6.0 + 3.0 + 6.0);
    }

    #[test]
    fn threats_group_by_tile_and_player() {
        let (map, us) = setup();
        let mut a = Player::default();
        a.add_army(loc(8, 9), 40);
        a.add_army(loc(8, 9), 90);
        a.add_army(loc(7, 8), 10);
        let mut b = Player::default();
        b.add_army(loc(7, 8), 70);
        b.add_army(loc(6, 8), 500);

        let threats = immediate_threats(&us, &[&a, &b], &us.cities[0], &map);
        let summary: Vec<_> = threats
            .iter()
            .map(|t| (t.position, t.num_armies, t.max_hitpoints))
            .collect();

        assert_eq!(
            summary,
            vec![(loc(7, 8), 1, 10), (loc(7, 8), 1, 70), (loc(8, 9), 2, 90)]
        );
        assert!(std::ptr::eq(threats[1].player, &b));

        let strongest = strongest_threat(&threats).unwrap();
        assert_eq!(strongest.position, loc(8, 9));
        assert_eq!(strongest.max_hitpoints, 90);
    }

    #[test]
    fn strongest_keeps_first_on_ties() {
        let (map, us) = setup();
        let mut a = Player::default();
        a.add_army(loc(9, 8), 50);
        a.add_army(loc(8, 7), 50);

        let threats = immediate_threats(&us, &[&a], &us.cities[0], &map);
        assert_eq!(strongest_threat(&threats).map(|t| t.position), Some(loc(8, 7)));
        assert!(strongest_threat(&[]).is_none());
    }

    #[test]
    fn no_enemies_means_no_threats() {
        let (map, us) = setup();
        assert!(immediate_threats(&us, &[], &us.cities[0], &map).is_empty());
    }

    #[test]
    fn saturation_counts_city_tile() {
        let (map, mut us) = setup();
        us.add_worker(loc(8, 8));
        us.add_worker(loc(9, 9));
        us.add_worker(loc(11, 8));
        assert_eq!(saturation(&us, &us.cities[0], &map), 2.0 / 13.0);
    }
}
