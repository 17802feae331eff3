//! Single-step greedy pursuit of nearby enemy units.

use crate::location::*;
use crate::plan::*;
use crate::terrain::*;
use crate::world::*;
use log::*;

/// Nearest enemy unit position and its distance. Opponents are scanned in
/// order, each one's armies, then cities, then workers; the first unit found
/// at the minimum distance wins.
pub fn nearest_target(army: &Army, them: &[&Player]) -> Option<(Location, u32)> {
    let mut nearest: Option<(Location, u32)> = None;

    for player in them {
        for pos in player.unit_positions() {
            let dist = army.distance_to(pos);
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((pos, dist));
            }
        }
    }

    nearest
}

/// One orthogonal step from `from` toward `to`, along the axis with the
/// larger offset (x on ties). `None` when already there.
pub fn step_toward(from: Location, to: Location) -> Option<Location> {
    let dx = to.x() as i32 - from.x() as i32;
    let dy = to.y() as i32 - from.y() as i32;

    if dx == 0 && dy == 0 {
        None
    } else if dx.abs() >= dy.abs() {
        Some(Location::from_coords(
            (from.x() as i32 + dx.signum()) as u32,
            from.y() as u32,
        ))
    } else {
        Some(Location::from_coords(
            from.x() as u32,
            (from.y() as i32 + dy.signum()) as u32,
        ))
    }
}

/// Step every army one tile toward the nearest enemy unit within
/// `engage_range`. Armies with nothing in range hold position.
pub fn advance_armies(
    us: &mut Player,
    them: &[&Player],
    map: &GameMap,
    engage_range: u32,
) -> Vec<Command> {
    let mut commands = Vec::new();

    for (index, army) in us.armies.iter_mut().enumerate() {
        let Some((target, dist)) = nearest_target(army, them) else {
            continue;
        };
        if dist > engage_range {
            continue;
        }

        let from = army.position;
        let Some(to) = step_toward(from, target).filter(|&to| map.in_bounds(to)) else {
            continue;
        };

        trace!(
            "Army {} pursuing ({}, {}) at distance {}: ({}, {}) -> ({}, {})",
            index,
            target.x(),
            target.y(),
            dist,
            from.x(),
            from.y(),
            to.x(),
            to.y()
        );

        army.position = to;
        commands.push(Command::Move {
            kind: UnitKind::Army,
            from,
            to,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ARMY_ENGAGE_RANGE;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    #[test]
    fn steps_along_larger_axis() {
        assert_eq!(step_toward(loc(5, 5), loc(8, 6)), Some(loc(6, 5)));
        assert_eq!(step_toward(loc(5, 5), loc(4, 2)), Some(loc(5, 4)));
        assert_eq!(step_toward(loc(5, 5), loc(7, 7)), Some(loc(6, 5)));
        assert_eq!(step_toward(loc(5, 5), loc(5, 5)), None);
    }

    #[test]
    fn nearest_prefers_first_found() {
        let army = Army::new(loc(5, 5), 100);
        let mut a = Player::default();
        a.add_worker(loc(5, 7));
        let mut b = Player::default();
        b.add_army(loc(7, 5), 100);
        b.add_city(loc(5, 4));

        assert_eq!(nearest_target(&army, &[&a, &b]), Some((loc(5, 4), 1)));
        assert_eq!(nearest_target(&army, &[&a]), Some((loc(5, 7), 2)));
        assert_eq!(nearest_target(&army, &[]), None);
    }

    #[test]
    fn armies_beyond_range_hold() {
        let map = GameMap::filled(16, TileType::Grassland);
        let mut us = Player::default();
        us.add_army(loc(0, 0), 100);
        us.add_army(loc(10, 10), 100);
        let mut enemy = Player::default();
        enemy.add_worker(loc(13, 12));

        let commands = advance_armies(&mut us, &[&enemy], &map, ARMY_ENGAGE_RANGE);
        assert_eq!(
            commands,
            vec![Command::Move {
                kind: UnitKind::Army,
                from: loc(10, 10),
                to: loc(11, 10),
            }]
        );
        assert_eq!(us.armies[0].position, loc(0, 0));
        assert_eq!(us.armies[1].position, loc(11, 10));
    }

    #[test]
    fn no_opponents_no_moves() {
        let map = GameMap::filled(8, TileType::Grassland);
        let mut us = Player::default();
        us.add_army(loc(3, 3), 100);
        assert!(advance_armies(&mut us, &[], &map, ARMY_ENGAGE_RANGE).is_empty());
    }
}
