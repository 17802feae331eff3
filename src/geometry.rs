//! Grid distance and neighbourhood queries.
//!
//! All enumeration orders here are fixed; turn decisions break ties by them.

use crate::constants::*;
use crate::location::*;
use itertools::*;

/// Neighbor offsets for 4-directional movement, in tie-break order.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

#[inline]
pub fn distance(a: Location, b: Location) -> u32 {
    a.distance_to(b)
}

/// The in-bounds orthogonal single steps from `pos`, ordered by `NEIGHBORS_4`.
pub fn legal_moves(pos: Location, size: u16) -> Vec<Location> {
    NEIGHBORS_4
        .iter()
        .filter_map(|&(dx, dy)| pos.offset(dx, dy, size))
        .collect()
}

/// In-bounds cells within `radius` of `center`, excluding `center`, scanned
/// x-major.
pub fn neighborhood(center: Location, radius: u32, size: u16) -> Vec<Location> {
    if size == 0 {
        return Vec::new();
    }

    let max = size as u32 - 1;
    let (cx, cy) = (center.x() as u32, center.y() as u32);
    let xs = cx.saturating_sub(radius)..=(cx + radius).min(max);
    let ys = cy.saturating_sub(radius)..=(cy + radius).min(max);

    iproduct!(xs, ys)
        .map(|(x, y)| Location::from_coords(x, y))
        .filter(|&loc| loc != center && center.distance_to(loc) <= radius)
        .collect()
}

/// Tiles at distance exactly 1 from `center`.
pub fn adjacent_tiles(center: Location, size: u16) -> Vec<Location> {
    neighborhood(center, THREAT_RADIUS, size)
}

/// The worked radius of a city plus the city tile itself (last).
pub fn worked_tiles(center: Location, size: u16) -> Vec<Location> {
    let mut tiles = neighborhood(center, WORKED_RADIUS, size);
    tiles.push(center);
    tiles
}
