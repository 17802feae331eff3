use crate::constants::*;
use crate::location::*;
use crate::terrain::*;
use crate::utility::first_max_by;
use crate::world::*;
use log::*;
use serde::{Deserialize, Serialize};

/// Static yield score of a single tile. Fog and out of bounds score zero.
pub fn tile_score(loc: Location, map: &GameMap) -> f64 {
    let harvest = map.harvest_amounts(loc);

    harvest.food as f64 * FOOD_WEIGHT
        + harvest.production as f64 * PRODUCTION_WEIGHT
        + harvest.trade as f64 * TRADE_WEIGHT
}

/// Sub-scores of a candidate city site.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteScore {
    pub tile: f64,
    /// Slight preference for the middle of the map.
    pub centrality: f64,
    /// Strong preference for distance from our own cities, capped.
    pub spacing: f64,
    /// Enemy workers or armies on the site would capture the city.
    pub enemy_presence: f64,
}

impl SiteScore {
    pub fn total(&self) -> f64 {
        self.tile + self.centrality + self.spacing + self.enemy_presence
    }
}

pub fn site_score(
    us: &Player,
    them: &[&Player],
    candidate: Location,
    map: &GameMap,
) -> SiteScore {
    let nearest_own_city = us
        .cities
        .iter()
        .map(|c| c.distance_to(candidate))
        .min()
        .unwrap_or(SPACING_CAP)
        .min(SPACING_CAP);

    let occupied_by_enemy = them.iter().any(|p| {
        p.armies.iter().any(|a| a.position == candidate)
            || p.workers.iter().any(|w| w.position == candidate)
    });

    SiteScore {
        tile: tile_score(candidate, map),
        centrality: CENTRALITY_WEIGHT / (candidate.distance_to(map.center()) as f64 + 1.0),
        spacing: SPACING_WEIGHT * nearest_own_city as f64,
        enemy_presence: if occupied_by_enemy {
            -ENEMY_PRESENCE_PENALTY
        } else {
            0.0
        },
    }
}

pub fn city_site_score(us: &Player, them: &[&Player], candidate: Location, map: &GameMap) -> f64 {
    site_score(us, them, candidate, map).total()
}

/// Whether a city may be founded on `loc` at all.
fn is_site_candidate(us: &Player, them: &[&Player], loc: Location, map: &GameMap) -> bool {
    !map.is_fogged(loc) && !us.has_city_at(loc) && !them.iter().any(|p| p.has_city_at(loc))
}

/// Best site scoring strictly above zero, first in x-major scan order on ties.
pub fn find_city_site(us: &Player, them: &[&Player], map: &GameMap) -> Option<(Location, f64)> {
    let best = first_max_by(
        map.locations()
            .filter(|&loc| is_site_candidate(us, them, loc, map)),
        |&loc| city_site_score(us, them, loc, map),
    )
    .filter(|(_, score)| *score > 0.0);

    if let Some((loc, score)) = best {
        trace!(
            "City site ({}, {}) scored {:.3}: {:?}",
            loc.x(),
            loc.y(),
            score,
            site_score(us, them, loc, map)
        );
    }

    best
}

/// Best city site, or `Location::ORIGIN` when no site scores above zero.
///
/// The sentinel cannot be told apart from a genuine best site at the origin;
/// callers that care should use `find_city_site`.
pub fn best_city_site(us: &Player, them: &[&Player], map: &GameMap) -> Location {
    find_city_site(us, them, map)
        .map(|(loc, _)| loc)
        .unwrap_or(Location::ORIGIN)
}
