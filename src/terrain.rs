use crate::error::TurnError;
use crate::location::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Ocean,
    Grassland,
    Hills,
    Forest,
    Mountains,
    Fogged,
}

impl TileType {
    /// Index the game engine uses for this tile type.
    pub fn api_index(self) -> i32 {
        match self {
            TileType::Ocean => 0,
            TileType::Grassland => 1,
            TileType::Hills => 2,
            TileType::Forest => 3,
            TileType::Mountains => 4,
            TileType::Fogged => -1,
        }
    }

    pub fn from_api_index(index: i32) -> Option<TileType> {
        match index {
            0 => Some(TileType::Ocean),
            1 => Some(TileType::Grassland),
            2 => Some(TileType::Hills),
            3 => Some(TileType::Forest),
            4 => Some(TileType::Mountains),
            -1 => Some(TileType::Fogged),
            _ => None,
        }
    }

    pub fn harvest(self) -> ResourceYield {
        match self {
            TileType::Ocean => ResourceYield::new(1, 0, 2),
            TileType::Grassland => ResourceYield::new(2, 1, 0),
            TileType::Hills => ResourceYield::new(2, 2, 1),
            TileType::Forest => ResourceYield::new(2, 3, 0),
            TileType::Mountains => ResourceYield::new(1, 1, 0),
            TileType::Fogged => ResourceYield::default(),
        }
    }

    /// Combat multiplier the tile grants, `None` for fog.
    pub fn combat_multiplier(self) -> Option<f64> {
        match self {
            TileType::Ocean => Some(0.5),
            TileType::Grassland => Some(1.0),
            TileType::Hills | TileType::Forest => Some(1.5),
            TileType::Mountains => Some(2.0),
            TileType::Fogged => None,
        }
    }
}

/// Per-turn harvest of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceYield {
    pub food: i32,
    pub production: i32,
    pub trade: i32,
}

impl ResourceYield {
    pub fn new(food: i32, production: i32, trade: i32) -> Self {
        ResourceYield {
            food,
            production,
            trade,
        }
    }
}

/// A `size x size` array of per-tile data, stored and iterated x-major.
#[derive(Clone, Debug, PartialEq)]
pub struct GridArray<T: Copy> {
    size: u16,
    data: Vec<T>,
}

impl<T: Copy> GridArray<T> {
    pub fn new(size: u16, initial: T) -> Self {
        GridArray {
            size,
            data: vec![initial; (size as usize) * (size as usize)],
        }
    }

    #[inline]
    pub fn size(&self) -> u16 {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        let index = x * (self.size as usize) + y;
        &self.data[index]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = x * (self.size as usize) + y;
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        *self.get_mut(x, y) = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let size = self.size as usize;
        self.data.iter().enumerate().map(move |(i, v)| {
            let x = i / size;
            let y = i % size;
            ((x, y), v)
        })
    }
}

impl<T: Copy + Serialize> Serialize for GridArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.size, &self.data).serialize(serializer)
    }
}

impl<'de, T: Copy + Deserialize<'de>> Deserialize<'de> for GridArray<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (size, data) = <(u16, Vec<T>)>::deserialize(deserializer)?;
        if data.len() != (size as usize) * (size as usize) {
            return Err(serde::de::Error::custom("Invalid grid array size"));
        }
        Ok(GridArray { size, data })
    }
}

/// The square game map. Read-only for the duration of a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    tiles: GridArray<TileType>,
}

impl GameMap {
    pub fn new(tiles: GridArray<TileType>) -> Self {
        GameMap { tiles }
    }

    /// A map covered by a single tile type.
    pub fn filled(size: u16, tile: TileType) -> Self {
        GameMap {
            tiles: GridArray::new(size, tile),
        }
    }

    /// Build a map from the engine's `contents[x][y]` index grid, flattened
    /// x-major.
    pub fn from_api_indices(size: u16, indices: &[i32]) -> Result<Self, TurnError> {
        let expected = (size as usize) * (size as usize);
        if indices.len() != expected {
            return Err(TurnError::MapSize {
                size,
                expected,
                actual: indices.len(),
            });
        }

        let mut tiles = GridArray::new(size, TileType::Fogged);
        for (i, index) in indices.iter().enumerate() {
            let tile = TileType::from_api_index(*index).ok_or(TurnError::UnknownTile(*index))?;
            tiles.set(i / size as usize, i % size as usize, tile);
        }

        Ok(GameMap { tiles })
    }

    #[inline]
    pub fn size(&self) -> u16 {
        self.tiles.size()
    }

    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.x() < self.size() && loc.y() < self.size()
    }

    /// Tile at `loc`; out of bounds reads as fog.
    pub fn get(&self, loc: Location) -> TileType {
        if self.in_bounds(loc) {
            *self.tiles.get(loc.x() as usize, loc.y() as usize)
        } else {
            TileType::Fogged
        }
    }

    pub fn set(&mut self, loc: Location, tile: TileType) {
        if self.in_bounds(loc) {
            self.tiles.set(loc.x() as usize, loc.y() as usize, tile);
        }
    }

    pub fn is_fogged(&self, loc: Location) -> bool {
        self.get(loc) == TileType::Fogged
    }

    /// Resources harvested on a tile; zero for fog and out of bounds.
    pub fn harvest_amounts(&self, loc: Location) -> ResourceYield {
        self.get(loc).harvest()
    }

    pub fn combat_multiplier(&self, loc: Location) -> Option<f64> {
        self.get(loc).combat_multiplier()
    }

    /// Center tile, rounding down.
    pub fn center(&self) -> Location {
        let half = (self.size() / 2) as u32;
        Location::from_coords(half, half)
    }

    /// Every location, x-major.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.tiles
            .iter()
            .map(|((x, y), _)| Location::from_coords(x as u32, y as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harvest_table() {
        assert_eq!(TileType::Forest.harvest(), ResourceYield::new(2, 3, 0));
        assert_eq!(TileType::Ocean.harvest(), ResourceYield::new(1, 0, 2));
        assert_eq!(TileType::Fogged.harvest(), ResourceYield::default());
    }

    #[test]
    fn out_of_bounds_reads_as_fog() {
        let map = GameMap::filled(4, TileType::Hills);
        let outside = Location::from_coords(4, 0);
        assert!(map.is_fogged(outside));
        assert_eq!(map.harvest_amounts(outside), ResourceYield::default());
        assert_eq!(map.combat_multiplier(outside), None);
    }

    #[test]
    fn builds_from_api_indices() {
        let map = GameMap::from_api_indices(2, &[0, 1, 4, -1]).unwrap();
        assert_eq!(map.get(Location::from_coords(0, 0)), TileType::Ocean);
        assert_eq!(map.get(Location::from_coords(0, 1)), TileType::Grassland);
        assert_eq!(map.get(Location::from_coords(1, 0)), TileType::Mountains);
        assert_eq!(map.get(Location::from_coords(1, 1)), TileType::Fogged);
    }

    #[test]
    fn rejects_bad_api_input() {
        assert_eq!(
            GameMap::from_api_indices(2, &[0, 1, 2]),
            Err(TurnError::MapSize {
                size: 2,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            GameMap::from_api_indices(1, &[9]),
            Err(TurnError::UnknownTile(9))
        );
    }

    #[test]
    fn locations_scan_x_major() {
        let map = GameMap::filled(2, TileType::Grassland);
        let scan: Vec<_> = map.locations().map(|l| (l.x(), l.y())).collect();
        assert_eq!(scan, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
