use serde::*;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u32,
}

impl Location {
    /// The coordinate reported when no city site scores above zero.
    pub const ORIGIN: Location = Location { packed: 0 };

    pub fn from_coords(x: u32, y: u32) -> Self {
        Location {
            packed: ((x & 0xFFFF) << 16) | (y & 0xFFFF),
        }
    }

    #[inline]
    pub fn x(self) -> u16 {
        ((self.packed >> 16) & 0xFFFF) as u16
    }

    #[inline]
    pub fn y(self) -> u16 {
        (self.packed & 0xFFFF) as u16
    }

    #[inline]
    pub fn packed_repr(self) -> u32 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Location { packed }
    }

    /// Manhattan distance.
    pub fn distance_to(self, other: Self) -> u32 {
        let dx = (self.x() as i32) - (other.x() as i32);
        let dy = (self.y() as i32) - (other.y() as i32);

        dx.unsigned_abs() + dy.unsigned_abs()
    }

    /// Offset by a signed delta, or `None` if the result would leave a
    /// `size x size` grid.
    pub fn offset(self, dx: i32, dy: i32, size: u16) -> Option<Location> {
        let x = self.x() as i32 + dx;
        let y = self.y() as i32 + dy;

        if x >= 0 && y >= 0 && x < size as i32 && y < size as i32 {
            Some(Location::from_coords(x as u32, y as u32))
        } else {
            None
        }
    }
}

impl From<(u32, u32)> for Location {
    fn from((x, y): (u32, u32)) -> Self {
        Location::from_coords(x, y)
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Location::from_packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_coordinates() {
        let loc = Location::from_coords(300, 7);
        assert_eq!(loc.x(), 300);
        assert_eq!(loc.y(), 7);
        assert_eq!(Location::from_packed(loc.packed_repr()), loc);
    }

    #[test]
    fn manhattan_distance() {
        let a = Location::from_coords(1, 2);
        let b = Location::from_coords(4, 0);
        assert_eq!(a.distance_to(b), 5);
        assert_eq!(b.distance_to(a), 5);
        assert_eq!(a.distance_to(a), 0);
    }

    #[test]
    fn offset_respects_bounds() {
        let corner = Location::ORIGIN;
        assert_eq!(corner.offset(-1, 0, 4), None);
        assert_eq!(corner.offset(0, 1, 4), Some(Location::from_coords(0, 1)));
        assert_eq!(Location::from_coords(3, 3).offset(1, 0, 4), None);
    }
}
