use core::ops::Sub;
use serde::{Deserialize, Serialize};

/// Value of a single number tile. Tiles are identified by their value.
pub type Tile = u8;

/// Smallest tile value in play.
pub const TILE_MIN: Tile = 1;

/// Largest tile value in play, also the bound for generated targets.
pub const TILE_MAX: Tile = 9;

pub const fn tile_in_range(tile: Tile) -> bool {
    TILE_MIN <= tile && tile <= TILE_MAX
}

const fn bit(tile: Tile) -> u16 {
    1 << tile
}

/// Set of tile values, one bit per value in `TILE_MIN..=TILE_MAX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSet(u16);

impl TileSet {
    pub const EMPTY: Self = Self(0);

    /// Every tile from `TILE_MIN` to `TILE_MAX`, the starting pool of a round.
    pub const FULL: Self = Self(((1 << TILE_MAX) - 1) << TILE_MIN);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub const fn contains(self, tile: Tile) -> bool {
        tile_in_range(tile) && self.0 & bit(tile) != 0
    }

    /// Adds a tile. Callers pass values within the tile range.
    pub fn insert(&mut self, tile: Tile) {
        self.0 |= bit(tile);
    }

    /// Drops a tile. Callers pass values within the tile range.
    pub fn remove(&mut self, tile: Tile) {
        self.0 &= !bit(tile);
    }

    /// Sum of every tile value in the set, at most 45 for the full pool.
    pub const fn sum(self) -> u8 {
        let mut total = 0;
        let mut tile = TILE_MIN;
        while tile <= TILE_MAX {
            if self.0 & bit(tile) != 0 {
                total += tile;
            }
            tile += 1;
        }
        total
    }

    pub const fn iter(self) -> TileIter {
        TileIter {
            mask: self.0,
            tile: TILE_MIN,
        }
    }
}

/// Set difference, keeping the tiles of the left set absent from the right.
impl Sub for TileSet {
    type Output = TileSet;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 & !rhs.0)
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}

#[derive(Debug)]
pub struct TileIter {
    mask: u16,
    tile: Tile,
}

impl Iterator for TileIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.tile > TILE_MAX {
                return None;
            }

            let tile = self.tile;
            self.tile += 1;

            if self.mask & bit(tile) != 0 {
                return Some(tile);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn full_pool_holds_all_nine_tiles() {
        assert_eq!(TileSet::FULL.len(), 9);
        assert_eq!(TileSet::FULL.sum(), 45);
        for tile in TILE_MIN..=TILE_MAX {
            assert!(TileSet::FULL.contains(tile));
        }
        assert!(!TileSet::FULL.contains(0));
        assert!(!TileSet::FULL.contains(10));
    }

    #[test]
    fn insert_and_remove_update_membership() {
        let mut set = TileSet::EMPTY;

        set.insert(4);
        set.insert(7);
        assert!(set.contains(4));
        assert_eq!(set.len(), 2);
        assert_eq!(set.sum(), 11);

        set.remove(4);
        assert!(!set.contains(4));
        assert_eq!(set, TileSet::from_iter([7]));
    }

    #[test]
    fn difference_drops_the_matched_tiles() {
        let consumed = TileSet::from_iter([2, 3]);
        let rest = TileSet::FULL - consumed;

        assert_eq!(rest.len(), 7);
        assert!(!rest.contains(2));
        assert!(!rest.contains(3));
        assert!(rest.contains(9));
    }

    #[test]
    fn iter_yields_tiles_in_ascending_order() {
        let set = TileSet::from_iter([9, 1, 5]);
        let tiles: Vec<Tile> = set.iter().collect();

        assert_eq!(tiles, [1, 5, 9]);
    }
}
