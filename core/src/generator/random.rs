use rand::prelude::*;
use smallvec::{SmallVec, smallvec};

use super::*;

/// Every sum reachable by a non-empty subset of `pool`, capped at `bound`, one entry
/// per subset. Sums reachable through several subsets repeat, which is what makes the
/// draw in [`choose_next_target`] weighted by subset count.
pub fn subset_sums(pool: TileSet, bound: Tile) -> SmallVec<[u8; 64]> {
    // partial sums of every kept subset so far, seeded with the empty subset
    let mut grown: SmallVec<[u8; 64]> = smallvec![0];
    let mut sums = SmallVec::new();

    for tile in pool.iter() {
        // supersets of an over-bound subset stay over bound, safe to prune here
        for i in 0..grown.len() {
            let candidate = grown[i] + tile;
            if candidate <= bound {
                grown.push(candidate);
                sums.push(candidate);
            }
        }
    }

    sums
}

/// Picks the next target uniformly over [`subset_sums`], so a sum reachable through
/// more subsets comes up proportionally more often. The pool must hold at least one
/// tile not above `bound`; any non-empty pool satisfies this with a bound of
/// [`TILE_MAX`].
pub fn choose_next_target<R: Rng>(pool: TileSet, bound: Tile, rng: &mut R) -> Tile {
    let sums = subset_sums(pool, bound);
    sums[rng.random_range(0..sums.len())]
}

/// Production target source, drawing from a seeded RNG so equal seeds replay the same
/// target sequence.
#[derive(Clone, Debug)]
pub struct RandomTargetSource {
    rng: SmallRng,
}

impl RandomTargetSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for RandomTargetSource {
    fn next_target(&mut self, pool: TileSet) -> Tile {
        let target = choose_next_target(pool, TILE_MAX, &mut self.rng);
        log::trace!("drew target {} from pool {:?}", target, pool);
        target
    }
}
