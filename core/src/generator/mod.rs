use crate::*;
pub use random::*;

mod random;

/// Draws the next round target, always reachable as a subset sum of `pool`.
pub trait TargetSource {
    fn next_target(&mut self, pool: TileSet) -> Tile;
}
