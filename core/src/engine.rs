use serde::{Deserialize, Serialize};

use crate::*;

/// Seconds a round lasts before timing out.
pub const ROUND_SECONDS: u32 = 10;

/// Overall round state, derived on demand and never stored:
/// - `Won` once every tile has been consumed
/// - `Lost` once time ran out with tiles left
/// - `Active` otherwise
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One play-through of the puzzle, from a fresh pool to a win or a timeout.
///
/// All randomness goes through the [`TargetSource`] passed into the operations that
/// draw targets, so the round itself is plain serializable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRound {
    target: Tile,
    available: TileSet,
    candidate: TileSet,
    seconds_remaining: u32,
}

impl PuzzleRound {
    pub fn new(targets: &mut impl TargetSource) -> Self {
        let available = TileSet::FULL;
        Self {
            target: targets.next_target(available),
            available,
            candidate: TileSet::EMPTY,
            seconds_remaining: ROUND_SECONDS,
        }
    }

    pub fn target(&self) -> Tile {
        self.target
    }

    pub fn available(&self) -> TileSet {
        self.available
    }

    pub fn candidate(&self) -> TileSet {
        self.candidate
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Sum of the current candidate selection.
    pub fn candidate_sum(&self) -> u8 {
        self.candidate.sum()
    }

    pub fn status(&self) -> RoundStatus {
        if self.available.is_empty() {
            RoundStatus::Won
        } else if self.seconds_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Derived display status of one tile.
    pub fn tile_status(&self, tile: Tile) -> TileStatus {
        use TileStatus::*;

        if !self.available.contains(tile) {
            return Used;
        }
        if self.candidate.contains(tile) {
            return if self.candidates_are_wrong() {
                Wrong
            } else {
                Candidate
            };
        }
        Available
    }

    /// Every tile with its derived status, in ascending tile order.
    pub fn tiles(&self) -> impl Iterator<Item = (Tile, TileStatus)> {
        (TILE_MIN..=TILE_MAX).map(|tile| (tile, self.tile_status(tile)))
    }

    /// Toggles `tile` in the candidate selection and settles the result: a selection
    /// summing to the target consumes its tiles and redraws the target from `targets`,
    /// except that draining the pool wins the round and leaves the target untouched.
    pub fn select_tile(
        &mut self,
        tile: Tile,
        targets: &mut impl TargetSource,
    ) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let tile = validate_tile(tile)?;
        self.check_active()?;

        if !self.available.contains(tile) {
            return Ok(NoChange);
        }

        let mut candidate = self.candidate;
        if candidate.contains(tile) {
            candidate.remove(tile);
        } else {
            candidate.insert(tile);
        }

        let candidate_sum = candidate.sum();
        if candidate_sum != self.target {
            self.candidate = candidate;
            log::trace!("selection now {:?}, sum {}", candidate, candidate_sum);
            return Ok(Toggled);
        }

        self.available = self.available - candidate;
        self.candidate = TileSet::EMPTY;
        log::debug!(
            "matched target {} with {:?}, {} tiles left",
            self.target,
            candidate,
            self.available.len()
        );

        if self.available.is_empty() {
            return Ok(Won);
        }

        self.target = targets.next_target(self.available);
        Ok(Matched)
    }

    /// Advances the countdown by one second. Ticks outside an active round change
    /// nothing, so late timers from a finished round are harmless.
    pub fn tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        if !matches!(self.status(), RoundStatus::Active) {
            return NoChange;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            log::debug!("time ran out with {} tiles left", self.available.len());
            TimedOut
        } else {
            Ticked
        }
    }

    fn candidates_are_wrong(&self) -> bool {
        self.candidate_sum() > self.target
    }

    fn check_active(&self) -> Result<()> {
        if matches!(self.status(), RoundStatus::Active) {
            Ok(())
        } else {
            Err(GameError::RoundOver)
        }
    }
}

fn validate_tile(tile: Tile) -> Result<Tile> {
    if tile_in_range(tile) {
        Ok(tile)
    } else {
        Err(GameError::InvalidTile)
    }
}
