use crate::*;

/// Owns the live round together with its target source. A host drives this one
/// object: it forwards tile clicks and timer ticks, reads the round out for display,
/// and swaps in a fresh round on play-again.
#[derive(Clone, Debug)]
pub struct RoundSession {
    round: PuzzleRound,
    targets: RandomTargetSource,
}

impl RoundSession {
    /// Starts a session on its first round. Equal seeds replay equal target
    /// sequences.
    pub fn new(seed: u64) -> Self {
        let mut targets = RandomTargetSource::new(seed);
        let round = PuzzleRound::new(&mut targets);
        Self { round, targets }
    }

    /// Picks up a previously saved round, drawing any further targets from `seed`.
    pub fn resume(round: PuzzleRound, seed: u64) -> Self {
        Self {
            round,
            targets: RandomTargetSource::new(seed),
        }
    }

    pub fn round(&self) -> &PuzzleRound {
        &self.round
    }

    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// Replaces the current round wholesale. The old round is dropped here, so a
    /// stray timer holding on to the session cannot tick a round that is gone.
    pub fn new_round(&mut self) {
        log::debug!("starting new round");
        self.round = PuzzleRound::new(&mut self.targets);
    }

    pub fn select_tile(&mut self, tile: Tile) -> Result<SelectOutcome> {
        self.round.select_tile(tile, &mut self.targets)
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.round.tick()
    }
}
