use serde::{Deserialize, Serialize};

/// Player-visible status of a single tile, derived from round state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TileStatus {
    Available,
    Candidate,
    Wrong,
    Used,
}

impl TileStatus {
    pub const fn is_in_selection(self) -> bool {
        matches!(self, Self::Candidate | Self::Wrong)
    }
}
