#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod session;
mod tile;
mod types;

/// Outcome of a tile selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Toggled,
    Matched,
    Won,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Matched => true,
            Won => true,
        }
    }
}

/// Outcome of a timer tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    TimedOut,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Ticked => true,
            TimedOut => true,
        }
    }
}
