use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile value out of range")]
    InvalidTile,
    #[error("Round already ended, no new moves are accepted")]
    RoundOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
