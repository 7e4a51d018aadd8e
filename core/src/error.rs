use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid range, min is greater than max")]
    InvalidRange,
    #[error("Too many unique values requested for the range")]
    TooManyValues,
    #[error("Invalid game configuration")]
    InvalidConfig,
    #[error("Invalid cell id")]
    InvalidCell,
    #[error("Round layout does not match the game configuration")]
    InvalidLayout,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("Game is not accepting clicks")]
    NotPlaying,
}

pub type Result<T> = core::result::Result<T, GameError>;
