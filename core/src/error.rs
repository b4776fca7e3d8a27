use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Card is not part of this session's pool")]
    NotInPool,
    #[error("Game already ended, no new flips are accepted")]
    AlreadyEnded,
    #[error("Pool contains the same card twice")]
    DuplicateCard,
    #[error("Target is not part of the pool")]
    TargetNotInPool,
    #[error("Too many cards for the number range")]
    TooManyCards,
    #[error("Pool must contain at least one card")]
    EmptyPool,
    #[error("Flip budget must allow at least one flip")]
    ZeroBudget,
}

pub type Result<T> = core::result::Result<T, GameError>;
