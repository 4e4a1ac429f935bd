use thiserror::Error;

use crate::model::PlayerId;

/// Caller contract violations caught at the boundary. The transition
/// function itself never fails; these come from `try_apply`, input parsing
/// and configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown player id: {0}")]
    UnknownPlayer(PlayerId),

    #[error("not {player_id}'s turn (current: {current})")]
    NotPlayersTurn { player_id: PlayerId, current: PlayerId },

    #[error("match has not been started")]
    MatchNotStarted,

    #[error("match already won by {0}")]
    MatchFinished(PlayerId),

    #[error("turn score {0} outside 0..=180")]
    TurnOutOfRange(u32),

    #[error("invalid turn input: {0:?}")]
    InvalidTurnInput(String),

    #[error("roster already has {max} players")]
    RosterFull { max: usize },

    #[error("roster needs at least {min} players")]
    RosterTooSmall { min: usize },

    #[error("no player slot at index {index} (roster size {len})")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("unknown bot difficulty: {0:?}")]
    UnknownDifficulty(String),

    #[error("unknown game mode: {0:?}")]
    UnknownGameMode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}
