use arena_core::{ArenaError, CreatureId, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ArenaError),

    #[error("creature {name} starts outside the field at {position}")]
    OutOfBounds { name: String, position: Position },

    #[error("creature id {0} appears more than once")]
    DuplicateId(CreatureId),

    #[error("failed to spawn {thread} thread: {source}")]
    Spawn {
        thread: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} thread panicked")]
    Panicked(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
