use arena_core::CreatureId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombatError {
    /// A participant's state was locked by another thread.  The event is
    /// re-queued.
    #[error("creature {id} ({name}) is busy")]
    Contended { id: CreatureId, name: String },

    /// The referee refused to resolve the event.  The event is dropped.
    #[error("fight rejected: {0}")]
    Rejected(String),
}

impl CombatError {
    /// `true` if retrying the same event later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, CombatError::Contended { .. })
    }
}

pub type CombatResult<T> = Result<T, CombatError>;
