use thiserror::Error;

/// Errors raised while reading or writing roster records.
///
/// `UnknownKind` and `Malformed` reject a single record; loading continues
/// with the next one.  `Io` aborts the load.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line {line}: unknown creature kind tag {tag}")]
    UnknownKind { line: usize, tag: i64 },

    #[error("line {line}: {what}")]
    Malformed { line: usize, what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecordError {
    /// `true` if the error rejects one record but the stream is still usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RecordError::Io(_))
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
