//! Faults raised by the collaborators the bracket core calls into.
//!
//! Expected states (unknown tournament, too few teams, unplayable match) are
//! not errors; operations report them as `None` or an empty round list.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BracketError {
    /// A writer panicked while holding a store lock.
    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("failed to open fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read fixtures: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid fixture row {line}: {reason}")]
    InvalidFixture { line: u64, reason: String },
}
