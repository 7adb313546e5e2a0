//! Engine error types.

use super::id::Id;
use thiserror::Error;

/// Errors raised by [`StateMachine`](super::StateMachine) operations.
///
/// Every variant is raised before any mutation takes place, so a failed
/// operation leaves the machine's observable state unchanged. None of these
/// is recoverable by the engine itself; they signal a configuration or
/// call-site mistake for the caller to fix.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MachineError<S: Id, E: Id> {
    /// Construction was attempted with a configuration declaring no states.
    #[error("configuration declares no states")]
    EmptyConfiguration,

    /// A transition into a state missing from the table was attempted.
    #[error("unknown state: {0:?}")]
    InvalidState(S),

    /// The current state declares no rule for the triggered event.
    #[error("state {state:?} declares no transition for event {event:?}")]
    InvalidEvent { state: S, event: E },
}
