//! Build errors for configuration builders.

use crate::core::Id;
use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError<S: Id, E: Id> {
    #[error("initial state not specified; call .initial(state) before .build()")]
    MissingInitialState,

    #[error("no states declared; add at least one state")]
    NoStates,

    #[error("state {state:?} declares event {event:?} more than once")]
    DuplicateTransition { state: S, event: E },
}
