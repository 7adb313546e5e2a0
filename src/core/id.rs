//! Opaque identifier bound for state and event keys.
//!
//! The engine never interprets identifier content: identifiers are compared,
//! hashed, cloned, and stored, nothing more. State and event keys are two
//! independent type parameters, so a machine over `(String, String)` and a
//! machine over a pair of domain enums are both natural instantiations.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by state and event identifiers.
///
/// Blanket-implemented for every qualifying type, so there is nothing to
/// implement by hand: `String`, integers, and plain data enums all qualify.
///
/// # Required Traits
///
/// - `Clone`: identifiers are stored in history stacks and journal records
/// - `Eq` + `Hash`: identifiers are compared and usable as map keys
/// - `Debug`: identifiers appear in error messages
/// - `Serialize` + `Deserialize`: configurations and history are serializable
///
/// # Example
///
/// ```rust
/// use retrace::Id;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Draft,
///     Review,
///     Published,
/// }
///
/// fn takes_id<T: Id>(_value: T) {}
///
/// takes_id(Phase::Draft);
/// takes_id("draft".to_string());
/// takes_id(42u32);
/// ```
pub trait Id:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Id for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
