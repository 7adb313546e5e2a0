//! Bidirectional state history.
//!
//! `History` holds the two stacks that make transitions reversible: the undo
//! stack records the path taken to the current state, the redo stack records
//! states stepped back out of. A timestamped journal of every applied
//! transition rides alongside. Read access is public; mutation is reserved
//! for the machine's single transition primitive so the stack invariants
//! cannot be violated from outside.

use super::id::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Journal entry for one applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: Id> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Undo/redo stacks plus the transition journal.
///
/// # Example
///
/// ```rust
/// use retrace::{transition_table, MachineConfig, StateMachine};
///
/// let config: MachineConfig<String, String> = transition_table! {
///     initial: "draft";
///     "draft" => { "submit" => "review" },
///     "review" => { "approve" => "published" },
///     "published" => {},
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger(&"submit".to_string()).unwrap();
/// machine.trigger(&"approve".to_string()).unwrap();
///
/// let history = machine.history();
/// assert_eq!(history.undo_depth(), 2);
/// assert_eq!(history.undo_states(), ["draft", "review"]);
/// assert!(history.can_undo());
/// assert!(!history.can_redo());
/// assert_eq!(history.records().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: Id> {
    undo: Vec<S>,
    redo: Vec<S>,
    records: Vec<TransitionRecord<S>>,
}

impl<S: Id> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Id> History<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Previously-visited states, oldest first; the path to the current
    /// state, excluding the current state itself.
    pub fn undo_states(&self) -> &[S] {
        &self.undo
    }

    /// Undone states, oldest first; the most recently undone state is last.
    pub fn redo_states(&self) -> &[S] {
        &self.redo
    }

    /// Number of states reachable by stepping backward.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of states reachable by stepping forward again.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Whether a backward step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a forward step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Whether both stacks and the journal are empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty() && self.records.is_empty()
    }

    /// Journal of applied transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Empty both stacks and the journal.
    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.records.clear();
    }

    pub(crate) fn push_undo(&mut self, state: S) {
        self.undo.push(state);
    }

    pub(crate) fn pop_undo(&mut self) -> Option<S> {
        self.undo.pop()
    }

    pub(crate) fn push_redo(&mut self, state: S) {
        self.redo.push(state);
    }

    pub(crate) fn pop_redo(&mut self) -> Option<S> {
        self.redo.pop()
    }

    pub(crate) fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub(crate) fn record(&mut self, from: S, to: S) {
        self.records.push(TransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
        });
    }
}
