//! The transition-and-history engine.

use super::config::MachineConfig;
use super::error::MachineError;
use super::history::History;
use super::id::Id;
use std::mem;

/// A finite-state machine driven by a declarative transition table.
///
/// The machine owns its [`MachineConfig`] for its whole lifetime, tracks the
/// single current state, and maintains a bidirectional history of state
/// changes. All mutation funnels through one internal primitive so the
/// history invariants hold no matter which operation ran: ordinary forward
/// transitions invalidate the redo stack, history navigation preserves it.
///
/// Neither the configured initial state nor any transition target is
/// validated up front. An undeclared identifier surfaces as
/// [`MachineError::InvalidState`] at the moment a transition into it is
/// attempted, never earlier.
///
/// # Example
///
/// ```rust
/// use retrace::{transition_table, MachineConfig, StateMachine};
///
/// let config: MachineConfig<String, String> = transition_table! {
///     initial: "idle";
///     "idle" => { "start" => "busy" },
///     "busy" => { "finish" => "idle" },
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger(&"start".to_string()).unwrap();
/// machine.trigger(&"finish".to_string()).unwrap();
///
/// assert!(machine.undo().unwrap());
/// assert_eq!(machine.state(), "busy");
/// assert!(machine.redo().unwrap());
/// assert_eq!(machine.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: Id, E: Id> {
    config: MachineConfig<S, E>,
    current: S,
    history: History<S>,
}

impl<S: Id, E: Id> StateMachine<S, E> {
    /// Create a machine from its configuration.
    ///
    /// Fails with [`MachineError::EmptyConfiguration`] when the table
    /// declares no states at all. The initial state is NOT checked against
    /// the table here; an undeclared initial is only caught on the next
    /// transition attempt.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, MachineError<S, E>> {
        if config.states.is_empty() {
            return Err(MachineError::EmptyConfiguration);
        }
        let current = config.initial.clone();
        Ok(Self {
            config,
            current,
            history: History::new(),
        })
    }

    /// The current state identifier.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// The state most recently left, if any.
    pub fn previous(&self) -> Option<&S> {
        self.history.undo_states().last()
    }

    /// The configuration this machine runs on.
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    /// Read access to the undo/redo stacks and the transition journal.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// All declared state identifiers, in declaration order.
    pub fn states(&self) -> Vec<&S> {
        self.config.state_ids().collect()
    }

    /// Declared states whose transition table handles `event`, in
    /// declaration order.
    pub fn states_handling(&self, event: &E) -> Vec<&S> {
        self.config
            .states
            .iter()
            .filter(|def| def.handles(event))
            .map(|def| &def.id)
            .collect()
    }

    /// Events the current state declares, in declaration order. Empty when
    /// the current state is not in the table.
    pub fn available_events(&self) -> Vec<&E> {
        self.config
            .state_def(&self.current)
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    /// Move directly to `target` as an ordinary forward transition.
    ///
    /// Fails with [`MachineError::InvalidState`] when `target` is not
    /// declared, leaving the machine untouched. On success the redo stack is
    /// discarded and the outgoing state is recorded on the undo stack, so
    /// the move is undoable.
    pub fn change_state(&mut self, target: S) -> Result<(), MachineError<S, E>> {
        self.apply_transition(target, false)
    }

    /// Fire `event` against the current state's transition table.
    ///
    /// Fails with [`MachineError::InvalidEvent`] when the current state
    /// declares no rule for `event` (or is itself undeclared), leaving the
    /// machine untouched. A declared rule whose target is missing from the
    /// table fails with [`MachineError::InvalidState`] instead.
    pub fn trigger(&mut self, event: &E) -> Result<(), MachineError<S, E>> {
        let target = self
            .config
            .state_def(&self.current)
            .and_then(|def| def.target(event))
            .cloned()
            .ok_or_else(|| MachineError::InvalidEvent {
                state: self.current.clone(),
                event: event.clone(),
            })?;
        self.change_state(target)
    }

    /// Return to the configured initial state.
    ///
    /// An ordinary forward transition: the redo stack is discarded and the
    /// outgoing state lands on the undo stack, so `reset` is itself
    /// undoable. Fails with [`MachineError::InvalidState`] when the
    /// configured initial state is not declared.
    pub fn reset(&mut self) -> Result<(), MachineError<S, E>> {
        let initial = self.config.initial.clone();
        self.change_state(initial)
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `Ok(false)` with no mutation when there is nothing to undo.
    /// On success the state just left moves onto the redo stack and the undo
    /// depth shrinks by exactly one. `Err(InvalidState)` is only possible
    /// when a stacked identifier is missing from the table (reachable solely
    /// through an undeclared initial state); the machine is left unchanged
    /// in that case.
    pub fn undo(&mut self) -> Result<bool, MachineError<S, E>> {
        let Some(target) = self.history.pop_undo() else {
            return Ok(false);
        };
        if !self.config.declares(&target) {
            self.history.push_undo(target.clone());
            return Err(MachineError::InvalidState(target));
        }
        // Cannot fail past this point: target is declared and the flag
        // preserves the redo stack.
        self.apply_transition(target, true)?;
        // apply_transition re-pushed the state we just left; relocate it to
        // the redo stack so the two stacks stay mutually exclusive.
        if let Some(left) = self.history.pop_undo() {
            self.history.push_redo(left);
        }
        Ok(true)
    }

    /// Step forward again along the undone path.
    ///
    /// Returns `Ok(false)` with no mutation when there is nothing to redo.
    /// On success the outgoing state lands on the undo stack and the redo
    /// depth shrinks by one. Same error contract as [`StateMachine::undo`].
    pub fn redo(&mut self) -> Result<bool, MachineError<S, E>> {
        let Some(target) = self.history.pop_redo() else {
            return Ok(false);
        };
        if !self.config.declares(&target) {
            self.history.push_redo(target.clone());
            return Err(MachineError::InvalidState(target));
        }
        self.apply_transition(target, true)?;
        Ok(true)
    }

    /// Drop all history: both stacks and the journal. The current state is
    /// untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The sole mutation primitive. Validation first, then in strict order:
    /// discard the redo stack (unless preserving), push the outgoing state
    /// onto the undo stack, assign the new current state, append the journal
    /// record.
    fn apply_transition(
        &mut self,
        target: S,
        preserve_redo: bool,
    ) -> Result<(), MachineError<S, E>> {
        if !self.config.declares(&target) {
            return Err(MachineError::InvalidState(target));
        }
        if !preserve_redo {
            self.history.clear_redo();
        }
        let from = mem::replace(&mut self.current, target);
        self.history.push_undo(from.clone());
        self.history.record(from, self.current.clone());
        Ok(())
    }
}
