//! Retrace: a table-driven state machine library with undo/redo history.
//!
//! Retrace models a finite-state machine as pure data: a declarative table
//! of states and event-driven transitions, supplied once at construction.
//! The engine tracks the current state, validates every transition against
//! the table, and keeps a bidirectional history of state changes so callers
//! can step backward and forward along the path they took.
//!
//! # Core Concepts
//!
//! - **Identifiers**: state and event keys are opaque values satisfying the
//!   [`Id`] bound; the engine compares and stores them, never interprets them
//! - **Configuration**: a [`MachineConfig`] mapping each state to its
//!   event-to-target transition table, owned by the machine for its lifetime
//! - **History**: dual undo/redo stacks plus a timestamped transition
//!   journal, maintained behind a single audited transition primitive
//!
//! # Example
//!
//! ```rust
//! use retrace::{transition_table, MachineConfig, StateMachine};
//!
//! let config: MachineConfig<String, String> = transition_table! {
//!     initial: "off";
//!     "off" => { "turn_on" => "on" },
//!     "on"  => { "turn_off" => "off" },
//! };
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! assert_eq!(machine.state(), "off");
//!
//! machine.trigger(&"turn_on".to_string()).unwrap();
//! assert_eq!(machine.state(), "on");
//!
//! assert!(machine.undo().unwrap());
//! assert_eq!(machine.state(), "off");
//!
//! assert!(machine.redo().unwrap());
//! assert_eq!(machine.state(), "on");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{
    History, Id, MachineConfig, MachineError, StateDef, StateMachine, Transition,
    TransitionRecord,
};
