//! Declarative transition tables.
//!
//! A machine's behavior is pure data: a `MachineConfig` lists the declared
//! states in order, and each `StateDef` carries its own event-to-target
//! rules. Lookups are linear scans over the declaration, which keeps the
//! declaration order observable and is plenty for the table sizes this
//! engine is built for.

use super::id::Id;
use serde::{Deserialize, Serialize};

/// A single event-to-target rule declared on a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: Id, E: Id> {
    /// Event that fires this rule
    pub on: E,
    /// State the machine moves to
    pub to: S,
}

/// A declared state and its transition rules.
///
/// Rules are kept in declaration order; the first rule matching an event
/// wins, which gives the table plain mapping semantics as long as events
/// are not declared twice (the builder rejects duplicates eagerly).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDef<S: Id, E: Id> {
    /// Identifier of this state
    pub id: S,
    /// Event-to-target rules, declaration order
    pub transitions: Vec<Transition<S, E>>,
}

impl<S: Id, E: Id> StateDef<S, E> {
    /// Target state for `event`, if this state declares it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions
            .iter()
            .find(|rule| rule.on == *event)
            .map(|rule| &rule.to)
    }

    /// Whether this state declares a rule for `event`.
    pub fn handles(&self, event: &E) -> bool {
        self.target(event).is_some()
    }

    /// Events declared on this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.transitions.iter().map(|rule| &rule.on)
    }
}

/// Complete machine configuration: the initial state plus the state table.
///
/// The configuration is owned by the machine once construction succeeds and
/// is immutable from then on. Neither `initial` nor any transition target is
/// checked against the table at construction; an undeclared identifier only
/// surfaces as an error when a transition into it is attempted.
///
/// # Example
///
/// ```rust
/// use retrace::{MachineConfig, StateDef, Transition};
///
/// let config: MachineConfig<String, String> = MachineConfig {
///     initial: "idle".to_string(),
///     states: vec![
///         StateDef {
///             id: "idle".to_string(),
///             transitions: vec![Transition {
///                 on: "start".to_string(),
///                 to: "busy".to_string(),
///             }],
///         },
///         StateDef {
///             id: "busy".to_string(),
///             transitions: vec![],
///         },
///     ],
/// };
///
/// assert!(config.declares(&"busy".to_string()));
/// let idle = config.state_def(&"idle".to_string()).unwrap();
/// assert_eq!(idle.target(&"start".to_string()), Some(&"busy".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: Id, E: Id> {
    /// Starting state of the machine
    pub initial: S,
    /// Declared states, declaration order
    pub states: Vec<StateDef<S, E>>,
}

impl<S: Id, E: Id> MachineConfig<S, E> {
    /// Definition of the state `id`, if declared.
    pub fn state_def(&self, id: &S) -> Option<&StateDef<S, E>> {
        self.states.iter().find(|def| def.id == *id)
    }

    /// Whether `id` names a declared state.
    pub fn declares(&self, id: &S) -> bool {
        self.state_def(id).is_some()
    }

    /// Declared state identifiers, in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> {
        self.states.iter().map(|def| &def.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition_table;

    fn lamp() -> MachineConfig<String, String> {
        transition_table! {
            initial: "off";
            "off" => { "turn_on" => "on" },
            "on" => { "turn_off" => "off", "overload" => "broken" },
            "broken" => {},
        }
    }

    #[test]
    fn state_def_finds_declared_states() {
        let config = lamp();
        assert!(config.state_def(&"on".to_string()).is_some());
        assert!(config.state_def(&"missing".to_string()).is_none());
    }

    #[test]
    fn declares_matches_state_table() {
        let config = lamp();
        assert!(config.declares(&"off".to_string()));
        assert!(config.declares(&"broken".to_string()));
        assert!(!config.declares(&"exploded".to_string()));
    }

    #[test]
    fn state_ids_preserve_declaration_order() {
        let config = lamp();
        let ids: Vec<&String> = config.state_ids().collect();
        assert_eq!(ids, ["off", "on", "broken"]);
    }

    #[test]
    fn target_resolves_declared_events() {
        let config = lamp();
        let on = config.state_def(&"on".to_string()).unwrap();
        assert_eq!(on.target(&"overload".to_string()), Some(&"broken".to_string()));
        assert_eq!(on.target(&"turn_on".to_string()), None);
    }

    #[test]
    fn handles_reports_declared_events_only() {
        let config = lamp();
        let off = config.state_def(&"off".to_string()).unwrap();
        assert!(off.handles(&"turn_on".to_string()));
        assert!(!off.handles(&"turn_off".to_string()));
    }

    #[test]
    fn events_preserve_declaration_order() {
        let config = lamp();
        let on = config.state_def(&"on".to_string()).unwrap();
        let events: Vec<&String> = on.events().collect();
        assert_eq!(events, ["turn_off", "overload"]);
    }

    #[test]
    fn first_matching_rule_wins() {
        let config: MachineConfig<String, String> = MachineConfig {
            initial: "a".to_string(),
            states: vec![StateDef {
                id: "a".to_string(),
                transitions: vec![
                    Transition {
                        on: "go".to_string(),
                        to: "b".to_string(),
                    },
                    Transition {
                        on: "go".to_string(),
                        to: "c".to_string(),
                    },
                ],
            }],
        };
        let a = config.state_def(&"a".to_string()).unwrap();
        assert_eq!(a.target(&"go".to_string()), Some(&"b".to_string()));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = lamp();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MachineConfig<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
