//! Fluent builder for machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Id, MachineConfig, StateDef, Transition};

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// States appear in the built table in first-mention order, whether they
/// were introduced by [`state`](ConfigBuilder::state) or as the source of a
/// [`transition`](ConfigBuilder::transition). Parameters are `impl Into` so
/// string tables can be written with bare literals.
///
/// # Example
///
/// ```rust
/// use retrace::{ConfigBuilder, MachineConfig};
///
/// let config: MachineConfig<String, String> = ConfigBuilder::new()
///     .initial("off")
///     .transition("off", "turn_on", "on")
///     .transition("on", "turn_off", "off")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.states.len(), 2);
/// ```
pub struct ConfigBuilder<S: Id, E: Id> {
    initial: Option<S>,
    states: Vec<StateDef<S, E>>,
}

impl<S: Id, E: Id> ConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<S>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Declare a state with no transitions. Idempotent: re-declaring an
    /// existing state is a no-op.
    pub fn state(mut self, id: impl Into<S>) -> Self {
        self.ensure_state(id.into());
        self
    }

    /// Declare a transition rule, introducing the source state if it has
    /// not been mentioned yet.
    pub fn transition(mut self, from: impl Into<S>, on: impl Into<E>, to: impl Into<S>) -> Self {
        let index = self.ensure_state(from.into());
        self.states[index].transitions.push(Transition {
            on: on.into(),
            to: to.into(),
        });
        self
    }

    /// Build the configuration.
    ///
    /// Fails when no initial state was named, when no states were declared,
    /// or when some state declares the same event twice. Whether the
    /// declared identifiers resolve against the table is NOT checked; that
    /// stays lazy, matching the machine's own validation.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError<S, E>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        for def in &self.states {
            for (index, rule) in def.transitions.iter().enumerate() {
                if def.transitions[..index].iter().any(|prior| prior.on == rule.on) {
                    return Err(BuildError::DuplicateTransition {
                        state: def.id.clone(),
                        event: rule.on.clone(),
                    });
                }
            }
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    fn ensure_state(&mut self, id: S) -> usize {
        match self.states.iter().position(|def| def.id == id) {
            Some(index) => index,
            None => {
                self.states.push(StateDef {
                    id,
                    transitions: Vec::new(),
                });
                self.states.len() - 1
            }
        }
    }
}

impl<S: Id, E: Id> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition_table;

    #[test]
    fn builder_requires_initial_state() {
        let result = ConfigBuilder::<String, String>::new()
            .state("off")
            .build();
        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn builder_requires_at_least_one_state() {
        let result = ConfigBuilder::<String, String>::new()
            .initial("off")
            .build();
        assert_eq!(result.unwrap_err(), BuildError::NoStates);
    }

    #[test]
    fn builder_rejects_duplicate_events_on_one_state() {
        let result = ConfigBuilder::<String, String>::new()
            .initial("off")
            .transition("off", "toggle", "on")
            .transition("off", "toggle", "broken")
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                state: "off".to_string(),
                event: "toggle".to_string(),
            }
        );
    }

    #[test]
    fn same_event_on_different_states_is_fine() {
        let result = ConfigBuilder::<String, String>::new()
            .initial("off")
            .transition("off", "toggle", "on")
            .transition("on", "toggle", "off")
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn states_appear_in_first_mention_order() {
        let config = ConfigBuilder::<String, String>::new()
            .initial("a")
            .state("a")
            .transition("b", "go", "c")
            .state("c")
            .transition("a", "jump", "b")
            .build()
            .unwrap();

        let ids: Vec<&String> = config.state_ids().collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn redeclaring_a_state_is_a_no_op() {
        let config = ConfigBuilder::<String, String>::new()
            .initial("a")
            .transition("a", "go", "b")
            .state("a")
            .build()
            .unwrap();

        assert_eq!(config.states.len(), 1);
        assert_eq!(config.states[0].transitions.len(), 1);
    }

    #[test]
    fn unresolved_identifiers_are_accepted() {
        let config = ConfigBuilder::<String, String>::new()
            .initial("nowhere")
            .transition("off", "turn_on", "also_nowhere")
            .build()
            .unwrap();

        assert!(!config.declares(&config.initial));
    }

    #[test]
    fn builder_matches_equivalent_table_literal() {
        let built = ConfigBuilder::<String, String>::new()
            .initial("off")
            .transition("off", "turn_on", "on")
            .transition("on", "turn_off", "off")
            .build()
            .unwrap();

        let literal: MachineConfig<String, String> = transition_table! {
            initial: "off";
            "off" => { "turn_on" => "on" },
            "on" => { "turn_off" => "off" },
        };

        assert_eq!(built, literal);
    }
}
