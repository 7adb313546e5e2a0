//! Macros for declaring transition tables.

/// Declare a whole [`MachineConfig`](crate::core::MachineConfig) as a
/// table literal.
///
/// Each entry maps a state to its event-to-target rules; states and rules
/// keep their written order. Identifiers go through `Into`, so a `String`
/// table can be written with bare string literals. The macro builds plain
/// data and cannot fail; like every other construction path, it does not
/// check that the initial state or any target resolves against the table.
///
/// # Example
///
/// ```rust
/// use retrace::{transition_table, MachineConfig};
///
/// let config: MachineConfig<String, String> = transition_table! {
///     initial: "solid";
///     "solid" => { "heat" => "liquid" },
///     "liquid" => { "heat" => "gas", "cool" => "solid" },
///     "gas" => { "cool" => "liquid" },
/// };
///
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        initial: $initial:expr;
        $( $state:expr => { $( $event:expr => $target:expr ),* $(,)? } ),* $(,)?
    ) => {
        $crate::core::MachineConfig {
            initial: ::core::convert::Into::into($initial),
            states: ::std::vec![
                $(
                    $crate::core::StateDef {
                        id: ::core::convert::Into::into($state),
                        transitions: ::std::vec![
                            $(
                                $crate::core::Transition {
                                    on: ::core::convert::Into::into($event),
                                    to: ::core::convert::Into::into($target),
                                }
                            ),*
                        ],
                    }
                ),*
            ],
        }
    };
}
