//! Macros for ergonomic automaton construction.

/// Build a `Vec<Transition>` from `(source, input, destination)` rows.
///
/// States are cloned, so the same state bindings can appear in many rows.
///
/// # Example
///
/// ```
/// use dfa_engine::core::State;
/// use dfa_engine::transitions;
///
/// let s0 = State::accepting("S0", "0");
/// let s1 = State::accepting("S1", "1");
///
/// let table = transitions![
///     (s0, "0", s0),
///     (s0, "1", s1),
///     (s1, "0", s1),
///     (s1, "1", s0),
/// ];
///
/// assert_eq!(table.len(), 4);
/// assert_eq!(table[1].destination().name(), "S1");
/// ```
#[macro_export]
macro_rules! transitions {
    ($(($from:expr, $input:expr, $to:expr)),* $(,)?) => {
        vec![
            $(
                $crate::core::Transition::new(
                    ::std::clone::Clone::clone(&$from),
                    $input,
                    ::std::clone::Clone::clone(&$to),
                )
            ),*
        ]
    };
}
