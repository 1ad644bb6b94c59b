/// Upper bound on the number of turns in a solution script.
pub const MAX_OPERATION_TURN: usize = 100_000;

/// Options for a validation run.
///
/// # Examples
///
/// ```
/// use takoyaki_checker::{CheckOptions, MAX_OPERATION_TURN};
///
/// assert_eq!(CheckOptions::default().max_operation_turns, MAX_OPERATION_TURN);
///
/// let options = CheckOptions::default().max_operation_turns(10);
/// assert_eq!(options.max_operation_turns, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Largest accepted number of turns. Checked once the script ends.
    pub max_operation_turns: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_operation_turns: MAX_OPERATION_TURN,
        }
    }
}

impl CheckOptions {
    /// Sets the largest accepted number of turns.
    #[must_use]
    pub fn max_operation_turns(mut self, max_operation_turns: usize) -> Self {
        self.max_operation_turns = max_operation_turns;
        self
    }
}
