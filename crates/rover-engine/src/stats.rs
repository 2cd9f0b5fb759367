//! Per-run counters for the navigation engine.

/// Counters collected while interpreting one command string.
///
/// A rejected mission reports all-zero stats since no command runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationStats {
    /// Commands interpreted, including a move that halted the run.
    pub commands_processed: usize,
    /// Moves committed.
    pub moves: usize,
    /// Left turns applied.
    pub left_turns: usize,
    /// Right turns applied.
    pub right_turns: usize,
    /// Character index of the blocked move, if the run halted.
    pub halted_at: Option<usize>,
}

impl NavigationStats {
    /// Total turns applied in either sense.
    pub fn turns(&self) -> usize {
        self.left_turns + self.right_turns
    }
}
