use std::collections::BTreeSet;

/// Aggregated view of assessment progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the primary question on screen.
    pub current: usize,
    pub total: usize,
    /// 1-based positions answered correctly on the first attempt.
    pub completed: BTreeSet<usize>,
    /// Confirmed checks so far, reinforcement attempts included.
    pub answered: usize,
}

impl SessionProgress {
    #[must_use]
    pub fn is_completed(&self, number: usize) -> bool {
        self.completed.contains(&number)
    }
}
