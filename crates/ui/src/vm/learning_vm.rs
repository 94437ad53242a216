use aptitude_core::model::{LearningStep, Question};

/// Step cursor for the learning-mode walk-through of a missed question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningWalkthrough {
    total_steps: usize,
    current_step: usize,
    completed: bool,
}

impl LearningWalkthrough {
    /// A question without steps starts out completed.
    #[must_use]
    pub fn new(question: &Question) -> Self {
        let total_steps = question.steps().len();
        Self {
            total_steps,
            current_step: 0,
            completed: total_steps == 0,
        }
    }

    /// Advance one step; stepping past the last one completes the walk-through.
    pub fn next_step(&mut self) {
        if self.current_step + 1 < self.total_steps {
            self.current_step += 1;
        } else {
            self.completed = true;
        }
    }

    #[must_use]
    pub fn current<'q>(&self, question: &'q Question) -> Option<&'q LearningStep> {
        question.steps().get(self.current_step)
    }

    #[must_use]
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.current_step + 1, self.total_steps)
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
