use services::{Feedback, Phase, SessionController, Transition};

use crate::vm::learning_vm::LearningWalkthrough;
use crate::vm::screen::{Screen, describe};

/// User intents forwarded from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    StartInstructions,
    BeginAssessment,
    SelectOption(usize),
    CheckAnswer,
    TrySimilar,
    Continue,
    Retake,
    Tick,
}

/// Forward one intent to the controller.
pub fn dispatch(session: &mut SessionController, intent: SessionIntent) -> Transition {
    match intent {
        SessionIntent::StartInstructions => session.start_instructions(),
        SessionIntent::BeginAssessment => session.begin_assessment(),
        SessionIntent::SelectOption(index) => session.select_option(index),
        SessionIntent::CheckAnswer => session.check_answer(),
        SessionIntent::TrySimilar => session.try_reinforcement(),
        SessionIntent::Continue => session.proceed(),
        SessionIntent::Retake => session.retake(),
        SessionIntent::Tick => session.tick(),
    }
}

/// Session plus the presentation-only learning-mode cursor.
pub struct SessionVm {
    session: SessionController,
    walkthrough: Option<LearningWalkthrough>,
}

impl SessionVm {
    #[must_use]
    pub fn new(session: SessionController) -> Self {
        Self {
            session,
            walkthrough: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        describe(&self.session.snapshot())
    }

    /// Learning-mode cursor; present only while an incorrect answer is shown.
    #[must_use]
    pub fn walkthrough(&self) -> Option<&LearningWalkthrough> {
        self.walkthrough.as_ref()
    }

    pub fn next_learning_step(&mut self) {
        if let Some(walk) = self.walkthrough.as_mut() {
            walk.next_step();
        }
    }

    pub fn apply(&mut self, intent: SessionIntent) -> Transition {
        let transition = dispatch(&mut self.session, intent);
        if transition.is_applied() && intent != SessionIntent::Tick {
            self.walkthrough = (self.session.feedback() == Feedback::Incorrect)
                .then(|| LearningWalkthrough::new(self.session.active_question()));
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aptitude_core::model::AssessmentSettings;
    use aptitude_core::time::fixed_clock;

    fn vm() -> SessionVm {
        SessionVm::new(
            SessionController::builtin(AssessmentSettings::default(), fixed_clock()).unwrap(),
        )
    }

    #[test]
    fn intents_drive_phases() {
        let mut vm = vm();
        assert!(vm.apply(SessionIntent::StartInstructions).is_applied());
        assert!(vm.apply(SessionIntent::BeginAssessment).is_applied());
        assert_eq!(vm.phase(), Phase::Assessment);
        assert!(vm.apply(SessionIntent::Tick).is_applied());
        assert_eq!(vm.session().elapsed_secs(), 1);
    }

    #[test]
    fn walkthrough_follows_incorrect_feedback() {
        let mut vm = vm();
        let _ = vm.apply(SessionIntent::StartInstructions);
        let _ = vm.apply(SessionIntent::BeginAssessment);
        assert!(vm.walkthrough().is_none());

        let _ = vm.apply(SessionIntent::SelectOption(0));
        let _ = vm.apply(SessionIntent::CheckAnswer);
        assert_eq!(vm.walkthrough().unwrap().current_step(), 0);

        vm.next_learning_step();
        assert_eq!(vm.walkthrough().unwrap().current_step(), 1);
        let _ = vm.apply(SessionIntent::Tick);
        assert_eq!(vm.walkthrough().unwrap().current_step(), 1);

        let _ = vm.apply(SessionIntent::TrySimilar);
        assert!(vm.walkthrough().is_none());
    }

    #[test]
    fn ignored_intent_keeps_screen() {
        let mut vm = vm();
        let before = vm.screen();
        assert!(!vm.apply(SessionIntent::CheckAnswer).is_applied());
        assert_eq!(vm.screen(), before);
    }
}
