use aptitude_core::model::{AssessmentSettings, Category, LearningEfficiencyMode};
use aptitude_core::time::fixed_clock;
use services::{Feedback, IgnoreReason, Phase, SessionController, Transition};

/// Correct option per question of the built-in bank.
const CORRECT: [usize; 8] = [1, 3, 1, 1, 1, 2, 1, 2];

fn session() -> SessionController {
    SessionController::builtin(AssessmentSettings::default(), fixed_clock()).unwrap()
}

fn begin(session: &mut SessionController) {
    assert!(session.start_instructions().is_applied());
    assert!(session.begin_assessment().is_applied());
}

fn answer(session: &mut SessionController, option: usize) {
    assert!(session.select_option(option).is_applied());
    assert!(session.check_answer().is_applied());
}

fn wrong(correct: usize) -> usize {
    (correct + 1) % 4
}

#[test]
fn all_correct_run_scores_full_marks() {
    let mut session = session();
    begin(&mut session);

    for (index, &correct) in CORRECT.iter().enumerate() {
        assert_eq!(session.current_index(), index);
        let _ = session.tick();
        answer(&mut session, correct);
        assert_eq!(session.feedback(), Feedback::Correct);
        assert!(session.proceed().is_applied());
    }

    assert_eq!(session.phase(), Phase::Summary);
    let expected: Vec<usize> = (1..=8).collect();
    assert_eq!(
        session.completed_numbers().iter().copied().collect::<Vec<_>>(),
        expected
    );

    let result = session.result().unwrap();
    assert_eq!(result.total_questions(), 8);
    assert_eq!(result.correct_answers(), 8);
    assert_eq!(result.accuracy_percent(), 100);
    assert_eq!(result.learning_efficiency(), 95);
    assert_eq!(result.total_time_secs(), 8);
    assert_eq!(session.answers().len(), 8);
    for category in Category::ALL {
        let score = result.category_score(category).unwrap();
        assert_eq!((score.correct, score.total, score.percentage), (2, 2, 100));
    }
    assert_eq!(
        result.strengths(),
        ["Quantitative", "Logical Reasoning", "Verbal Ability", "Analytical"]
    );
    assert_eq!(result.improvements(), ["Keep practicing all areas"]);
}

#[test]
fn wrong_first_answer_is_logged_as_incorrect() {
    let mut session = session();
    begin(&mut session);

    answer(&mut session, 2);

    assert_eq!(session.feedback(), Feedback::Incorrect);
    let logged = &session.answers()[0];
    assert_eq!(logged.question_id().as_str(), "q1");
    assert_eq!(logged.selected_index(), 2);
    assert!(!logged.is_correct());
    assert!(session.completed_numbers().is_empty());
}

#[test]
fn reinforcement_keeps_the_bank_pointer() {
    let mut session = session();
    begin(&mut session);
    answer(&mut session, 2);

    assert!(session.try_reinforcement().is_applied());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_question.unwrap().id().as_str(), "q1r");
    assert!(snapshot.is_reinforcement_active);
    assert_eq!(snapshot.feedback, Feedback::None);
    assert_eq!(snapshot.selected_option, None);
    assert_eq!(snapshot.progress.current, 1);
    assert_eq!(session.current_index(), 0);
}

#[test]
fn selection_is_locked_after_check() {
    let mut session = session();
    begin(&mut session);
    answer(&mut session, 1);

    assert_eq!(
        session.select_option(3),
        Transition::Ignored(IgnoreReason::AlreadyChecked)
    );
    assert_eq!(session.selected_option(), Some(1));
}

#[test]
fn double_check_appends_once() {
    let mut session = session();
    begin(&mut session);
    answer(&mut session, 0);

    assert_eq!(
        session.check_answer(),
        Transition::Ignored(IgnoreReason::AlreadyChecked)
    );
    assert_eq!(session.answers().len(), 1);
    assert_eq!(session.feedback(), Feedback::Incorrect);
}

#[test]
fn reinforcement_detours_add_log_entries_but_not_score() {
    let mut session = session();
    begin(&mut session);

    for (index, &correct) in CORRECT.iter().enumerate() {
        if index < 2 {
            answer(&mut session, wrong(correct));
            assert!(session.try_reinforcement().is_applied());
            let reinforcement_correct = session.active_question().correct_answer_index();
            answer(&mut session, reinforcement_correct);
        } else {
            answer(&mut session, correct);
        }
        let _ = session.proceed();
    }

    let result = session.result().unwrap();
    assert_eq!(session.answers().len(), 10);
    assert_eq!(result.correct_answers(), 6);
    assert_eq!(result.accuracy_percent(), 75);
    assert_eq!(result.reinforcement_attempts(), 2);
    assert_eq!(result.recovered_questions(), 2);

    let quantitative = result.category_score(Category::Quantitative).unwrap();
    assert_eq!(quantitative.percentage, 50);
    let logical = result.category_score(Category::Logical).unwrap();
    assert_eq!(logical.percentage, 50);
    assert_eq!(result.strengths(), ["Verbal Ability", "Analytical"]);
    assert_eq!(result.improvements(), ["Keep practicing all areas"]);
}

#[test]
fn phases_visit_in_order_and_retake_returns_to_welcome() {
    let mut session = session();
    let mut visited = vec![session.phase()];

    let _ = session.start_instructions();
    visited.push(session.phase());
    let _ = session.begin_assessment();
    visited.push(session.phase());
    for &correct in &CORRECT {
        answer(&mut session, wrong(correct));
        let _ = session.proceed();
    }
    visited.push(session.phase());

    assert_eq!(
        visited,
        [Phase::Welcome, Phase::Instructions, Phase::Assessment, Phase::Summary]
    );
    assert_eq!(
        session.start_instructions(),
        Transition::Ignored(IgnoreReason::WrongPhase {
            expected: Phase::Welcome,
            actual: Phase::Summary,
        })
    );

    let result = session.result().unwrap();
    assert_eq!(result.correct_answers(), 0);
    assert_eq!(result.improvements().len(), 4);
    assert_eq!(result.strengths(), ["Completing the assessment"]);

    assert!(session.retake().is_applied());
    assert_eq!(session.phase(), Phase::Welcome);
    assert!(session.result().is_none());
}

#[test]
fn replaying_after_retake_reproduces_the_result() {
    let script: Vec<(u32, usize)> = CORRECT
        .iter()
        .enumerate()
        .map(|(i, &correct)| {
            let option = if i % 3 == 0 { wrong(correct) } else { correct };
            (u32::try_from(i).unwrap() * 5 + 3, option)
        })
        .collect();

    let run = |session: &mut SessionController| {
        begin(session);
        for &(elapsed, option) in &script {
            let _ = session.advance_clock(elapsed);
            answer(session, option);
            let _ = session.proceed();
        }
        (session.result().unwrap().clone(), session.completed_at())
    };

    let mut session = session();
    let (first, first_completed) = run(&mut session);
    let _ = session.retake();
    let (second, second_completed) = run(&mut session);

    assert_eq!(first, second);
    assert_eq!(first_completed, second_completed);
}

#[test]
fn replaying_an_all_correct_run_gives_an_equal_result() {
    let run = |session: &mut SessionController| {
        begin(session);
        for &correct in &CORRECT {
            let _ = session.tick();
            answer(session, correct);
            let _ = session.proceed();
        }
        session.result().unwrap().clone()
    };

    let mut session = session();
    let first = run(&mut session);
    assert!(session.retake().is_applied());
    let second = run(&mut session);

    assert_eq!(first, second);
}

#[test]
fn jittered_efficiency_stays_within_bounds_and_is_stable() {
    let settings =
        AssessmentSettings::default().with_efficiency(LearningEfficiencyMode::Jittered);
    let mut session = SessionController::builtin(settings, fixed_clock()).unwrap();
    begin(&mut session);
    for &correct in &CORRECT {
        answer(&mut session, correct);
        let _ = session.proceed();
    }

    let efficiency = session.result().unwrap().learning_efficiency();
    assert!((90..=100).contains(&efficiency));
    assert_eq!(session.result().unwrap().learning_efficiency(), efficiency);
}
