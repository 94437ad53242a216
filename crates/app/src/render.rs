use ui::vm::{FeedbackPanel, OptionState, ProgressSlot, QuestionScreen, SessionSummaryVm};
use ui::{Screen, SessionVm};

pub fn print_screen(vm: &SessionVm) {
    match vm.screen() {
        Screen::Welcome => {
            println!();
            println!("== Aptitude Assessment ==");
            println!("Test your quantitative, logical, verbal and analytical skills.");
            println!("Type `start` to read the instructions.");
        }
        Screen::Instructions => {
            println!();
            println!("== Instructions ==");
            println!("- Pick one option per question, then `check` it.");
            println!("- Missed a question? Walk through the solution with `step`,");
            println!("  and try a similar question with `similar` when offered.");
            println!("- The timer is for your reference only.");
            println!("Type `begin` when ready.");
        }
        Screen::Question(question) => print_question(vm, &question),
        Screen::Summary(summary) => print_summary(&summary),
    }
}

fn print_question(vm: &SessionVm, screen: &QuestionScreen) {
    let slots: String = screen
        .progress
        .slots
        .iter()
        .map(|slot| match slot {
            ProgressSlot::Completed => '●',
            ProgressSlot::Current => '◉',
            ProgressSlot::Pending => '○',
        })
        .collect();

    println!();
    println!(
        "{}  {}  {}% complete  [{}]",
        screen.progress.label, slots, screen.progress.percent, screen.clock_label
    );
    if screen.is_reinforcement {
        println!("Practice question: reinforce your learning");
    }
    println!("{} ({:?})", screen.category_label, screen.difficulty);
    println!("{}", screen.prompt);
    for option in &screen.options {
        let marker = match option.state {
            OptionState::Idle => ' ',
            OptionState::Selected => '>',
            OptionState::Correct => '✓',
            OptionState::Incorrect => '✗',
        };
        println!(" {marker} {}. {}", option.letter, option.text);
    }

    match &screen.feedback {
        None if screen.check_enabled => println!("Type `check` to confirm."),
        None => {}
        Some(FeedbackPanel::Success { explanation }) => {
            println!("Correct! {explanation}");
            println!("Type `next` to continue.");
        }
        Some(FeedbackPanel::LearningMode {
            concept,
            tip,
            explanation,
            correct_option,
            can_try_similar,
        }) => {
            println!("Not quite. The answer is: {correct_option}");
            println!("Concept: {concept}");
            if let Some(walk) = vm.walkthrough() {
                if let Some(step) = walk.current(vm.session().active_question()) {
                    println!("{} {}: {}", walk.step_label(), step.title, step.content);
                }
                if walk.is_completed() {
                    println!("{explanation}");
                    println!("Tip: {tip}");
                }
            }
            if *can_try_similar {
                println!("Type `similar` for a practice question, or `next` to move on.");
            } else {
                println!("Type `step` to walk through the solution, or `next` to move on.");
            }
        }
    }
}

fn print_summary(summary: &SessionSummaryVm) {
    println!();
    println!("== {} {} ==", summary.message.text, summary.message.emoji);
    println!(
        "Score {}  Accuracy {}  Learning efficiency {}  Time {}",
        summary.score_label, summary.accuracy_label, summary.efficiency_label, summary.time_label
    );
    if let Some(recovered) = &summary.recovered_label {
        println!("{recovered}");
    }
    for row in &summary.categories {
        println!("  {:<20} {}", row.label, row.detail);
    }
    println!("Strengths: {}", summary.strengths.join(", "));
    println!("To improve: {}", summary.improvements.join(", "));
    if let Some(completed_at) = &summary.completed_at_str {
        println!("Completed at {completed_at}");
    }
    println!("Type `retake` to start over or `quit` to exit.");
}
