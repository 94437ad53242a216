use ui::SessionIntent;

/// A line typed by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Intent(SessionIntent),
    NextStep,
    Help,
    Quit,
}

/// Parse one input line. Options are entered 1-based (`1`) or by letter (`a`).
pub fn parse(line: &str) -> Option<Command> {
    let word = line.trim().to_ascii_lowercase();
    let command = match word.as_str() {
        "start" => Command::Intent(SessionIntent::StartInstructions),
        "begin" => Command::Intent(SessionIntent::BeginAssessment),
        "check" => Command::Intent(SessionIntent::CheckAnswer),
        "similar" | "try" => Command::Intent(SessionIntent::TrySimilar),
        "next" | "continue" => Command::Intent(SessionIntent::Continue),
        "retake" => Command::Intent(SessionIntent::Retake),
        "step" => Command::NextStep,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return parse_option(other)
                .map(|index| Command::Intent(SessionIntent::SelectOption(index)));
        }
    };
    Some(command)
}

fn parse_option(word: &str) -> Option<usize> {
    if let Ok(number) = word.parse::<usize>() {
        return number.checked_sub(1);
    }
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(letter @ 'a'..='z'), None) => Some(usize::from(letter as u8 - b'a')),
        _ => None,
    }
}

pub fn print_help() {
    println!("commands:");
    println!("  start     show the instructions");
    println!("  begin     start the assessment");
    println!("  1..n|a..  select an option");
    println!("  check     check the selected answer");
    println!("  step      next learning-mode step");
    println!("  similar   try a similar question after a miss");
    println!("  next      continue");
    println!("  retake    start over");
    println!("  quit      exit");
}
