use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use aptitude_core::model::{AssessmentSettings, LearningEfficiencyMode};
use bank::QuestionBank;
use services::{Clock, SessionController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use ui::{SessionIntent, SessionVm};

mod commands;
mod render;

use commands::Command;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBankPath { raw: String },
    InvalidEfficiency { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw}"),
            ArgsError::InvalidEfficiency { raw } => write!(
                f,
                "invalid --efficiency value (expected deterministic or jittered): {raw}"
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path.json>] [--efficiency deterministic|jittered]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in 8-question bank, deterministic learning efficiency");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  APTITUDE_BANK, APTITUDE_EFFICIENCY, RUST_LOG");
}

struct Args {
    bank_path: Option<PathBuf>,
    efficiency: LearningEfficiencyMode,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut bank_path = std::env::var("APTITUDE_BANK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut efficiency = match std::env::var("APTITUDE_EFFICIENCY") {
            Ok(raw) => parse_efficiency(raw)?,
            Err(_) => LearningEfficiencyMode::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank_path = Some(PathBuf::from(value));
                }
                "--efficiency" => {
                    efficiency = parse_efficiency(require_value(args, "--efficiency")?)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            bank_path,
            efficiency,
        }))
    }
}

fn parse_efficiency(raw: String) -> Result<LearningEfficiencyMode, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidEfficiency { raw })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("app=info,services=info,bank=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    let bank = match &parsed.bank_path {
        Some(path) => QuestionBank::from_path(path)?,
        None => QuestionBank::builtin()?,
    };
    let settings = AssessmentSettings::default().with_efficiency(parsed.efficiency);
    tracing::info!(questions = bank.len(), efficiency = ?parsed.efficiency, "starting session");

    let mut vm = SessionVm::new(SessionController::new(bank, settings, Clock::default()));
    render::print_screen(&vm);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // The first tick of an interval completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let _ = vm.apply(SessionIntent::Tick);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match commands::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::NextStep) => {
                        vm.next_learning_step();
                        render::print_screen(&vm);
                    }
                    Some(Command::Intent(intent)) => {
                        if let Some(reason) = vm.apply(intent).ignored_reason() {
                            println!("(ignored: {reason})");
                        } else {
                            render::print_screen(&vm);
                        }
                    }
                    Some(Command::Help) => commands::print_help(),
                    None => println!("unknown command; type `help`"),
                }
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
