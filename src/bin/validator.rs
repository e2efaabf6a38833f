use clap::Parser;
use groundplan::error::PlanningError;
use groundplan::search::{validate, Plan, Task, Verbosity};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

const EXIT_MALFORMED_INPUT: u8 = 3;

#[derive(Parser)]
#[command(version)]
/// Check a plan against a PDDL domain and problem.
///
/// Exits with 0 if the plan is valid, 1 if a precondition is violated or the
/// goal is not reached and 3 on malformed input.
struct Cli {
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let (task, plan) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_MALFORMED_INPUT);
        }
    };

    match validate(&task.initial_state, &plan, &task.goal) {
        Ok(final_state) => {
            info!(final_state = %final_state.to_string(&task));
            println!("plan is valid ({} steps)", plan.len());
            ExitCode::SUCCESS
        }
        Err(failure) => {
            println!("plan is invalid: {}", failure.describe(&task));
            ExitCode::FAILURE
        }
    }
}

fn load(cli: &Cli) -> Result<(Task, Plan), PlanningError> {
    let task = Task::from_path(&cli.domain, &cli.problem)?;
    let plan = Plan::from_path(&cli.plan, &task)?;
    Ok((task, plan))
}
