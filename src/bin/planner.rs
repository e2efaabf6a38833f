use clap::Parser;
use groundplan::config::SearchConfig;
use groundplan::error::PlanningError;
use groundplan::search::{
    search_engines::{SearchBound, SearchEngineName, SearchResult},
    solve_task, Task, Verbosity,
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

const EXIT_MALFORMED_INPUT: u8 = 3;
const EXIT_INTERNAL_ERROR: u8 = 4;

#[derive(Parser)]
#[command(version)]
/// Ground a STRIPS domain and problem and search for a shortest plan.
///
/// Exits with 0 if a plan was found, 1 if the problem is provably
/// unsolvable, 2 if a search bound was hit first and 3 on malformed or
/// unreadable input. A plan that cannot be written to `--output` exits with 4.
struct Cli {
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(
        help = "A TOML search configuration; command line flags take precedence",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: bfs]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        help = "Worker threads for the parallel engine [default: available parallelism]",
        short = 'j',
        long = "workers",
        id = "WORKERS"
    )]
    workers: Option<usize>,
    #[arg(help = "Maximum number of node expansions", long = "max-expansions", id = "EXPANSIONS")]
    max_expansions: Option<usize>,
    #[arg(help = "Maximum number of frontier states", long = "max-frontier", id = "FRONTIER")]
    max_frontier: Option<usize>,
    #[arg(
        help = "Wall-clock limit for the search, e.g. 30s or 5m",
        long = "time-limit",
        id = "DURATION",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(help = "Also write the plan to this file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig, PlanningError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path)?,
            None => SearchConfig::default(),
        };
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
        let flags = SearchBound {
            max_expansions: self.max_expansions,
            max_frontier: self.max_frontier,
            time_limit: self.time_limit,
        };
        config.bound = flags.or(config.bound);
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(&cli) {
        Ok(result) => ExitCode::from(result.exit_code()),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            if e.is_malformed_input() {
                ExitCode::from(EXIT_MALFORMED_INPUT)
            } else {
                ExitCode::from(EXIT_INTERNAL_ERROR)
            }
        }
    }
}

fn plan(cli: &Cli) -> Result<SearchResult, PlanningError> {
    let config = cli.search_config()?;
    info!(engine = ?config.engine, workers = config.workers());
    let task = Task::from_path(&cli.domain, &cli.problem)?;

    let result = solve_task(&task, &config)?;
    match &result {
        SearchResult::Success(plan) => {
            info!("plan found");
            info!(plan_length = plan.len());
            let text = plan.to_string(&task);
            if !text.is_empty() {
                println!("{}", text);
            }
            println!("; cost = {} (unit cost)", plan.len());

            if let Some(path) = &cli.plan {
                plan.write_to(path, &task)?;
            }
        }
        SearchResult::Exhausted => {
            info!("no plan found");
            println!("; no plan exists: {}", result);
        }
        SearchResult::BoundExceeded(_) => {
            info!("no plan found");
            println!("; search inconclusive: {}", result);
        }
    }
    Ok(result)
}
