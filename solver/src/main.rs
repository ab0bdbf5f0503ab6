use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use cfg_if::cfg_if;
use clap::{CommandFactory, Parser};
use shared::{
    errors::{SolverError, SolverResult},
    types::Challenge,
};
use tracing::*;

use crate::{
    config::{load_config_file, OutputFormat, SearchConfig, ThreadCount},
    distributor::Strategy,
    manager::ChallengeRunner,
};

mod config;
mod container;
mod distributor;
mod filter;
mod hash;
mod manager;
mod thread;


cfg_if! {
    if #[cfg(feature = "build-version")] {
        include!(concat!(env!("OUT_DIR"), "/version.rs"));
    } else {
        pub const VERSION: &str = "unknown";
        pub const PROFILE: &str = "unknown";
    }
}

#[derive(Parser, Debug)]
#[command(about = "Find candidates whose SHA-256 prefix matches each challenge", version)]
struct Args {
    #[arg(
        value_name = "THREADS",
        allow_hyphen_values = true,
        help = "Number of worker threads per challenge, 1 to 100"
    )]
    threads: String,

    #[arg(value_name = "CHALLENGES", required = true, help = "16-bit challenge values, solved in order")]
    challenges: Vec<u16>,

    #[arg(long, value_enum, help = "How candidates are distributed to workers")]
    strategy: Option<Strategy>,

    #[arg(long, value_name = "SPACE", help = "Search candidates in [0, SPACE)")]
    space: Option<u64>,

    #[arg(long, help = "Pin each worker thread to a CPU core")]
    pin_cores: bool,

    #[arg(long, value_enum, help = "Result line format")]
    format: Option<OutputFormat>,

    #[arg(long, value_name = "CONFIG_FILE", help = "JSON file with search defaults")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    shared::log::init_log();

    info!("VERSION:{} ({})", VERSION, PROFILE);

    let stdout = io::stdout();
    let code = match run(args, &mut stdout.lock()) {
        Ok(()) => 0,
        Err(err) => report_failure(&err, &mut io::stderr().lock()),
    };
    ExitCode::from(code)
}

/// Print `err` for the user and return the process exit status.
fn report_failure<W: Write>(err: &SolverError, stderr: &mut W) -> u8 {
    if err.is_usage() {
        let _ = writeln!(stderr, "error: {err}\n\n{}", Args::command().render_usage());
    } else {
        error!("{err}");
    }
    err.exit_code()
}

fn resolve_config(args: &Args) -> SolverResult<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => SearchConfig::default(),
    };

    if let Some(space) = args.space {
        config.space = space;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.pin_cores |= args.pin_cores;

    config.validate()?;
    Ok(config)
}

fn run<W: Write>(args: Args, out: &mut W) -> SolverResult<()> {
    // validated before any search starts
    let threads: ThreadCount = args.threads.parse()?;
    let config = resolve_config(&args)?;

    info!(
        "threads: {}, strategy: {:?}, space: {}, pin cores: {}",
        threads.get(),
        config.strategy,
        config.space,
        config.pin_cores
    );

    let runner = ChallengeRunner::new(threads, &config);
    for challenge in args.challenges {
        let report = runner.solve(Challenge::from(challenge))?;
        match config.format {
            OutputFormat::Text => writeln!(out, "{report}")?,
            OutputFormat::Json => writeln!(out, "{}", report.to_json().map_err(io::Error::from)?)?,
        }
        out.flush()?;
    }
    Ok(())
}
