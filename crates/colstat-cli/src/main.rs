//! colstat CLI: compute a column statistic over one or more CSV files.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use colstat_core::RunConfig;
use colstat_exec::{Engine, ExecError};
use tracing_subscriber::EnvFilter;

/// Long flags that may also be spelled with a single dash (`-op sum`).
const SINGLE_DASH_FLAGS: &[&str] = &["op", "col", "max-parallel", "verbose"];

#[derive(Parser, Debug)]
#[command(name = "colstat")]
#[command(about = "Sum or average a CSV column across files, one worker per file", long_about = None)]
struct Cli {
    /// CSV files to process (each must start with a header row)
    files: Vec<PathBuf>,

    /// Operation to be executed: sum or avg
    #[arg(long = "op", default_value = "sum")]
    op: String,

    /// CSV column on which to execute the operation (1-based)
    #[arg(long = "col", default_value_t = 1, allow_negative_numbers = true)]
    col: i64,

    /// Maximum files parsed at once, 0 for one per file (overrides config)
    #[arg(long)]
    max_parallel: Option<usize>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    let mut config = RunConfig::from_env();
    apply_cli_overrides(&mut config, &cli);

    if let Err(e) = execute(&cli, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn execute(cli: &Cli, config: RunConfig) -> Result<(), ExecError> {
    let engine = Engine::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = engine.run(cli.files.as_slice(), &cli.op, cli.col, &mut out).await?;
    out.flush().map_err(ExecError::Output)?;

    match summary.to_json() {
        Ok(json) => tracing::debug!(summary = %json, "run summary"),
        Err(e) => tracing::debug!(error = %e, "run summary unavailable"),
    }
    Ok(())
}

/// Rewrite single-dash long flags (`-op`, `-col=3`) to clap's `--` form.
/// Everything after a bare `--` is left untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let flag = name.split('=').next().unwrap_or(name);
            SINGLE_DASH_FLAGS
                .contains(&flag)
                .then(|| OsString::from(format!("-{s}")))
        });
        if arg == "--" {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn apply_cli_overrides(cfg: &mut RunConfig, cli: &Cli) {
    if let Some(n) = cli.max_parallel {
        cfg.max_parallel_files = if n == 0 { None } else { Some(n) };
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .init();

    tracing::trace!("args: {:?}", std::env::args().collect::<Vec<_>>());
}
