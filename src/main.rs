use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cpu_sched::config::{OutputFormat, RunConfig, DEFAULT_INPUT_PATH};
use cpu_sched::runner;
use cpu_sched::scheduler::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "cpu-sched")]
#[command(version)]
#[command(about = "Simulate single-CPU process scheduling and report per-process and system metrics")]
struct Args {
    /// Tab-separated workload file (header line, then "arrival<TAB>burst" rows)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Scheduling discipline to simulate
    #[arg(long, short = 'a', value_enum, default_value = "fifo")]
    algorithm: AlgorithmChoice,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmChoice {
    /// First come, first served
    Fifo,
    /// Non-preemptive shortest job first
    Sjf,
    /// Every discipline, followed by a comparison summary
    All,
}

impl AlgorithmChoice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Fifo => vec![Algorithm::Fifo],
            AlgorithmChoice::Sjf => vec![Algorithm::Sjf],
            AlgorithmChoice::All => Algorithm::all(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RunConfig::default()
        .with_input_path(args.input)
        .with_algorithms(args.algorithm.algorithms())
        .with_output(args.format);

    tracing::debug!(?config, "Starting");

    match runner::execute(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
