//! Command-line checker for takoyaki solutions.
//!
//! # Usage
//!
//! Check a single problem/solution pair:
//!
//! ```sh
//! takoyaki-check pair inputs/0000.txt outputs/0000.txt
//! ```
//!
//! Check every file in `inputs/` against the same-named file in `outputs/`,
//! stopping at the first failure:
//!
//! ```sh
//! takoyaki-check batch --inputs inputs --outputs outputs
//! ```
//!
//! Set `RUST_LOG=debug` to see the board when a pick fails, or
//! `RUST_LOG=trace` to follow every turn.

use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use takoyaki_checker::{CheckError, CheckOptions, CheckReport, MAX_OPERATION_TURN};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Largest accepted number of turns per solution.
    #[arg(long, value_name = "COUNT", default_value_t = MAX_OPERATION_TURN, global = true)]
    max_turns: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one solution against one problem.
    Pair {
        /// Problem description file.
        problem: PathBuf,
        /// Candidate solution file.
        solution: PathBuf,
    },
    /// Check every problem in a directory against its solution.
    Batch {
        /// Directory of problem descriptions.
        #[arg(long, value_name = "DIR", default_value = "inputs")]
        inputs: PathBuf,
        /// Directory of candidate solutions, named like the problems.
        #[arg(long, value_name = "DIR", default_value = "outputs")]
        outputs: PathBuf,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to open {}: {source}", path.display())]
    #[from(ignore)]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to list {}: {source}", path.display())]
    #[from(ignore)]
    List { path: PathBuf, source: io::Error },
    #[display("{_0}")]
    Check(CheckError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let options = CheckOptions::default().max_operation_turns(args.max_turns);

    let result = match &args.command {
        Command::Pair { problem, solution } => {
            check_pair(problem, solution, &options).map(|report| print_report(&report))
        }
        Command::Batch { inputs, outputs } => check_batch(inputs, outputs, &options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("An unexpected error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn check_pair(
    problem: &Path,
    solution: &Path,
    options: &CheckOptions,
) -> Result<CheckReport, CliError> {
    let report = takoyaki_checker::check(open(problem)?, open(solution)?, options)?;
    Ok(report)
}

fn check_batch(inputs: &Path, outputs: &Path, options: &CheckOptions) -> Result<(), CliError> {
    let list_error = |source| CliError::List {
        path: inputs.to_owned(),
        source,
    };
    let mut names = fs::read_dir(inputs)
        .map_err(list_error)?
        .map(|entry| entry.map(|entry| entry.file_name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_error)?;
    names.sort();

    for name in &names {
        println!("Checking {}...", name.to_string_lossy());
        let report = check_pair(&inputs.join(name), &outputs.join(name), options)?;
        log::info!(
            "{}: {} turns",
            name.to_string_lossy(),
            report.simulation.turns
        );
    }

    println!("All files processed successfully.");
    Ok(())
}

fn print_report(report: &CheckReport) {
    let simulation = &report.simulation;
    println!("Solution is legal.");
    println!("  Turns: {}", simulation.turns);
    println!("  Final position: {}", simulation.position);
    println!("  Holding: {}", simulation.holding);
    println!("Final board:");
    print!("{}", simulation.board);
}
