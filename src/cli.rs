//! Command-line front end.
//!
//! Reads a hand file, resolves the winner and writes the result line to the
//! output file. Nothing is written unless the whole input is valid.

use core::fmt::Display;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::InputError;
use crate::input::parse_players;
use crate::resolver::resolve;
use crate::result::Outcome;

/// Exit code for a successful run.
pub const SUCCESS: i32 = 0;
/// Exit code for any failed run.
pub const ERROR: i32 = 2;

const DEFAULT_FILTER: &str = "fivecard=warn";
const VERBOSE_FILTER: &str = "fivecard=debug";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fivecard",
    version,
    about = "Picks the winner of a five-player card game"
)]
pub struct Args {
    /// Hand file, one `Name:card,card,card,card,card` line per player.
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,
    /// File that receives the result line.
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,
    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors from a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The output file could not be written.
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The input file is malformed.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Runs the command line and returns the process exit code.
///
/// Usage errors go to `err` and help or version text goes to `out`. No file
/// is touched when the arguments are invalid.
///
/// # Example
///
/// ```no_run
/// use std::io;
/// let args = ["fivecard", "--in", "hands.txt", "--out", "winner.txt"];
/// let code = fivecard::cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, fivecard::cli::SUCCESS);
/// ```
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{e}");
                    SUCCESS
                }
                _ => {
                    let _ = write!(err, "{e}");
                    ERROR
                }
            };
        }
    };

    init_logging(args.verbose);

    match run_files(&args.input, &args.output) {
        Ok(outcome) => {
            info!(result = %outcome, output = %args.output.display(), "wrote result");
            SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run failed");
            report(err, &e);
            ERROR
        }
    }
}

/// Resolves the game in `input` and writes the result line to `output`.
///
/// The output file is only created once a result exists.
///
/// # Errors
///
/// Returns [`CliError::Read`] or [`CliError::Write`] for I/O failures and
/// [`CliError::Input`] for malformed input.
pub fn run_files(input: &Path, output: &Path) -> Result<Outcome, CliError> {
    let text = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let players = parse_players(&text)?;
    let outcome = resolve(&players);

    fs::write(output, format!("{outcome}\n")).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(outcome)
}

fn report(err: &mut dyn Write, message: &dyn Display) {
    let _ = writeln!(err, "error: {message}");
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over
/// `verbose`; a second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
