//! `fivecard --in <PATH> --out <PATH>`

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = fivecard::cli::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr());
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
