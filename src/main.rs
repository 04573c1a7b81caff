use std::process::ExitCode;

use shapegen::{cli, logger};

fn main() -> ExitCode {
    // Session log (overwrites the previous run's log)
    logger::init("shape");
    cli::main_with_args(std::env::args_os())
}
