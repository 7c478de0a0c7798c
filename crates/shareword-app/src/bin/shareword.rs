//! Command-line crossword editor.

use std::process::ExitCode;

use clap::Parser as _;
use shareword_app::Cli;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match shareword_app::run(Cli::parse()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
