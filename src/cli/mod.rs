//! Command-line mode.

mod context;
mod flags;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Parse arguments and run. Usage errors exit with status 2.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut context = match Context::new(args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run `passforge --help` for usage.");
            return ExitCode::from(2);
        }
    };

    match context.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Done(code)) => code,
    }
}
