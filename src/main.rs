use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod error;
mod exits;
mod notify;
mod pass;
mod terminal;
mod tui;

use pass::Config;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    init_logger();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => match tui::run(Config::default()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                terminal::reset_terminal();
                eprintln!("{}Terminal error: {e}{}", terminal::RED, terminal::RESET);
                ExitCode::FAILURE
            }
        },
        _ => cli::run(args),
    }
}

/// Logs go to stderr; the default filter stays quiet so the form is not overdrawn.
fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .try_init();
}
