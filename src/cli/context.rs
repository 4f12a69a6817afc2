//! CLI context - bundles flags, session config, and clipboard state.

use std::io::Write;
use std::process::ExitCode;

use zeroize::Zeroizing;

use super::{CliFlags, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::ParseError;
use crate::pass::{self, Config};
use crate::tui::{self, print_help};

/// Early exit with the given status. Not necessarily an error.
#[derive(Debug, PartialEq)]
pub struct Done(pub ExitCode);

/// Application context for CLI mode.
pub struct Context {
    pub config: Config,
    pub flags: CliFlags,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        let config = flags.config();
        Ok(Self {
            config,
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.handle_interactive()?;
        self.open_clipboard()?;
        self.generate_output(&mut std::io::stdout().lock())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done(ExitCode::SUCCESS));
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(ExitCode::SUCCESS));
        }
        Ok(())
    }

    fn handle_interactive(&self) -> Result<(), Done> {
        if !self.flags.interactive {
            return Ok(());
        }
        let code = match tui::run(self.config.clone()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                prompts::error(&format!("Terminal error: {e}"));
                ExitCode::FAILURE
            }
        };
        Err(Done(code))
    }

    fn open_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match SystemClipboard::open() {
            Ok(clipboard) => self.clipboard = Some(Box::new(clipboard)),
            Err(e) => {
                log::warn!("{e}");
                if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                    return Err(Done(ExitCode::SUCCESS));
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and hand them to the clipboard or `out`.
    ///
    /// Printed passwords are written one at a time; only clipboard mode
    /// collects the batch.
    pub fn generate_output<W: Write>(&mut self, out: &mut W) -> Result<(), Done> {
        let count = self.flags.number.unwrap_or(1);
        let mut rng = rand::thread_rng();
        let to_clipboard = self.clipboard.is_some();
        let mut batch = Zeroizing::new(String::new());

        for _ in 0..count {
            let password = pass::generate_with_rng(&mut self.config, &mut rng).map_err(|e| {
                prompts::error(&e.to_string());
                Done(ExitCode::FAILURE)
            })?;
            if to_clipboard {
                batch.push_str(&password);
                batch.push('\n');
            } else {
                out.write_all(password.as_bytes())
                    .and_then(|_| out.write_all(b"\n"))
                    .map_err(write_failed)?;
            }
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            return match clipboard.write(batch.trim_end()) {
                Ok(()) => {
                    prompts::clipboard_copied(count);
                    Ok(())
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    Err(Done(ExitCode::FAILURE))
                }
            };
        }
        out.flush().map_err(write_failed)
    }
}

fn write_failed(e: std::io::Error) -> Done {
    log::debug!("output write failed: {e}");
    Done(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::{DeniedClipboard, MemoryClipboard};

    fn context(list: &[&str]) -> Context {
        let args = std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(args).unwrap()
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out).lines().map(String::from).collect()
    }

    #[test]
    fn prints_one_strong_password_by_default() {
        let mut out = Vec::new();
        assert_eq!(context(&[]).generate_output(&mut out), Ok(()));
        let lines = lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 19);
    }

    #[test]
    fn number_sets_password_count() {
        let mut out = Vec::new();
        assert_eq!(context(&["-n", "3"]).generate_output(&mut out), Ok(()));
        let lines = lines(&out);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 19));
    }

    #[test]
    fn preset_flag_sets_length() {
        let mut out = Vec::new();
        assert_eq!(
            context(&["-p", "good", "-n", "2"]).generate_output(&mut out),
            Ok(())
        );
        assert!(lines(&out).iter().all(|l| l.len() == 12));
    }

    #[test]
    fn empty_charset_fails_without_output() {
        let mut out = Vec::new();
        let result = context(&["-p", "average", "--no-upper", "--no-lower"])
            .generate_output(&mut out);
        assert_eq!(result, Err(Done(ExitCode::FAILURE)));
        assert!(out.is_empty());
    }

    #[test]
    fn clipboard_gets_whole_batch_and_nothing_is_printed() {
        let clipboard = MemoryClipboard::default();
        let mut ctx = context(&["-n", "2", "-p", "average"]);
        ctx.clipboard = Some(Box::new(clipboard.clone()));

        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut out), Ok(()));
        assert!(out.is_empty());
        let copied = clipboard.contents().unwrap_or_default();
        let copied: Vec<&str> = copied.lines().collect();
        assert_eq!(copied.len(), 2);
        assert!(copied.iter().all(|l| l.len() == 8));
    }

    #[test]
    fn clipboard_failure_exits_with_failure() {
        let mut ctx = context(&[]);
        ctx.clipboard = Some(Box::new(DeniedClipboard));
        assert_eq!(
            ctx.generate_output(&mut Vec::new()),
            Err(Done(ExitCode::FAILURE))
        );
    }
}
