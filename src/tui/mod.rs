//! Interactive password form.

mod app;
mod render;
mod text;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::size as terminal_size;

use app::App;
pub use text::*;

use crate::clipboard::SystemClipboard;
use crate::pass::Config;
use crate::terminal::ScreenGuard;

/// Input poll timeout; also the redraw rate while toasts count down.
const TICK: Duration = Duration::from_millis(100);

/// Run the form until the user quits.
pub fn run(config: Config) -> io::Result<()> {
    let mut app = App::new(config, Box::new(SystemClipboard::default()));
    let _screen = ScreenGuard::new()?;
    log::debug!("form opened with {:?}", app.config);

    let mut dirty = true;
    while !app.quit {
        let now = Instant::now();
        dirty |= app.toasts.tick(now);

        if dirty || !app.toasts.is_empty() {
            let (width, height) = terminal_size()?;
            render::render(&app, width, height, now).write_to(&mut io::stdout())?;
            dirty = false;
        }

        if !event::poll(TICK)? {
            continue;
        }
        let now = Instant::now();
        match event::read()? {
            Event::Key(key) => app.handle_key(key, now),
            Event::Mouse(mouse) => {
                let (width, _) = terminal_size()?;
                app.handle_mouse(mouse, width, now);
            }
            Event::FocusGained => app.handle_focus(true, now),
            Event::FocusLost => app.handle_focus(false, now),
            _ => {}
        }
        dirty = true;
    }

    Ok(())
}
