//! Exit handling: terminal restore, signal handlers, and core dump policy.

/// Escape codes undoing everything the form switches on: mouse tracking
/// (normal, button, any-event, SGR), focus reporting, attributes, cursor.
const RESTORE_SEQ: &[u8] = b"\x1b[?1000l\x1b[?1002l\x1b[?1003l\x1b[?1006l\x1b[?1004l\x1b[0m\x1b[?25h";

/// Put the line discipline back to cooked mode using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Async-signal-safe restore: termios plus raw escape codes when stdout is a TTY.
fn restore() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_SEQ.as_ptr() as *const libc::c_void,
                RESTORE_SEQ.len(),
            );
        }
    }
}

/// Registered with atexit - runs on any normal exit.
extern "C" fn cleanup_on_exit() {
    restore();
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - restore the terminal, then re-raise with the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    let exit_signals = [libc::SIGINT, libc::SIGTERM, libc::SIGHUP];
    let crash_signals = [libc::SIGSEGV, libc::SIGABRT];
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in exit_signals {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in crash_signals {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps and away from ptrace by unprivileged peers.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state left behind by a previous crashed run.
pub fn reset_terminal() {
    reset_terminal_termios();
}
