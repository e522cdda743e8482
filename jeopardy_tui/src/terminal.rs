use std::io::{self, stdout, Stdout};

use ratatui::{
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal to raw mode and the alternate screen.
///
/// The guard is armed before the first change, so a failure halfway through
/// still restores the terminal.
pub fn init() -> io::Result<(Tui, TerminalGuard)> {
    guarded(enter, restore)
}

fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

pub fn restore() -> io::Result<()> {
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn guarded<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: fn() -> io::Result<()>,
) -> io::Result<(T, TerminalGuard)> {
    let guard = TerminalGuard { restore };
    let value = setup()?;
    Ok((value, guard))
}

/// Restores the terminal when dropped, so that errors and panics do not
/// leave it in raw mode.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = (self.restore)();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn failed_setup_still_restores() {
        static RESTORED: AtomicUsize = AtomicUsize::new(0);
        fn count_restore() -> io::Result<()> {
            RESTORED.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        let result = guarded(
            || -> io::Result<()> { Err(io::Error::new(io::ErrorKind::Other, "no tty")) },
            count_restore,
        );
        assert!(result.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);

        let (value, guard) = guarded(|| Ok(7), count_restore).unwrap();
        assert_eq!(value, 7);
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
        drop(guard);
        assert_eq!(RESTORED.load(Ordering::SeqCst), 2);
    }
}
