//! Terminal size query.

use std::io;

use tracing::debug;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: usize,
    pub rows: usize,
}

impl TerminalSize {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Queries the terminal attached to standard output.
    ///
    /// Returns `None` when standard output is not a terminal.
    pub fn detect() -> Option<TerminalSize> {
        match window_size() {
            Ok((columns, rows)) => {
                debug!("Terminal size is {}x{}", columns, rows);
                Some(TerminalSize::new(columns as usize, rows as usize))
            }
            Err(e) => {
                debug!("Could not query the terminal size: {}", e);
                None
            }
        }
    }
}

impl Default for TerminalSize {
    /// The classic 80x24 terminal.
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(unix)]
fn window_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ as _, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

#[cfg(not(unix))]
fn window_size() -> io::Result<(u16, u16)> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "terminal size query is only available on unix",
    ))
}
