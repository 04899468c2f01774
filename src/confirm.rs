//! Confirmation before drawing a flag taller than the terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use color_print::cprintln;
use inquire::{InquireError, Text};
use tracing::{debug, trace};

use crate::error::CliError;

pub const PROMPT: &str = "proceed anyway? [y/N] ";
pub const CANCELLED: &str = "operation cancelled.";

/// Only an answer starting with `y` or `Y` confirms.
pub fn is_affirmative(answer: &str) -> bool {
    trace!("Confirmation answer: {:?}", answer);
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

/// Reads one answer line. End of input declines.
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Warns that the flag will not fit and asks whether to draw it anyway.
///
/// On a terminal the question is asked with an interactive prompt; otherwise
/// a single line is read from standard input.
pub fn confirm_oversized(terminal_rows: usize, flag_height: usize) -> Result<bool, CliError> {
    cprintln!(
        "<y>warning:</y> your terminal (height: {}) might be too small for the flag (height: {}).",
        terminal_rows,
        flag_height
    );

    if io::stdin().is_terminal() {
        // free text: any answer other than yes declines
        let answer = Text::new(PROMPT.trim_end()).prompt();
        return match answer {
            Ok(answer) => Ok(is_affirmative(&answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("Confirmation prompt dismissed");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        };
    }

    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    Ok(read_answer(&mut io::stdin().lock())?)
}
