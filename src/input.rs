use crate::command::Command;
use crossterm::event::{read, DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use std::io;

/// A source of player commands
pub(crate) trait InputSource {
    /// Wait for the next input event.  Returns `None` for events that don't
    /// map to any command.
    fn next_command(&mut self) -> io::Result<Option<Command>>;
}

/// Reads commands from the terminal's key & focus events
#[derive(Debug)]
pub(crate) struct TerminalInput(());

impl TerminalInput {
    /// Start reading terminal input, with focus-change reporting enabled
    pub(crate) fn new() -> io::Result<TerminalInput> {
        execute!(io::stdout(), EnableFocusChange)?;
        Ok(TerminalInput(()))
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        Ok(Command::from_event(&read()?))
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if execute!(io::stdout(), DisableFocusChange).is_err() {
            log::error!("Failed to disable focus change reporting");
        }
    }
}
