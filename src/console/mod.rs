pub mod prompts;
#[cfg(test)]
pub mod scripted;
pub mod stdio;

use thiserror::Error;

#[cfg(test)]
pub use scripted::ScriptedConsole;
pub use stdio::StdConsole;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Line oriented terminal used by the menu shell.
pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn clear_screen(&mut self) -> Result<(), ConsoleError>;

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write(text)?;
        self.write("\n")
    }
}
