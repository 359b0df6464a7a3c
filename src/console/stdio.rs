use std::io::{self, BufRead, Write};

use tracing::warn;

use super::{Console, ConsoleError};

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

pub struct StdConsole {
    clear_enabled: bool,
}

impl StdConsole {
    pub fn new(clear_enabled: bool) -> Self {
        Self { clear_enabled }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write(prompt)?;
        read_line_from(&mut io::stdin().lock())
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        if self.clear_enabled {
            self.write(CLEAR_SEQUENCE)?;
        }
        Ok(())
    }
}

/// Reads one line and strips its terminator. Bytes that are not UTF-8 become
/// U+FFFD.
fn read_line_from(reader: &mut impl BufRead) -> Result<String, ConsoleError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Err(ConsoleError::Closed);
    }

    while matches!(bytes.last(), Some(b'\n' | b'\r')) {
        bytes.pop();
    }

    let line = String::from_utf8_lossy(&bytes).into_owned();
    if line.contains(char::REPLACEMENT_CHARACTER) {
        warn!("Input line was not valid UTF-8");
    }
    Ok(line)
}
