use std::collections::VecDeque;

use super::{Console, ConsoleError};

/// Replays canned input lines and records everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: String::new(),
            prompts: Vec::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push_str(prompt);
        self.prompts.push(prompt.to_string());
        let line = self.inputs.pop_front().ok_or(ConsoleError::Closed)?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.push_str(text);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_inputs_then_closes() {
        let mut console = ScriptedConsole::new(["one", "two"]);

        assert_eq!(console.read_line("> ").unwrap(), "one");
        console.write_line("hello").unwrap();
        assert_eq!(console.read_line("? ").unwrap(), "two");
        assert!(matches!(console.read_line("> "), Err(ConsoleError::Closed)));

        assert_eq!(console.output(), "> one\nhello\n? two\n> ");
        assert_eq!(console.prompts(), &["> ", "? ", "> "]);
        assert_eq!(console.remaining_inputs(), 0);
    }
}
