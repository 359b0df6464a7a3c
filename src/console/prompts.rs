use tracing::debug;

use super::{Console, ConsoleError};
use crate::roster::score::{is_valid_score, normalize_name, parse_score};

#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Number(i64),
    Invalid(String),
}

/// Asks until a non-blank name is given. Returns it trimmed.
pub fn prompt_name(console: &mut dyn Console, prompt: &str) -> Result<String, ConsoleError> {
    loop {
        let input = console.read_line(prompt)?;
        if let Some(name) = normalize_name(&input) {
            return Ok(name);
        }
        debug!("Rejected empty film name");
        console.write_line("⚠️  O nome não pode estar vazio!")?;
    }
}

/// Asks until the answer is a number within 0-20.
pub fn prompt_score(console: &mut dyn Console, prompt: &str) -> Result<f64, ConsoleError> {
    loop {
        let input = console.read_line(prompt)?;
        match parse_score(&input) {
            Some(score) if is_valid_score(score) => return Ok(score),
            Some(score) => {
                debug!(score, "Rejected out of range score");
                console.write_line("⚠️  A pontuação deve estar entre 0 e 20!")?;
            }
            None => {
                debug!(input = input.as_str(), "Rejected non numeric score");
                console.write_line("⚠️  Por favor, introduza um número válido!")?;
            }
        }
    }
}

/// Single attempt at reading an integer; the caller decides what to do with bad input.
pub fn prompt_number(console: &mut dyn Console, prompt: &str) -> Result<NumberInput, ConsoleError> {
    let input = console.read_line(prompt)?;
    Ok(match input.trim().parse::<i64>() {
        Ok(number) => NumberInput::Number(number),
        Err(_) => NumberInput::Invalid(input),
    })
}

/// `S` (any case) confirms; anything else declines.
pub fn confirm(console: &mut dyn Console, prompt: &str) -> Result<bool, ConsoleError> {
    let input = console.read_line(prompt)?;
    Ok(input.trim().eq_ignore_ascii_case("s"))
}

pub fn pause(console: &mut dyn Console) -> Result<(), ConsoleError> {
    console.read_line("\nPressione ENTER para continuar...")?;
    Ok(())
}
