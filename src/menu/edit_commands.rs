use tracing::info;

use super::{query_commands, Session};
use crate::console::prompts::{self, NumberInput};
use crate::console::{Console, ConsoleError};
use crate::roster::score::format_score;
use crate::roster::{DeleteOutcome, Entry, RosterError};
use crate::Error;

/// Reads a film number. `None` means the problem was already reported.
fn select_film<C: Console>(session: &mut Session<C>, prompt: &str) -> Result<Option<i64>, Error> {
    let number = match prompts::prompt_number(&mut session.console, prompt)? {
        NumberInput::Number(number) => number,
        NumberInput::Invalid(input) => {
            info!(input = input.as_str(), "Film number is not an integer");
            session
                .console
                .write_line("\n⚠️  Por favor, introduza um número válido!")?;
            return Ok(None);
        }
    };

    match session.roster.position(number) {
        Ok(_) => Ok(Some(number)),
        Err(e @ RosterError::OutOfRange { .. }) => {
            info!(error = %e, "Film number rejected");
            session.console.write_line("\n⚠️  Número inválido!")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub(super) fn update_score<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("✏️ ALTERAR PONTUAÇÃO DE FILME")?;

    if session.roster.is_empty() {
        session.console.write_line("\n❌ Não há dados para alterar!")?;
        return Ok(());
    }

    query_commands::write_roster_table(session)?;
    let prompt = format!("\nDigite o número do filme (1-{}): ", session.roster.len());
    let Some(number) = select_film(session, &prompt)? else {
        return Ok(());
    };

    let entry = session.roster.get(number)?.clone();
    session.console.write_line(&format!(
        "\nFilme selecionado: {}\nPontuação atual: {}",
        entry.name,
        format_score(entry.score)
    ))?;

    let new_score = prompts::prompt_score(&mut session.console, "\nNova pontuação (0-20): ")?;
    let change = session.roster.update_score(number, new_score)?;

    session.console.write_line(&format!(
        "\n✅ Pontuação alterada com sucesso!\n   {}: {} → {}",
        change.name,
        format_score(change.old_score),
        format_score(change.new_score)
    ))?;
    Ok(())
}

pub(super) fn delete_film<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("🗑️ ELIMINAR FILME")?;

    if session.roster.is_empty() {
        session.console.write_line("\n❌ Não há dados para eliminar!")?;
        return Ok(());
    }

    query_commands::write_roster_table(session)?;
    let prompt = format!(
        "\nDigite o número do filme a eliminar (1-{}): ",
        session.roster.len()
    );
    let Some(number) = select_film(session, &prompt)? else {
        return Ok(());
    };

    let console = &mut session.console;
    let mut console_error: Option<ConsoleError> = None;
    let outcome = session.roster.delete(number, |entry| {
        match confirm_deletion(console, entry) {
            Ok(confirmed) => confirmed,
            Err(e) => {
                console_error = Some(e);
                false
            }
        }
    })?;

    if let Some(e) = console_error {
        return Err(e.into());
    }

    match outcome {
        DeleteOutcome::Removed { remaining, .. } => {
            session.console.write_line(&format!(
                "\n✅ Filme eliminado com sucesso!\n   Total de filmes: {}",
                remaining
            ))?;
        }
        DeleteOutcome::Cancelled => {
            session.console.write_line("\n❌ Operação cancelada!")?;
        }
    }
    Ok(())
}

fn confirm_deletion(console: &mut dyn Console, entry: &Entry) -> Result<bool, ConsoleError> {
    console.write_line(&format!(
        "\nFilme selecionado: {}\nPontuação: {}",
        entry.name,
        format_score(entry.score)
    ))?;
    prompts::confirm(
        console,
        "\n⚠️  Tem a certeza que deseja eliminar este filme? (S/N): ",
    )
}
