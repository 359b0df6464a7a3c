use tracing::info;

use super::{query_commands, Session};
use crate::console::{prompts, Console};
use crate::render::ScreenBuilder;
use crate::roster::{Entry, ROSTER_SIZE};
use crate::Error;

/// Collects ten films from the user. The roster is only replaced once all
/// of them have been entered.
pub(super) fn populate_manual<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("📝 INTRODUÇÃO DE DADOS")?;
    session
        .console
        .write_line(&format!("\nIntroduza os dados dos {} filmes candidatos:\n", ROSTER_SIZE))?;

    let mut entries = Vec::with_capacity(ROSTER_SIZE);
    for index in 0..ROSTER_SIZE {
        session
            .console
            .write_line(&format!("--- FILME {} ---", index + 1))?;
        let name = prompts::prompt_name(&mut session.console, "Nome do filme: ")?;
        let score = prompts::prompt_score(&mut session.console, "Pontuação (0-20): ")?;
        entries.push(Entry::new(name, score));
        session.console.write_line("✅ Filme registado!\n")?;
    }

    session.roster.replace(entries)?;
    info!(count = session.roster.len(), "Manual entry complete");

    let mut screen = ScreenBuilder::new();
    screen
        .heading("✅ DADOS INTRODUZIDOS COM SUCESSO!")
        .line(&format!("   Total de filmes: {}", session.roster.len()))
        .rule();
    session.console.write(&screen.build())?;
    Ok(())
}

pub(super) fn populate_demo<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("🎲 GERAÇÃO AUTOMÁTICA DE DADOS")?;
    session.console.write_line("\nGerando dados de exemplo...\n")?;

    session.roster.populate_demo(&mut session.rng);

    session.console.write_line("✅ Dados gerados com sucesso!")?;
    query_commands::list_all(session)
}
