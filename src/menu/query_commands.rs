use tracing::info;

use super::Session;
use crate::console::Console;
use crate::render::{ScreenBuilder, Section, TableBuilder, Text};
use crate::roster::score::format_score;
use crate::roster::{Entry, RosterError};
use crate::Error;

pub(super) fn roster_table(entries: &[Entry]) -> Section {
    TableBuilder::new("")
        .add_column(Text::new(
            "Nº",
            (1..=entries.len()).map(|n| n.to_string()).collect(),
        ))
        .add_column(Text::new(
            "Filme",
            entries.iter().map(|e| e.name.clone()).collect(),
        ))
        .add_column(Text::new(
            "Pontuação",
            entries.iter().map(|e| format_score(e.score)).collect(),
        ).right_aligned())
        .build()
}

pub(super) fn write_roster_table<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    let mut screen = ScreenBuilder::new();
    screen.nl().section(&roster_table(session.roster.entries()));
    session.console.write(&screen.build())?;
    Ok(())
}

pub(super) fn list_all<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("📊 LISTA DE TODOS OS FILMES")?;

    let listing = session.roster.list_all();
    let mut screen = ScreenBuilder::new();

    if listing.entries.is_empty() {
        screen
            .line("\n❌ Não há dados para consultar!")
            .line("\n💡 Sugestões:")
            .list(
                &[
                    "Use a opção 1 para introduzir dados manualmente",
                    "Use a opção 2 para gerar dados automaticamente",
                    "Use a opção 9 para carregar dados de ficheiro",
                ],
                |hint| hint.to_string(),
            );
        session.console.write(&screen.build())?;
        return Ok(());
    }

    screen
        .nl()
        .section(&roster_table(listing.entries))
        .rule()
        .line(&format!("Total de filmes: {}", listing.entries.len()));
    if let Some(mean) = listing.mean {
        screen.line(&format!("Pontuação média: {:.2} pontos", mean));
    }
    screen.rule();

    session.console.write(&screen.build())?;
    Ok(())
}

pub(super) fn search<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("🔍 PESQUISAR FILME")?;

    if session.roster.is_empty() {
        session.console.write_line("\n❌ Não há dados para pesquisar!")?;
        return Ok(());
    }

    let term = session
        .console
        .read_line("\nDigite o nome do filme (ou parte dele): ")?;

    let hits = match session.roster.search(&term) {
        Ok(hits) => hits,
        Err(RosterError::EmptyQuery) => {
            session
                .console
                .write_line("\n⚠️  Por favor, digite um termo de pesquisa!")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!(term = term.trim(), matches = hits.len(), "Search executed");

    let mut screen = ScreenBuilder::new();
    screen.line("\n🔎 Procurando...");

    if hits.is_empty() {
        screen
            .line("\n❌ Nenhum filme encontrado com esse termo!")
            .line("💡 Dica: Tente usar apenas parte do nome");
    } else {
        screen.line("\n✅ Filme(s) encontrado(s)!").thin_rule();
        for hit in &hits {
            screen
                .line(&format!("\nNome: {}", hit.name))
                .line(&format!("Pontuação: {} pontos", format_score(hit.score)))
                .line(&format!("Posição na lista: {}", hit.number))
                .thin_rule();
        }
    }

    session.console.write(&screen.build())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::menu::tests::session_with;
    use crate::roster::sample_roster;

    #[test]
    fn test_roster_table_numbers_rows_from_one() {
        let section = roster_table(sample_roster().entries());
        assert_eq!(section.lines.len(), 6);
        assert_eq!(section.lines[2], "1  | Oppenheimer |      18.5");
        assert_eq!(section.lines[5], "4  | Maestro     |      11.9");
    }

    #[test]
    fn test_list_all_shows_mean() {
        let mut session = session_with(
            vec![Entry::new("A", 10.0), Entry::new("B", 15.0)],
            &["5", "10"],
        );

        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("Total de filmes: 2"));
        assert!(output.contains("Pontuação média: 12.50 pontos"));
    }

    #[test]
    fn test_list_all_empty_gives_hints() {
        let mut session = session_with(Vec::new(), &["5", "10"]);

        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("Não há dados para consultar"));
        assert!(output.contains("opção 9"));
        assert!(!output.contains("Pontuação média"));
    }

    #[test]
    fn test_search_finds_case_insensitive() {
        let mut session = session_with(sample_roster().entries().to_vec(), &["6", "OPPEN", "10"]);

        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("Nome: Oppenheimer"));
        assert!(output.contains("Posição na lista: 1"));
    }

    #[test]
    fn test_search_empty_term() {
        let mut session = session_with(sample_roster().entries().to_vec(), &["6", "   ", "10"]);

        session.run().unwrap();

        assert!(session.console().output().contains("digite um termo de pesquisa"));
    }

    #[test]
    fn test_search_without_match() {
        let mut session = session_with(sample_roster().entries().to_vec(), &["6", "titanic", "10"]);

        session.run().unwrap();

        assert!(session.console().output().contains("Nenhum filme encontrado"));
    }
}
