use tracing::{error, info};

use super::Session;
use crate::console::Console;
use crate::render::ScreenBuilder;
use crate::roster::score::format_score;
use crate::roster::{RosterError, SaveOutcome};
use crate::Error;

pub(super) fn save<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("💾 GUARDAR DADOS EM FICHEIRO")?;

    let file = session.data_path.display().to_string();
    let mut screen = ScreenBuilder::new();

    if session.roster.is_empty() {
        screen.line("\n❌ Não há dados para guardar!");
        session.console.write(&screen.build())?;
        return Ok(());
    }

    screen.line(&format!("\nGuardando dados em: {}\n", file));

    match session.roster.save(&session.data_path) {
        Ok(SaveOutcome::Saved { count }) => {
            screen
                .line("✅ Dados guardados com sucesso!")
                .line(&format!("   - {} filmes salvos", count))
                .line(&format!("   - Ficheiro: {}", file))
                .line("   - Localização: pasta atual do programa")
                .line("\n💡 Dica: Pode abrir este ficheiro no Excel ou Bloco de Notas");
        }
        Ok(SaveOutcome::NothingToSave) => {
            screen.line("❌ Não há dados para guardar!");
        }
        Err(e) => {
            error!(error = %e, "Saving roster failed");
            screen.line(&format!("\n❌ Erro ao guardar ficheiro: {}", e));
        }
    }

    session.console.write(&screen.build())?;
    Ok(())
}

pub(super) fn load<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("📂 CARREGAR DADOS DE FICHEIRO")?;

    let file = session.data_path.display().to_string();
    let mut screen = ScreenBuilder::new();
    screen.line(&format!("\nProcurando ficheiro: {}\n", file));

    let loaded = session.roster.load(&session.data_path);
    if !matches!(loaded, Err(RosterError::NotFound(_))) {
        screen.line("✅ Ficheiro encontrado!\n").line("Carregando dados...\n");
    }

    match loaded {
        Ok(summary) => {
            screen
                .line("✅ Dados carregados com sucesso!")
                .line(&format!("   - {} filmes carregados", summary.count))
                .line("   - Dados anteriores substituídos");

            if !summary.preview.is_empty() {
                screen.line("\nFilmes carregados:");
                for (index, entry) in summary.preview.iter().enumerate() {
                    screen.line(&format!(
                        "{}. {} - {}",
                        index + 1,
                        entry.name,
                        format_score(entry.score)
                    ));
                }
                let remaining = summary.remaining_after_preview();
                if remaining > 0 {
                    screen.line(&format!("... e mais {} filmes", remaining));
                }
            }
        }
        Err(RosterError::NotFound(_)) => {
            info!(file = file.as_str(), "Nothing to load");
            screen
                .line("❌ Ficheiro não encontrado!")
                .line(&format!(
                    "\n💡 Certifique-se que o ficheiro '{}' existe",
                    file
                ))
                .line("   na mesma pasta do programa.");
        }
        Err(e) => {
            error!(error = %e, "Loading roster failed, roster cleared");
            screen.line(&format!("\n❌ Erro ao carregar ficheiro: {}", e));
        }
    }

    session.console.write(&screen.build())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use crate::menu::tests::{session, session_with};
    use crate::roster::{sample_roster, Entry, DATA_FILE};

    #[test]
    fn test_save_then_load_restores_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);
        let original = sample_roster();

        let mut saver = session_with(original.entries().to_vec(), &["8", "10"])
            .with_data_path(&path);
        saver.run().unwrap();
        assert!(saver.console().output().contains("4 filmes salvos"));

        let mut loader = session(&["9", "10"]).with_data_path(&path);
        loader.run().unwrap();

        assert_eq!(loader.roster(), &original);
        let output = loader.console().output();
        assert!(output.contains("Ficheiro encontrado!"));
        assert!(output.contains("Carregando dados..."));
        assert!(output.contains("4 filmes carregados"));
        assert!(output.contains("1. Oppenheimer - 18.5"));
        assert!(output.contains("... e mais 1 filmes"));
    }

    #[test]
    fn test_save_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);

        let mut session = session(&["8", "10"]).with_data_path(&path);
        session.run().unwrap();

        assert!(session.console().output().contains("Não há dados para guardar"));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(DATA_FILE);

        let mut session = session_with(sample_roster().entries().to_vec(), &["8", "10"])
            .with_data_path(&path);
        session.run().unwrap();

        assert!(session.console().output().contains("Erro ao guardar ficheiro"));
        assert_eq!(session.roster(), &sample_roster());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);

        let mut session = session_with(sample_roster().entries().to_vec(), &["9", "10"])
            .with_data_path(&path);
        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("Ficheiro não encontrado"));
        assert!(!output.contains("Carregando dados"));
        assert_eq!(session.roster(), &sample_roster());
    }

    #[test]
    fn test_load_bad_score_clears_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);
        fs::write(&path, "Filme,Pontuacao\nBarbie,14.0\nMaestro,???\n").unwrap();

        let mut session = session_with(vec![Entry::new("Old", 3.0)], &["9", "10"])
            .with_data_path(&path);
        session.run().unwrap();

        assert!(session.roster().is_empty());
        assert!(session.console().output().contains("Erro ao carregar ficheiro"));
    }
}
