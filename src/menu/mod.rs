mod edit_commands;
mod entry_commands;
mod file_commands;
mod podium_command;
mod query_commands;

use std::path::PathBuf;

use rand::RngCore;
use tracing::{error, info, warn};

use crate::console::{prompts, Console, ConsoleError};
use crate::render::ScreenBuilder;
use crate::roster::{Roster, DATA_FILE};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ManualEntry,
    GenerateDemo,
    UpdateScore,
    DeleteFilm,
    ListAll,
    Search,
    Podium,
    Save,
    Load,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::ManualEntry,
        MenuOption::GenerateDemo,
        MenuOption::UpdateScore,
        MenuOption::DeleteFilm,
        MenuOption::ListAll,
        MenuOption::Search,
        MenuOption::Podium,
        MenuOption::Save,
        MenuOption::Load,
        MenuOption::Exit,
    ];

    /// Accepts exactly "1" through "10", surrounding whitespace ignored.
    pub fn parse(input: &str) -> Option<MenuOption> {
        let number: usize = input.trim().parse().ok()?;
        if (1..=Self::ALL.len()).contains(&number) && input.trim() == number.to_string() {
            Some(Self::ALL[number - 1])
        } else {
            None
        }
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map(|index| index + 1)
            .unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ManualEntry => "Introduzir dados manualmente",
            MenuOption::GenerateDemo => "Gerar dados automaticamente (teste)",
            MenuOption::UpdateScore => "Alterar pontuação de um filme",
            MenuOption::DeleteFilm => "Eliminar um filme",
            MenuOption::ListAll => "Consultar todos os filmes",
            MenuOption::Search => "Pesquisar filme específico",
            MenuOption::Podium => "Apresentar pódio (TOP 3)",
            MenuOption::Save => "Guardar dados em ficheiro",
            MenuOption::Load => "Carregar dados de ficheiro",
            MenuOption::Exit => "Sair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    UserChoice,
    InputClosed,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub pause_after_action: bool,
}

/// One interactive run: the roster plus the console it is driven from.
pub struct Session<C: Console> {
    roster: Roster,
    console: C,
    rng: Box<dyn RngCore>,
    settings: SessionSettings,
    data_path: PathBuf,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, settings: SessionSettings) -> Self {
        Self {
            roster: Roster::new(),
            console,
            rng: Box::new(rand::rng()),
            settings,
            data_path: PathBuf::from(DATA_FILE),
        }
    }

    #[cfg(test)]
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[cfg(test)]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    #[cfg(test)]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[cfg(test)]
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Shows the menu and dispatches selections until exit or end of input.
    pub fn run(&mut self) -> Result<ExitReason, Error> {
        info!("Menu loop started");
        loop {
            let outcome = match self.step() {
                Ok(outcome) => outcome,
                Err(e) => self.recover(e)?,
            };
            if let Some(reason) = outcome {
                info!(?reason, "Menu loop finished");
                return Ok(reason);
            }
        }
    }

    /// Reports a failed menu action and returns to the menu. Closed input
    /// ends the loop and console I/O failures are fatal.
    fn recover(&mut self, e: Error) -> Result<Option<ExitReason>, Error> {
        match e.downcast_ref::<ConsoleError>() {
            Some(ConsoleError::Closed) => {
                info!("Input closed, leaving menu");
                return Ok(Some(ExitReason::InputClosed));
            }
            Some(ConsoleError::Io(io_error)) => {
                error!(error = %io_error, "Console failure");
                return Err(format!("console failure: {}", io_error).into());
            }
            None => {}
        }

        error!(error = %e, "Unexpected error while handling menu option");
        let message = format!("\n⚠️  Erro inesperado: {}", e);
        if let Err(console_error) = self.console.write_line(&message) {
            return self.recover(console_error.into());
        }
        if let Err(pause_error) = self.pause() {
            return self.recover(pause_error);
        }
        Ok(None)
    }

    fn step(&mut self) -> Result<Option<ExitReason>, Error> {
        self.show_menu()?;
        let input = self.console.read_line("\nEscolha uma opção (1-10): ")?;

        let Some(option) = MenuOption::parse(&input) else {
            warn!(input = input.as_str(), "Invalid menu option");
            self.console
                .write_line("\n⚠️  Opção inválida! Por favor, escolha entre 1 e 10.")?;
            self.pause()?;
            return Ok(None);
        };

        info!(option = option.number(), "Menu option selected");
        if option == MenuOption::Exit {
            self.console.clear_screen()?;
            self.console.write(&farewell())?;
            return Ok(Some(ExitReason::UserChoice));
        }

        self.dispatch(option)?;
        self.pause()?;
        Ok(None)
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<(), Error> {
        match option {
            MenuOption::ManualEntry => entry_commands::populate_manual(self),
            MenuOption::GenerateDemo => entry_commands::populate_demo(self),
            MenuOption::UpdateScore => edit_commands::update_score(self),
            MenuOption::DeleteFilm => edit_commands::delete_film(self),
            MenuOption::ListAll => query_commands::list_all(self),
            MenuOption::Search => query_commands::search(self),
            MenuOption::Podium => podium_command::show_podium(self),
            MenuOption::Save => file_commands::save(self),
            MenuOption::Load => file_commands::load(self),
            MenuOption::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<(), Error> {
        self.console.clear_screen()?;
        self.console.write(&menu_screen())?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), Error> {
        if self.settings.pause_after_action {
            prompts::pause(&mut self.console)?;
        }
        Ok(())
    }

    /// Clears the console and prints a framed title.
    fn open_screen(&mut self, title: &str) -> Result<(), Error> {
        self.console.clear_screen()?;
        let mut screen = ScreenBuilder::new();
        screen.heading(title);
        self.console.write(&screen.build())?;
        Ok(())
    }
}

fn menu_screen() -> String {
    let mut screen = ScreenBuilder::new();
    screen
        .rule()
        .centered("🎬 SISTEMA DE GESTÃO DOS ÓSCARES 🏆")
        .centered("Categoria: Melhor Filme")
        .rule()
        .line("\n📋 MENU PRINCIPAL")
        .thin_rule();
    for option in MenuOption::ALL {
        let number = format!("{}.", option.number());
        screen.line(&format!("{:<4}{}", number, option.label()));
    }
    screen.thin_rule();
    screen.build()
}

pub fn farewell() -> String {
    let mut screen = ScreenBuilder::new();
    screen
        .nl()
        .rule()
        .line("👋 Obrigado por utilizar o Sistema de Gestão dos ÓSCARES!")
        .rule();
    screen.build()
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::console::ScriptedConsole;
    use crate::roster::{Entry, ROSTER_SIZE};

    pub(crate) fn session(inputs: &[&str]) -> Session<ScriptedConsole> {
        Session::new(
            ScriptedConsole::new(inputs.iter().copied()),
            SessionSettings {
                pause_after_action: false,
            },
        )
        .with_rng(StdRng::seed_from_u64(11))
    }

    pub(crate) fn session_with(entries: Vec<Entry>, inputs: &[&str]) -> Session<ScriptedConsole> {
        let mut session = session(inputs);
        session.roster_mut().replace(entries).unwrap();
        session
    }

    #[test]
    fn test_parse_menu_options() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::ManualEntry));
        assert_eq!(MenuOption::parse(" 7 "), Some(MenuOption::Podium));
        assert_eq!(MenuOption::parse("10"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::parse("0"), None);
        assert_eq!(MenuOption::parse("11"), None);
        assert_eq!(MenuOption::parse("01"), None);
        assert_eq!(MenuOption::parse("+3"), None);
        assert_eq!(MenuOption::parse("sair"), None);
        assert_eq!(MenuOption::parse(""), None);
    }

    #[test]
    fn test_option_numbers_follow_menu_order() {
        for (index, option) in MenuOption::ALL.iter().enumerate() {
            assert_eq!(option.number(), index + 1);
        }
    }

    #[test]
    fn test_menu_lists_every_option() {
        let menu = menu_screen();
        assert!(menu.contains("1.  Introduzir dados manualmente"));
        assert!(menu.contains("10. Sair"));
    }

    #[test]
    fn test_exit_option_says_goodbye() {
        let mut session = session(&["10"]);
        assert_eq!(session.run().unwrap(), ExitReason::UserChoice);
        assert!(session.console().output().contains("Obrigado por utilizar"));
        assert_eq!(session.console().remaining_inputs(), 0);
    }

    #[test]
    fn test_closed_input_ends_loop() {
        let mut session = session(&[]);
        assert_eq!(session.run().unwrap(), ExitReason::InputClosed);
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let mut session = session(&["42", "abc", "10"]);
        session.run().unwrap();

        let output = session.console().output();
        assert_eq!(output.matches("escolha entre 1 e 10").count(), 2);
        assert_eq!(output.matches("MENU PRINCIPAL").count(), 3);
    }

    #[test]
    fn test_pause_waits_for_enter() {
        let mut session = Session::new(
            ScriptedConsole::new(["5", "", "10"]),
            SessionSettings {
                pause_after_action: true,
            },
        );
        assert_eq!(session.run().unwrap(), ExitReason::UserChoice);
        assert!(session.console().output().contains("Pressione ENTER"));
    }

    #[test]
    fn test_unexpected_error_is_reported_and_menu_continues() {
        let mut session = session(&["10"]);
        let before = session.roster().clone();

        let outcome = session.recover(Error::from("disk on fire")).unwrap();
        assert_eq!(outcome, None);
        assert_eq!(session.run().unwrap(), ExitReason::UserChoice);

        let output = session.console().output();
        assert!(output.contains("Erro inesperado: disk on fire"));
        assert!(output.contains("Obrigado por utilizar"));
        assert_eq!(session.roster(), &before);
    }

    #[test]
    fn test_input_closed_during_error_pause_ends_loop() {
        let mut session = Session::new(
            ScriptedConsole::new(Vec::<String>::new()),
            SessionSettings {
                pause_after_action: true,
            },
        );

        let outcome = session.recover(Error::from("disk on fire")).unwrap();
        assert_eq!(outcome, Some(ExitReason::InputClosed));
        assert!(session.console().output().contains("Erro inesperado"));
    }

    #[test]
    fn test_console_io_failure_is_fatal() {
        let mut session = session(&["10"]);
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout gone");

        let result = session.recover(ConsoleError::Io(io_error).into());
        assert!(result.is_err());
        assert_eq!(session.console().remaining_inputs(), 1);
    }

    #[test]
    fn test_undecodable_selection_is_an_invalid_option() {
        let mut session = session(&["\u{FFFD}\u{FFFD}", "5", "10"]);
        assert_eq!(session.run().unwrap(), ExitReason::UserChoice);

        let output = session.console().output();
        assert_eq!(output.matches("escolha entre 1 e 10").count(), 1);
        assert!(output.contains("Não há dados para consultar"));
    }

    #[test]
    fn test_demo_then_podium_session() {
        let mut session = session(&["2", "7", "10"]);
        session.run().unwrap();

        assert_eq!(session.roster().len(), ROSTER_SIZE);
        let output = session.console().output();
        assert!(output.contains("Dados gerados com sucesso"));
        assert!(output.contains("1º LUGAR - OURO"));
        assert!(output.contains("OUTROS FILMES NOMINADOS"));
    }
}
