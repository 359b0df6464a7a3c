use tracing::info;

use super::Session;
use crate::console::Console;
use crate::render::{pad_right, truncate, ScreenBuilder};
use crate::roster::ranking::RankedEntry;
use crate::roster::score::format_score;
use crate::Error;

const BOX_INDENT: &str = "         ";
const BOX_NAME_WIDTH: usize = 24;
const BOX_SCORE_WIDTH: usize = 13;
const NOMINEE_NAME_WIDTH: usize = 35;

pub(super) fn show_podium<C: Console>(session: &mut Session<C>) -> Result<(), Error> {
    session.open_screen("🏆 PÓDIO DOS ÓSCARES 🏆")?;

    let ranking = session.roster.rank_top();
    let mut screen = ScreenBuilder::new();
    screen.centered("Melhor Filme").rule();

    if ranking.is_empty() {
        screen.line("\n❌ Não há dados para apresentar!");
        session.console.write(&screen.build())?;
        return Ok(());
    }

    for ranked in ranking.podium() {
        write_podium_box(&mut screen, ranked);
    }

    let others = ranking.other_nominees();
    if !others.is_empty() {
        screen
            .nl()
            .thin_rule()
            .centered("🎬 OUTROS FILMES NOMINADOS 🎬")
            .thin_rule();
        for ranked in others {
            screen.line(&format!(
                "{}. {} - {} pontos",
                ranked.place,
                pad_right(&ranked.entry.name, NOMINEE_NAME_WIDTH),
                format_score(ranked.entry.score)
            ));
        }
    }
    screen.rule();

    if let Some(winner) = ranking.podium().first() {
        info!(
            winner = winner.entry.name.as_str(),
            score = winner.entry.score,
            "Podium shown"
        );
    }

    session.console.write(&screen.build())?;
    Ok(())
}

fn write_podium_box(screen: &mut ScreenBuilder, ranked: &RankedEntry) {
    if let Some(medal) = ranked.medal() {
        screen.nl().centered(medal.label());
    }
    let horizontal = "═".repeat(BOX_NAME_WIDTH + 2);
    let name = pad_right(&truncate(&ranked.entry.name, BOX_NAME_WIDTH), BOX_NAME_WIDTH);
    let score = pad_right(&format_score(ranked.entry.score), BOX_SCORE_WIDTH);

    screen
        .line(&format!("{}╔{}╗", BOX_INDENT, horizontal))
        .line(&format!("{}║ {} ║", BOX_INDENT, name))
        .line(&format!("{}║ Pontuação: {} ║", BOX_INDENT, score))
        .line(&format!("{}╚{}╝", BOX_INDENT, horizontal));
}

#[cfg(test)]
mod tests {
    use crate::menu::tests::session_with;
    use crate::roster::Entry;

    #[test]
    fn test_podium_orders_medals() {
        let mut session = session_with(
            vec![
                Entry::new("A", 10.0),
                Entry::new("B", 20.0),
                Entry::new("C", 15.0),
            ],
            &["7", "10"],
        );

        session.run().unwrap();

        let output = session.console().output();
        let gold = output.find("OURO").unwrap();
        let silver = output.find("PRATA").unwrap();
        let bronze = output.find("BRONZE").unwrap();
        assert!(gold < silver && silver < bronze);
        assert!(output.find("║ B ").unwrap() < output.find("║ C ").unwrap());
        assert!(output.find("║ C ").unwrap() < output.find("║ A ").unwrap());
        assert!(!output.contains("OUTROS FILMES NOMINADOS"));
    }

    #[test]
    fn test_podium_lists_other_nominees_from_fourth() {
        let mut session = session_with(
            vec![
                Entry::new("Low", 5.0),
                Entry::new("High", 19.0),
                Entry::new("Mid", 12.0),
                Entry::new("Second", 18.0),
                Entry::new("Third", 17.0),
            ],
            &["7", "10"],
        );

        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("OUTROS FILMES NOMINADOS"));
        assert!(output.contains("4. Mid"));
        assert!(output.contains("5. Low"));
        // Roster order is untouched.
        assert_eq!(session.roster().entries()[0], Entry::new("Low", 5.0));
    }

    #[test]
    fn test_podium_truncates_long_names() {
        let mut session = session_with(
            vec![Entry::new("Killers of the Flower Moon", 17.0)],
            &["7", "10"],
        );

        session.run().unwrap();

        let output = session.console().output();
        assert!(output.contains("║ Killers of the Flower Mo ║"));
    }

    #[test]
    fn test_podium_empty_roster() {
        let mut session = session_with(Vec::new(), &["7", "10"]);

        session.run().unwrap();

        assert!(session.console().output().contains("Não há dados para apresentar"));
    }
}
