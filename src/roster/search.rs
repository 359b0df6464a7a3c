use tracing::debug;

use super::{Roster, RosterError};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Displayed (1-based) number of the film in the roster.
    pub number: usize,
    pub name: String,
    pub score: f64,
}

impl Roster {
    /// Case-insensitive substring search over film names, in roster order.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>, RosterError> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Err(RosterError::EmptyQuery);
        }

        let hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
            .map(|(index, entry)| SearchHit {
                number: index + 1,
                name: entry.name.clone(),
                score: entry.score,
            })
            .collect();

        debug!(term = needle.as_str(), matches = hits.len(), "Search finished");
        Ok(hits)
    }
}
