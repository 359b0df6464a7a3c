pub mod csv_record;
pub mod demo;
pub mod error;
pub mod ranking;
pub mod score;
pub mod search;
pub mod storage;

use tracing::info;

pub use error::RosterError;
pub use storage::{SaveOutcome, DATA_FILE};

/// Number of candidates collected by manual entry and demo generation.
pub const ROSTER_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub score: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreChange {
    pub name: String,
    pub old_score: f64,
    pub new_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Removed { entry: Entry, remaining: usize },
    Cancelled,
}

#[derive(Debug)]
pub struct Listing<'a> {
    pub entries: &'a [Entry],
    pub mean: Option<f64>,
}

/// Ordered film candidates. Position in the vector is the film's identity;
/// users address films by 1-based displayed number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a roster after checking every name and score.
    #[cfg(test)]
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, RosterError> {
        let mut roster = Roster::new();
        roster.replace(entries)?;
        Ok(roster)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards the current content. Nothing changes if any entry is invalid.
    pub fn replace(&mut self, entries: Vec<Entry>) -> Result<(), RosterError> {
        let mut checked = Vec::with_capacity(entries.len());
        for entry in entries {
            checked.push(check_entry(entry)?);
        }
        info!(count = checked.len(), "Roster replaced");
        self.entries = checked;
        Ok(())
    }

    /// Maps a displayed number (1..=len) to its internal position.
    pub fn position(&self, number: i64) -> Result<usize, RosterError> {
        let out_of_range = || RosterError::OutOfRange {
            number,
            len: self.entries.len(),
        };

        if number < 1 {
            return Err(out_of_range());
        }
        let position = usize::try_from(number - 1).map_err(|_| out_of_range())?;
        if position >= self.entries.len() {
            return Err(out_of_range());
        }
        Ok(position)
    }

    pub fn get(&self, number: i64) -> Result<&Entry, RosterError> {
        let position = self.position(number)?;
        Ok(&self.entries[position])
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn update_score(&mut self, number: i64, new_score: f64) -> Result<ScoreChange, RosterError> {
        let position = self.position(number)?;
        if !score::is_valid_score(new_score) {
            return Err(RosterError::InvalidScore(new_score));
        }

        let entry = &mut self.entries[position];
        let old_score = entry.score;
        entry.score = new_score;

        info!(
            film = entry.name.as_str(),
            old_score, new_score, "Score updated"
        );

        Ok(ScoreChange {
            name: entry.name.clone(),
            old_score,
            new_score,
        })
    }

    /// Removes the film at `number` once `confirm` approves it.
    #[tracing::instrument(level = "trace", skip(self, confirm))]
    pub fn delete<F>(&mut self, number: i64, confirm: F) -> Result<DeleteOutcome, RosterError>
    where
        F: FnOnce(&Entry) -> bool,
    {
        let position = self.position(number)?;

        if !confirm(&self.entries[position]) {
            info!(number, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let entry = self.entries.remove(position);
        info!(film = entry.name.as_str(), "Film deleted");

        Ok(DeleteOutcome::Removed {
            entry,
            remaining: self.entries.len(),
        })
    }

    pub fn list_all(&self) -> Listing<'_> {
        Listing {
            entries: &self.entries,
            mean: self.mean_score(),
        }
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|e| e.score).sum();
        Some(total / self.entries.len() as f64)
    }
}

fn check_entry(entry: Entry) -> Result<Entry, RosterError> {
    let name = score::normalize_name(&entry.name).ok_or(RosterError::EmptyName)?;
    if !score::is_valid_score(entry.score) {
        return Err(RosterError::InvalidScore(entry.score));
    }
    Ok(Entry {
        name,
        score: entry.score,
    })
}

#[cfg(test)]
pub(crate) fn sample_roster() -> Roster {
    Roster::from_entries(vec![
        Entry::new("Oppenheimer", 18.5),
        Entry::new("Barbie", 14.0),
        Entry::new("Past Lives", 16.2),
        Entry::new("Maestro", 11.9),
    ])
    .unwrap()
}
