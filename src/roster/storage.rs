use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::csv_record::{self, Record};
use super::score::{format_score, is_valid_score, parse_score};
use super::{Entry, Roster, RosterError};

/// Data file, resolved against the working directory.
pub const DATA_FILE: &str = "oscares_dados.csv";

pub const HEADER: [&str; 2] = ["Filme", "Pontuacao"];

const LINE_ENDING: &str = "\r\n";
const PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved { count: usize },
    NothingToSave,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub count: usize,
    pub preview: Vec<Entry>,
}

impl LoadSummary {
    pub fn remaining_after_preview(&self) -> usize {
        self.count.saturating_sub(self.preview.len())
    }
}

impl Roster {
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<SaveOutcome, RosterError> {
        let path = path.as_ref();
        if self.entries.is_empty() {
            info!("Nothing to save");
            return Ok(SaveOutcome::NothingToSave);
        }

        fs::write(path, self.to_csv()).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Could not write roster file");
            RosterError::io(path, e)
        })?;

        info!(path = %path.display(), count = self.entries.len(), "Roster saved");
        Ok(SaveOutcome::Saved {
            count: self.entries.len(),
        })
    }

    pub fn to_csv(&self) -> String {
        let mut content = csv_record::encode_record(&HEADER);
        content.push_str(LINE_ENDING);
        for entry in &self.entries {
            let score = format_score(entry.score);
            content.push_str(&csv_record::encode_record(&[entry.name.as_str(), score.as_str()]));
            content.push_str(LINE_ENDING);
        }
        content
    }

    /// Replaces the roster with the file content. Once the file is found the
    /// previous roster is gone: any failure while reading leaves it empty.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, RosterError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Roster file not found");
            return Err(RosterError::NotFound(path.to_path_buf()));
        }

        self.entries.clear();

        let text = fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        let records = csv_record::parse_records(&text)?;

        let mut loaded = Vec::new();
        for record in records.iter().skip(1) {
            if let Some(entry) = record_to_entry(record)? {
                loaded.push(entry);
            }
        }

        self.entries = loaded;
        info!(path = %path.display(), count = self.entries.len(), "Roster loaded");

        Ok(LoadSummary {
            count: self.entries.len(),
            preview: self.entries.iter().take(PREVIEW_LEN).cloned().collect(),
        })
    }
}

// Rows with fewer than two fields or a blank name are skipped.
fn record_to_entry(record: &Record) -> Result<Option<Entry>, RosterError> {
    if record.fields.len() < 2 {
        return Ok(None);
    }
    let name = record.fields[0].trim();
    if name.is_empty() {
        return Ok(None);
    }

    let raw_score = &record.fields[1];
    let score = parse_score(raw_score)
        .filter(|s| is_valid_score(*s))
        .ok_or_else(|| RosterError::Parse {
            line: record.line,
            value: raw_score.clone(),
        })?;

    Ok(Some(Entry::new(name, score)))
}
