use super::{Entry, Roster};

pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_place(place: usize) -> Option<Medal> {
        match place {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "🥇 1º LUGAR - OURO 🥇",
            Medal::Silver => "🥈 2º LUGAR - PRATA 🥈",
            Medal::Bronze => "🥉 3º LUGAR - BRONZE 🥉",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub place: usize,
    pub entry: Entry,
}

impl RankedEntry {
    pub fn medal(&self) -> Option<Medal> {
        Medal::for_place(self.place)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub ranked: Vec<RankedEntry>,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn podium(&self) -> &[RankedEntry] {
        &self.ranked[..self.ranked.len().min(PODIUM_SIZE)]
    }

    /// Everyone from 4th place down.
    pub fn other_nominees(&self) -> &[RankedEntry] {
        &self.ranked[self.ranked.len().min(PODIUM_SIZE)..]
    }
}

impl Roster {
    /// Descending order by score. The live roster is not touched.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn rank_top(&self) -> Ranking {
        let mut sorted = self.entries.clone();
        exchange_sort_descending(&mut sorted);

        Ranking {
            ranked: sorted
                .into_iter()
                .enumerate()
                .map(|(index, entry)| RankedEntry {
                    place: index + 1,
                    entry,
                })
                .collect(),
        }
    }
}

// Adjacent exchange sort: only a strictly lower score moves down, so
// equal scores keep their roster order.
fn exchange_sort_descending(entries: &mut [Entry]) {
    let n = entries.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if entries[j].score < entries[j + 1].score {
                entries.swap(j, j + 1);
            }
        }
    }
}
