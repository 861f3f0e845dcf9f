//! In-memory championship registry
//!
//! The registry is the session's read cache over the results store: hydrated
//! once at startup, then grown monotonically by user actions. The store is
//! the source of truth, so every mutation appends its row *before* the
//! in-memory state is touched; a failed append leaves the registry unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::store::{SheetRow, SheetStore};

/// The colour the winning player had in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    White,
    Black,
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Colour {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Colour::White),
            "black" => Ok(Colour::Black),
            _ => Err(TrackerError::InvalidColour {
                colour: s.to_string(),
            }),
        }
    }
}

/// One recorded match result: who won, with which colour, on which date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: String,
    pub colour: Colour,
    pub date: NaiveDate,
}

/// A named, ongoing series of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Championship {
    pub name: String,
    pub matches: Vec<MatchRecord>,
}

/// All championships known to the current session, in first-seen order.
///
/// Alongside the grouped view the registry mirrors the exact row sequence it
/// was hydrated from (plus every row it appended since), so re-serializing
/// [`Registry::rows`] reproduces the store's contents in order.
#[derive(Debug, Default)]
pub struct Registry {
    championships: Vec<Championship>,
    rows: Vec<SheetRow>,
}

impl Registry {
    /// Read every persisted row from the store and rebuild the grouped view.
    ///
    /// Placeholder rows create an empty championship; match rows referencing
    /// an unseen championship name implicitly create it. A store failure is
    /// surfaced rather than silently starting an empty session.
    pub async fn hydrate(store: &dyn SheetStore) -> Result<Self> {
        let rows = store.read_all().await?;
        Self::from_rows(rows)
    }

    /// Pure grouping step of [`Registry::hydrate`], split out for testing.
    pub fn from_rows(rows: Vec<SheetRow>) -> Result<Self> {
        let mut registry = Registry::default();

        for (idx, row) in rows.into_iter().enumerate() {
            let name = row.championship.trim();
            if name.is_empty() {
                return Err(TrackerError::InvalidRow {
                    row: idx + 1,
                    reason: "missing championship name".to_string(),
                });
            }
            let record = row.match_record().map_err(|e| TrackerError::InvalidRow {
                row: idx + 1,
                reason: e.to_string(),
            })?;

            let championship = registry.entry(name);
            if let Some(record) = record {
                championship.matches.push(record);
            }
            registry.rows.push(row);
        }

        Ok(registry)
    }

    fn entry(&mut self, name: &str) -> &mut Championship {
        let pos = match self.championships.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.championships.push(Championship {
                    name: name.to_string(),
                    matches: Vec::new(),
                });
                self.championships.len() - 1
            }
        };
        &mut self.championships[pos]
    }

    /// Create an empty championship, persisting its placeholder row first.
    ///
    /// Empty and duplicate names are rejected with no store append.
    pub async fn create_championship(&mut self, store: &dyn SheetStore, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyChampionshipName);
        }
        if self.contains(name) {
            return Err(TrackerError::DuplicateChampionship {
                name: name.to_string(),
            });
        }

        let row = SheetRow::placeholder(name);
        store.append_row(&row).await?;

        self.championships.push(Championship {
            name: name.to_string(),
            matches: Vec::new(),
        });
        self.rows.push(row);
        Ok(())
    }

    /// Record a match for an existing championship, persisting its row first.
    ///
    /// The championship must exist and the winner must be one of the names
    /// in `roster`; otherwise the registry and the store are left untouched.
    pub async fn record_match(
        &mut self,
        store: &dyn SheetStore,
        championship: &str,
        record: MatchRecord,
        roster: &[String],
    ) -> Result<()> {
        let pos = self
            .championships
            .iter()
            .position(|c| c.name == championship)
            .ok_or_else(|| TrackerError::UnknownChampionship {
                name: championship.to_string(),
            })?;
        if !roster.iter().any(|p| p == &record.winner) {
            return Err(TrackerError::UnknownPlayer {
                name: record.winner.clone(),
            });
        }

        let row = SheetRow::for_match(championship, &record);
        store.append_row(&row).await?;

        self.championships[pos].matches.push(record);
        self.rows.push(row);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.championships.iter().any(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Championship> {
        self.championships.iter().find(|c| c.name == name)
    }

    /// Championships in display (first-seen) order.
    pub fn championships(&self) -> &[Championship] {
        &self.championships
    }

    pub fn names(&self) -> Vec<&str> {
        self.championships.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.championships.is_empty()
    }

    pub fn len(&self) -> usize {
        self.championships.len()
    }

    /// Every match across all championships, in championship display order
    /// and row order within each championship.
    pub fn all_matches(&self) -> impl Iterator<Item = &MatchRecord> {
        self.championships.iter().flat_map(|c| c.matches.iter())
    }

    /// The mirrored row sequence: hydrated rows followed by every row
    /// appended this session, in store order.
    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }
}

/// Count wins per player over an ordered sequence of matches.
///
/// Ordered by win count descending; ties keep first-occurrence order, the
/// frequency-count semantics the tallies are displayed with.
pub fn win_counts<'a, I>(matches: I) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut counts: Vec<(String, u32)> = Vec::new();
    for record in matches {
        match counts.iter_mut().find(|(name, _)| name == &record.winner) {
            Some((_, wins)) => *wins += 1,
            None => counts.push((record.winner.clone(), 1)),
        }
    }
    // Stable sort: equal counts stay in first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
