use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Score – one team's score cell
// ---------------------------------------------------------------------------

/// A team's score exactly as the dataset carries it: an integer, a float, or
/// a free-form label ("-", "2 (4)"). Displayed as-is, never interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Integer(i) => write!(f, "{i}"),
            Score::Float(v) => write!(f, "{v}"),
            Score::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Team – one participant in a match
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    /// Display name, also searched by the free-text filter.
    pub name: String,
    pub score: Score,
    /// Logo URI, handed to the image loader untouched.
    pub logo: String,
}

// ---------------------------------------------------------------------------
// Match – one contest between two teams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Match {
    /// Unique across the whole dataset; the stable key for list rows.
    pub id: String,
    /// Competition name, searched by the free-text filter.
    pub competition: String,
    /// Opaque date label. Compared by exact string equality, never parsed.
    pub date: String,
    /// Kickoff time or status label ("19:45", "FT", "90+2'").
    pub time: String,
    /// Decorative reminder marker.
    #[serde(default)]
    pub notification: bool,
    /// Exactly two entries once the loader has validated the dataset.
    pub teams: Vec<Team>,
}

// ---------------------------------------------------------------------------
// Sport – a named category owning an ordered match list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
    pub matches: Vec<Match>,
}

// ---------------------------------------------------------------------------
// MatchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Address of one match inside a dataset: sport index, then match index
/// within that sport's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchKey {
    pub sport: usize,
    pub entry: usize,
}

/// The full parsed dataset. Read-only after load; opening another file
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchDataset {
    pub sports: Vec<Sport>,
}

impl MatchDataset {
    /// Total number of matches across all sports.
    pub fn len(&self) -> usize {
        self.sports.iter().map(|s| s.matches.len()).sum()
    }

    /// Whether the dataset holds no matches at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of a sport by its id.
    pub fn sport_index(&self, id: &str) -> Option<usize> {
        self.sports.iter().position(|s| s.id == id)
    }

    /// Resolve a key to the sport and match it addresses.
    pub fn get(&self, key: MatchKey) -> Option<(&Sport, &Match)> {
        let sport = self.sports.get(key.sport)?;
        let game = sport.matches.get(key.entry)?;
        Some((sport, game))
    }
}
