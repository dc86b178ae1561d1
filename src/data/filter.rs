use super::model::{Match, MatchDataset, MatchKey};

// ---------------------------------------------------------------------------
// Selection: which sport, which date, and what search text
// ---------------------------------------------------------------------------

/// The browse selection. Owned by the UI layer and passed to the engine on
/// every recomputation; the engine itself keeps no state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected sport id. None = show all sports.
    pub sport_id: Option<String>,

    /// Selected date label. None = all dates.
    pub date: Option<String>,

    /// Free-text search over team and competition names. Empty or
    /// whitespace-only = no filter.
    pub query: String,
}

impl Selection {
    /// True when no narrowing is active.
    pub fn is_empty(&self) -> bool {
        self.sport_id.is_none() && self.date.is_none() && self.query.trim().is_empty()
    }

    /// Select a sport; selecting the one already selected clears it.
    pub fn toggle_sport(&mut self, id: &str) {
        if self.sport_id.as_deref() == Some(id) {
            self.sport_id = None;
        } else {
            self.sport_id = Some(id.to_string());
        }
    }

    /// Select a date; selecting the one already selected clears it.
    pub fn toggle_date(&mut self, date: &str) {
        if self.date.as_deref() == Some(date) {
            self.date = None;
        } else {
            self.date = Some(date.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Compute the ordered list of visible matches for a selection.
///
/// A selected sport swaps in that sport's match list wholesale rather than
/// narrowing the union of all sports; the date and the search text then
/// narrow the candidates. Output order is dataset order, untouched.
pub fn visible_matches(dataset: &MatchDataset, selection: &Selection) -> Vec<MatchKey> {
    let query = selection.query.trim().to_lowercase();
    let date = selection.date.as_deref();

    let sport_range = match &selection.sport_id {
        Some(id) => match dataset.sport_index(id) {
            Some(idx) => idx..idx + 1,
            None => 0..0,
        },
        None => 0..dataset.sports.len(),
    };

    sport_range
        .flat_map(|sport| {
            dataset.sports[sport]
                .matches
                .iter()
                .enumerate()
                .filter(|(_, game)| retained(game, date, &query))
                .map(move |(entry, _)| MatchKey { sport, entry })
        })
        .collect()
}

/// Check a single match against the date and search criteria.
fn retained(game: &Match, date: Option<&str>, query_lower: &str) -> bool {
    if let Some(date) = date {
        if game.date != date {
            return false;
        }
    }

    if !query_lower.is_empty() {
        let in_teams = game
            .teams
            .iter()
            .any(|t| t.name.to_lowercase().contains(query_lower));
        if !in_teams && !game.competition.to_lowercase().contains(query_lower) {
            return false;
        }
    }

    true
}

/// Distinct match dates over the full dataset in first-occurrence order,
/// scanning sports then matches in dataset order. Ignores the selection.
pub fn distinct_dates(dataset: &MatchDataset) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for sport in &dataset.sports {
        for game in &sport.matches {
            if !dates.iter().any(|d| d == &game.date) {
                dates.push(game.date.clone());
            }
        }
    }
    dates
}
