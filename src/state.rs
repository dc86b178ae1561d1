use crate::color::SportColors;
use crate::data::filter::{Selection, distinct_dates, visible_matches};
use crate::data::model::{MatchDataset, MatchKey};

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

/// The four tabs of the app. Only `Scores` has real content; the rest are
/// placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Scores,
    Watch,
    News,
    Favourites,
}

impl Screen {
    /// All screens in tab-bar order.
    pub fn all() -> &'static [Screen] {
        &[Screen::Scores, Screen::Watch, Screen::News, Screen::Favourites]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Scores => "Scores",
            Screen::Watch => "Watch",
            Screen::News => "News",
            Screen::Favourites => "Favourites",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Scores => "⚽",
            Screen::Watch => "📺",
            Screen::News => "📰",
            Screen::Favourites => "⭐",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; replaced wholesale by File → Open…, never edited.
    pub dataset: MatchDataset,

    /// Current sport / date / search selection.
    pub selection: Selection,

    /// Matches passing the current selection (cached).
    pub visible: Vec<MatchKey>,

    /// Distinct match dates for the date chip row (cached per dataset).
    pub dates: Vec<String>,

    /// Accent colour per sport id.
    pub sport_colors: SportColors,

    /// Active tab.
    pub screen: Screen,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: MatchDataset) -> Self {
        let selection = Selection::default();
        let visible = visible_matches(&dataset, &selection);
        let dates = distinct_dates(&dataset);
        let sport_colors = SportColors::new(&dataset.sports);
        AppState {
            dataset,
            selection,
            visible,
            dates,
            sport_colors,
            screen: Screen::default(),
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and reset all derived state.
    pub fn set_dataset(&mut self, dataset: MatchDataset) {
        self.selection = Selection::default();
        self.dates = distinct_dates(&dataset);
        self.sport_colors = SportColors::new(&dataset.sports);
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible` after any selection change. Always a full pass
    /// over the dataset, never incremental.
    pub fn refilter(&mut self) {
        self.visible = visible_matches(&self.dataset, &self.selection);
    }

    /// Toggle a sport chip and refresh the list.
    pub fn toggle_sport(&mut self, id: &str) {
        self.selection.toggle_sport(id);
        self.refilter();
    }

    /// Toggle a date chip and refresh the list.
    pub fn toggle_date(&mut self, date: &str) {
        self.selection.toggle_date(date);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Match, Score, Sport, Team};

    fn team(name: &str) -> Team {
        Team {
            name: name.to_string(),
            score: Score::Integer(0),
            logo: String::new(),
        }
    }

    fn game(id: &str, date: &str) -> Match {
        Match {
            id: id.to_string(),
            competition: "Premier League".to_string(),
            date: date.to_string(),
            time: "FT".to_string(),
            notification: false,
            teams: vec![team("Arsenal"), team("Chelsea")],
        }
    }

    fn dataset() -> MatchDataset {
        MatchDataset {
            sports: vec![
                Sport {
                    id: "football".to_string(),
                    name: "Football".to_string(),
                    matches: vec![game("f1", "2024-05-01"), game("f2", "2024-05-02")],
                },
                Sport {
                    id: "basketball".to_string(),
                    name: "Basketball".to_string(),
                    matches: vec![game("b1", "2024-05-01")],
                },
            ],
        }
    }

    #[test]
    fn new_state_shows_everything() {
        let state = AppState::new(dataset());
        assert_eq!(state.visible.len(), 3);
        assert_eq!(state.dates, ["2024-05-01", "2024-05-02"]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn toggling_a_sport_refilters() {
        let mut state = AppState::new(dataset());
        state.toggle_sport("basketball");
        assert_eq!(state.visible.len(), 1);
        state.toggle_sport("basketball");
        assert_eq!(state.visible.len(), 3);
    }

    #[test]
    fn toggling_a_date_refilters() {
        let mut state = AppState::new(dataset());
        state.toggle_date("2024-05-02");
        assert_eq!(state.visible.len(), 1);
    }

    #[test]
    fn set_dataset_resets_the_selection_and_derived_state() {
        let mut state = AppState::new(dataset());
        state.toggle_sport("football");
        state.selection.query = "arsenal".to_string();
        state.status_message = Some("Error: old".to_string());

        state.set_dataset(MatchDataset {
            sports: vec![Sport {
                id: "tennis".to_string(),
                name: "Tennis".to_string(),
                matches: vec![game("t1", "2024-06-01")],
            }],
        });

        assert!(state.selection.is_empty());
        assert_eq!(state.dates, ["2024-06-01"]);
        assert_eq!(state.visible.len(), 1);
        assert!(state.status_message.is_none());
    }
}
