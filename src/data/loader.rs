use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::MatchDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong turning a JSON document into a valid
/// [`MatchDataset`]. Filtering itself has no error path; a dataset that
/// passes here is valid for every downstream operation.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or a missing/mistyped required field; serde's
    /// line/column context is surfaced verbatim.
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("match '{id}': expected exactly 2 teams, found {count}")]
    TeamCount { id: String, count: usize },

    #[error("duplicate match id '{id}'")]
    DuplicateMatchId { id: String },

    #[error("duplicate sport id '{id}'")]
    DuplicateSportId { id: String },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Dataset compiled into the binary; what the app shows at startup.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/data.json");

/// Parse the bundled dataset.
pub fn load_bundled() -> Result<MatchDataset, DatasetError> {
    parse_dataset(BUNDLED_DATASET)
}

/// Load a dataset from a user-chosen JSON file (File → Open…).
pub fn load_file(path: &Path) -> Result<MatchDataset, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&text)
}

/// Expected document shape:
///
/// ```json
/// {
///   "sports": [
///     {
///       "id": "football",
///       "name": "Football",
///       "matches": [
///         {
///           "id": "f1",
///           "competition": "Premier League",
///           "date": "2024-05-01",
///           "time": "FT",
///           "notification": true,
///           "teams": [
///             { "name": "Arsenal", "score": 2, "logo": "https://…" },
///             { "name": "Chelsea", "score": 1, "logo": "https://…" }
///           ]
///         }
///       ]
///     }
///   ]
/// }
/// ```
///
/// `notification` is optional and defaults to false; `score` may be a
/// number or a string.
pub fn parse_dataset(text: &str) -> Result<MatchDataset, DatasetError> {
    let dataset: MatchDataset = serde_json::from_str(text)?;
    validate(&dataset)?;
    Ok(dataset)
}

/// Invariants serde cannot express: two teams per match, unique ids.
fn validate(dataset: &MatchDataset) -> Result<(), DatasetError> {
    let mut sport_ids: HashSet<&str> = HashSet::new();
    let mut match_ids: HashSet<&str> = HashSet::new();

    for sport in &dataset.sports {
        if !sport_ids.insert(&sport.id) {
            return Err(DatasetError::DuplicateSportId {
                id: sport.id.clone(),
            });
        }
        for game in &sport.matches {
            if !match_ids.insert(&game.id) {
                return Err(DatasetError::DuplicateMatchId {
                    id: game.id.clone(),
                });
            }
            if game.teams.len() != 2 {
                return Err(DatasetError::TeamCount {
                    id: game.id.clone(),
                    count: game.teams.len(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Score;

    fn match_json(id: &str, teams: &str) -> String {
        format!(
            r#"{{ "id": "{id}", "competition": "Premier League",
                 "date": "2024-05-01", "time": "FT", "teams": [{teams}] }}"#
        )
    }

    fn sport_json(id: &str, matches: &str) -> String {
        format!(r#"{{ "id": "{id}", "name": "{id}", "matches": [{matches}] }}"#)
    }

    const TWO_TEAMS: &str = r#"
        { "name": "Arsenal", "score": 2, "logo": "https://logos.example/ars.png" },
        { "name": "Chelsea", "score": "1", "logo": "https://logos.example/che.png" }"#;

    #[test]
    fn parses_a_minimal_valid_document() {
        let text = format!(
            r#"{{ "sports": [{}] }}"#,
            sport_json("football", &match_json("f1", TWO_TEAMS))
        );
        let ds = parse_dataset(&text).unwrap();
        assert_eq!(ds.len(), 1);
        let game = &ds.sports[0].matches[0];
        assert_eq!(game.teams[0].score, Score::Integer(2));
        assert_eq!(game.teams[1].score, Score::Text("1".to_string()));
    }

    #[test]
    fn notification_defaults_to_false() {
        let text = format!(
            r#"{{ "sports": [{}] }}"#,
            sport_json("football", &match_json("f1", TWO_TEAMS))
        );
        let ds = parse_dataset(&text).unwrap();
        assert!(!ds.sports[0].matches[0].notification);
    }

    #[test]
    fn missing_required_field_is_a_json_error() {
        // No "date" field on the match.
        let text = r#"{ "sports": [ { "id": "f", "name": "F", "matches": [
            { "id": "f1", "competition": "PL", "time": "FT", "teams": [] }
        ] } ] }"#;
        assert!(matches!(
            parse_dataset(text),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn one_team_is_rejected() {
        let one = r#"{ "name": "Arsenal", "score": 2, "logo": "" }"#;
        let text = format!(
            r#"{{ "sports": [{}] }}"#,
            sport_json("football", &match_json("f1", one))
        );
        match parse_dataset(&text) {
            Err(DatasetError::TeamCount { id, count }) => {
                assert_eq!(id, "f1");
                assert_eq!(count, 1);
            }
            other => panic!("expected TeamCount, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_match_ids_are_rejected_across_sports() {
        let text = format!(
            r#"{{ "sports": [{}, {}] }}"#,
            sport_json("football", &match_json("m1", TWO_TEAMS)),
            sport_json("basketball", &match_json("m1", TWO_TEAMS))
        );
        assert!(matches!(
            parse_dataset(&text),
            Err(DatasetError::DuplicateMatchId { id }) if id == "m1"
        ));
    }

    #[test]
    fn duplicate_sport_ids_are_rejected() {
        let text = format!(
            r#"{{ "sports": [{}, {}] }}"#,
            sport_json("football", &match_json("m1", TWO_TEAMS)),
            sport_json("football", &match_json("m2", TWO_TEAMS))
        );
        assert!(matches!(
            parse_dataset(&text),
            Err(DatasetError::DuplicateSportId { id }) if id == "football"
        ));
    }

    #[test]
    fn sport_with_no_matches_is_valid() {
        let text = r#"{ "sports": [ { "id": "tennis", "name": "Tennis", "matches": [] } ] }"#;
        let ds = parse_dataset(text).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let ds = load_bundled().unwrap();
        assert!(!ds.is_empty());
    }

    #[test]
    fn load_file_reports_missing_files_with_path() {
        let err = load_file(Path::new("/no/such/dataset.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/no/such/dataset.json"));
    }
}
