/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  assets/data.json (or File → Open…)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → MatchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MatchDataset  │  sports → matches → teams
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the selection → visible match keys
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
