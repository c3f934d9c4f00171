/// Sentinel sport value meaning "don't filter by sport".
pub const SPORT_ALL: &str = "all";

/// Current filter selections. Recomputed derived view on every change; no
/// persistence of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring matched against league name and alternate
    /// name. Matched literally, including whitespace (no trimming).
    pub search_term: String,
    /// Either [`SPORT_ALL`] or an exact sport value from the league set.
    pub sport_type: String,
}

impl Default for Filters {
    fn default() -> Self {
        Filters {
            search_term: String::new(),
            sport_type: SPORT_ALL.to_string(),
        }
    }
}
