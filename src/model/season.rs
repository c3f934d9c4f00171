use serde::{Deserialize, Serialize};

/// One season of a league from `search_all_seasons.php?badge=1`. `strBadge`
/// is `null` or empty when no badge image exists for that season.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Season {
    #[serde(rename = "idSeason")]
    pub id: String,
    #[serde(rename = "strSeason")]
    pub label: String,
    #[serde(rename = "strBadge")]
    pub badge_url: Option<String>,
    #[serde(rename = "idLeague")]
    pub league_id: String,
}

/// Response envelope for `search_all_seasons.php`. Same missing-field
/// normalization as the leagues listing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SeasonBadgeResponse {
    pub seasons: Option<Vec<Season>>,
}
