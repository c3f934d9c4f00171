use serde::{Deserialize, Serialize};

/// One league from the catalog's `all_leagues.php` listing. Field names on
/// the wire are TheSportsDB's (`idLeague`, `strLeague`, ...); `strLeagueAlternate`
/// comes back as `null` for some leagues, hence the `Option`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    #[serde(rename = "strLeague")]
    pub name: String,
    #[serde(rename = "strSport")]
    pub sport: String,
    #[serde(rename = "strLeagueAlternate")]
    pub alternate_name: Option<String>,
}

/// Response envelope for `all_leagues.php`. A `200` body of `{}` deserializes
/// with `leagues: None` and callers treat that as an empty list.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AllLeaguesResponse {
    pub leagues: Option<Vec<League>>,
}
