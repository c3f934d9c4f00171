use crate::model::{Filters, League, SPORT_ALL};

/// Derive the visible league subset from the full listing and the current
/// filter selections. Pure; preserves the input order.
#[must_use]
pub fn filter_leagues(leagues: &[League], filters: &Filters) -> Vec<League> {
    let term = filters.search_term.to_lowercase();

    leagues
        .iter()
        .filter(|league| {
            let matches_search = term.is_empty()
                || league.name.to_lowercase().contains(&term)
                || league
                    .alternate_name
                    .as_ref()
                    .is_some_and(|alt| !alt.is_empty() && alt.to_lowercase().contains(&term));

            let matches_sport =
                filters.sport_type == SPORT_ALL || league.sport == filters.sport_type;

            matches_search && matches_sport
        })
        .cloned()
        .collect()
}

/// Distinct sport values across the full listing, for the sport selector.
/// Empty values are dropped; the rest sort ascending.
#[must_use]
pub fn available_sports(leagues: &[League]) -> Vec<String> {
    let mut sports: Vec<String> = leagues
        .iter()
        .map(|league| league.sport.clone())
        .filter(|sport| !sport.is_empty())
        .collect();
    sports.sort();
    sports.dedup();
    sports
}
