use maud::{Markup, html};

use crate::model::{Filters, League, SPORT_ALL};

/// The full `#leagues` partial: filter controls, result count, card grid.
/// Re-rendered wholesale on every filter change, so the controls carry the
/// current selections back out.
#[must_use]
pub fn render_leagues_partial(
    visible: &[League],
    total: usize,
    sports: &[String],
    filters: &Filters,
) -> Markup {
    html! {
        div class="filter-bar" {
            input type="search" name="q" placeholder="Search leagues..."
                value=(filters.search_term)
                hx-get="leagues" hx-target="#leagues" hx-include="closest .filter-bar"
                hx-trigger="input changed delay:300ms, search";
            select name="sport"
                hx-get="leagues" hx-target="#leagues" hx-include="closest .filter-bar" {
                option value=(SPORT_ALL) selected[filters.sport_type == SPORT_ALL] { "All sports" }
                @for sport in sports {
                    option value=(sport) selected[filters.sport_type == *sport] { (sport) }
                }
            }
        }

        div class="result-count" { "Showing " (visible.len()) " of " (total) " leagues" }

        @if visible.is_empty() {
            div class="empty-state" {
                p { "No leagues found matching your criteria." }
                p class="hint" { "Try adjusting your search or filter settings." }
            }
        } @else {
            div class="league-grid" {
                @for league in visible {
                    (render_league_card(league))
                }
            }
        }
    }
}

fn render_league_card(league: &League) -> Markup {
    html! {
        // hx-sync on the shared #leagues element: clicking a second card
        // aborts an in-flight badge request so a slow earlier response can't
        // land after a newer one.
        div class="league-card"
            hx-get=(format!("badges?id={}", league.id))
            hx-target="#badge-modal" hx-swap="innerHTML" hx-sync="#leagues:replace" {
            h3 { (league.name) }
            span class="sport-tag" { (league.sport) }
            @if let Some(alt) = &league.alternate_name {
                @if !alt.is_empty() {
                    p class="alternate-name" { (alt) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_leagues_error() -> Markup {
    html! {
        div class="error-state" {
            div class="error-title" { "Error" }
            p { "Failed to load leagues. Please refresh the page to try again." }
        }
    }
}
