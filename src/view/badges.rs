use maud::{Markup, html};

use crate::model::Season;

const CLOSE_MODAL: &str = "document.getElementById('badge-modal').innerHTML = ''";

/// Season-badge modal body for one league. Seasons without a badge image get
/// a placeholder tile instead of a broken img.
#[must_use]
pub fn render_badges_partial(league_name: &str, seasons: &[Season]) -> Markup {
    html! {
        div class="modal-overlay" {
            div class="modal" {
                div class="modal-header" {
                    h2 { (league_name) " badges by season" }
                    button class="modal-close" onclick=(CLOSE_MODAL) { "\u{00d7}" }
                }
                @if seasons.is_empty() {
                    p class="empty-state" { "No seasons found for this league." }
                } @else {
                    div class="badge-grid" {
                        @for season in seasons {
                            div class="badge-card" {
                                @match &season.badge_url {
                                    Some(url) if !url.is_empty() => {
                                        img src=(url) alt=(format!("{} badge", season.label)) loading="lazy";
                                    }
                                    _ => {
                                        div class="badge-placeholder" { "No badge available" }
                                    }
                                }
                                span class="season-label" { (season.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_badges_error() -> Markup {
    html! {
        div class="modal-overlay" {
            div class="modal" {
                div class="modal-header" {
                    h2 { "Error" }
                    button class="modal-close" onclick=(CLOSE_MODAL) { "\u{00d7}" }
                }
                p { "Failed to load season badges. Please try again." }
            }
        }
    }
}
