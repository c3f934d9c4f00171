use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::controller::catalog::CatalogClient;
use crate::controller::filter::{available_sports, filter_leagues};
use crate::model::{Filters, SPORT_ALL};
use crate::view;

/// `GET /leagues?q=<term>&sport=<sport>` — the filterable league listing
/// partial. Fetch failures render an error partial rather than a bare 5xx so
/// htmx swaps something the user can act on.
pub async fn leagues(
    query: web::Query<HashMap<String, String>>,
    client: Data<CatalogClient>,
) -> impl Responder {
    let sport = query.get("sport").cloned().unwrap_or_default();
    let filters = Filters {
        search_term: query.get("q").cloned().unwrap_or_default(),
        sport_type: if sport.is_empty() {
            SPORT_ALL.to_string()
        } else {
            sport
        },
    };

    let all_leagues = match client.list_leagues().await {
        Ok(leagues) => leagues,
        Err(e) => {
            eprintln!("Error fetching leagues: {e}");
            return HttpResponse::Ok()
                .content_type("text/html")
                .body(view::leagues::render_leagues_error().into_string());
        }
    };

    let sports = available_sports(&all_leagues);
    let visible = filter_leagues(&all_leagues, &filters);

    let markup =
        view::leagues::render_leagues_partial(&visible, all_leagues.len(), &sports, &filters);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// `GET /badges?id=<leagueId>` — the season-badge modal partial for one
/// league. The header name comes from the (cached) league listing so the
/// card doesn't have to round-trip it through the query string.
pub async fn badges(
    query: web::Query<HashMap<String, String>>,
    client: Data<CatalogClient>,
) -> impl Responder {
    let league_id = query
        .get("id")
        .unwrap_or(&String::new())
        .trim()
        .to_string();
    if league_id.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "id parameter is required"}));
    }

    let league_name = match client.list_leagues().await {
        Ok(leagues) => leagues
            .iter()
            .find(|league| league.id == league_id)
            .map(|league| league.name.clone()),
        Err(_) => None,
    }
    .unwrap_or_else(|| "League".to_string());

    match client.list_season_badges(&league_id).await {
        Ok(seasons) => {
            let markup = view::badges::render_badges_partial(&league_name, &seasons);
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => {
            eprintln!("Error fetching season badges: {e}");
            HttpResponse::Ok()
                .content_type("text/html")
                .body(view::badges::render_badges_error().into_string())
        }
    }
}
