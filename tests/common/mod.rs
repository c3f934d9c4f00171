#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer, Responder};
use chrono::{DateTime, Utc};

use rusty_leagues::controller::cache::Clock;

/// Canned bodies the stub catalog serves. `seasons_body: None` means "echo
/// the requested league id into a one-season payload", which lets cache-key
/// isolation tests tell responses apart.
#[derive(Clone)]
pub struct StubResponses {
    pub leagues_status: u16,
    pub leagues_body: String,
    pub seasons_status: u16,
    pub seasons_body: Option<String>,
}

impl Default for StubResponses {
    fn default() -> Self {
        StubResponses {
            leagues_status: 200,
            leagues_body: sample_leagues_json(),
            seasons_status: 200,
            seasons_body: None,
        }
    }
}

#[derive(Default)]
pub struct Counters {
    pub leagues: AtomicUsize,
    pub seasons: AtomicUsize,
}

/// The four-league fixture from TheSportsDB's wire shape.
pub fn sample_leagues_json() -> String {
    r#"{"leagues":[
        {"idLeague":"4328","strLeague":"Premier League","strSport":"Soccer","strLeagueAlternate":"English Premier League"},
        {"idLeague":"4387","strLeague":"NBA","strSport":"Basketball","strLeagueAlternate":"National Basketball Association"},
        {"idLeague":"4335","strLeague":"La Liga","strSport":"Soccer","strLeagueAlternate":"Spanish La Liga"},
        {"idLeague":"4370","strLeague":"Formula 1","strSport":"Motorsport","strLeagueAlternate":"F1"}
    ]}"#
    .to_string()
}

/// Binds a stub TheSportsDB on a free local port and returns its base url
/// plus per-endpoint hit counters.
pub async fn spawn_catalog_stub(
    responses: StubResponses,
) -> Result<(String, Arc<Counters>), Box<dyn std::error::Error>> {
    let counters = Arc::new(Counters::default());
    let counters_for_app = counters.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(responses.clone()))
            .app_data(Data::from(counters_for_app.clone()))
            .route("/all_leagues.php", web::get().to(all_leagues))
            .route("/search_all_seasons.php", web::get().to(all_seasons))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let port = server.addrs()[0].port();
    tokio::spawn(server.run());

    Ok((format!("http://127.0.0.1:{port}"), counters))
}

async fn all_leagues(responses: Data<StubResponses>, counters: Data<Counters>) -> impl Responder {
    counters.leagues.fetch_add(1, Ordering::SeqCst);
    HttpResponse::build(StatusCode::from_u16(responses.leagues_status).unwrap())
        .content_type("application/json")
        .body(responses.leagues_body.clone())
}

async fn all_seasons(
    query: web::Query<HashMap<String, String>>,
    responses: Data<StubResponses>,
    counters: Data<Counters>,
) -> impl Responder {
    counters.seasons.fetch_add(1, Ordering::SeqCst);
    let id = query.get("id").cloned().unwrap_or_default();
    let body = responses.seasons_body.clone().unwrap_or_else(|| {
        format!(
            r#"{{"seasons":[{{"idSeason":"s-{id}","strSeason":"2023-2024","strBadge":"https://example.com/badge-{id}.png","idLeague":"{id}"}}]}}"#
        )
    });
    HttpResponse::build(StatusCode::from_u16(responses.seasons_status).unwrap())
        .content_type("application/json")
        .body(body)
}

/// A clock whose "now" the test moves by hand, for deterministic TTL checks.
pub fn manual_clock(start: DateTime<Utc>) -> (Clock, Arc<Mutex<DateTime<Utc>>>) {
    let now = Arc::new(Mutex::new(start));
    let now_for_clock = now.clone();
    let clock: Clock = Arc::new(move || *now_for_clock.lock().unwrap());
    (clock, now)
}

pub fn advance(now: &Arc<Mutex<DateTime<Utc>>>, by: chrono::Duration) {
    let mut guard = now.lock().unwrap();
    *guard += by;
}
