use reqwest::Client;

use crate::controller::cache::{
    ALL_LEAGUES_KEY, CachedPayload, ResponseCache, season_badges_key,
};
use crate::error::CatalogError;
use crate::model::{AllLeaguesResponse, League, Season, SeasonBadgeResponse};

pub const DEFAULT_API_BASE: &str = "https://www.thesportsdb.com/api/v1/json/3";

/// Read-only client for TheSportsDB catalog. Both operations check the
/// [`ResponseCache`] first and write it only on success, so failed fetches
/// never mask a later retry.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    cache: ResponseCache,
}

impl CatalogClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_cache(base_url, ResponseCache::new())
    }

    #[must_use]
    pub fn with_cache(base_url: impl Into<String>, cache: ResponseCache) -> Self {
        CatalogClient {
            http: Client::new(),
            base_url: base_url.into(),
            cache,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetch the full league listing, served from cache while fresh.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the catalog api call fails; a parseable body with
    /// no `leagues` field is not an error and yields an empty list.
    pub async fn list_leagues(&self) -> Result<Vec<League>, CatalogError> {
        if let Some(CachedPayload::Leagues(leagues)) = self.cache.get(ALL_LEAGUES_KEY).await {
            return Ok(leagues);
        }

        let url = format!("{}/all_leagues.php", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Remote {
                resource: "leagues",
                status: resp.status().as_u16(),
            });
        }

        let body: AllLeaguesResponse = resp.json().await?;
        let leagues = body.leagues.unwrap_or_default();

        self.cache
            .set(ALL_LEAGUES_KEY, CachedPayload::Leagues(leagues.clone()))
            .await;

        Ok(leagues)
    }

    /// Fetch the per-season badge listing for one league, served from cache
    /// while fresh. Each league id gets its own cache entry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the catalog api call fails; a parseable body with
    /// no `seasons` field is not an error and yields an empty list.
    pub async fn list_season_badges(&self, league_id: &str) -> Result<Vec<Season>, CatalogError> {
        let key = season_badges_key(league_id);
        if let Some(CachedPayload::Seasons(seasons)) = self.cache.get(&key).await {
            return Ok(seasons);
        }

        let url = format!(
            "{}/search_all_seasons.php?badge=1&id={}",
            self.base_url, league_id
        );
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Remote {
                resource: "season badges",
                status: resp.status().as_u16(),
            });
        }

        let body: SeasonBadgeResponse = resp.json().await?;
        let seasons = body.seasons.unwrap_or_default();

        self.cache
            .set(&key, CachedPayload::Seasons(seasons.clone()))
            .await;

        Ok(seasons)
    }
}
