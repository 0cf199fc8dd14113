use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CompanionConfig;
use crate::ui::scoreboard::GameId;

use super::clock::query_date;
use super::plays::LiveFeed;
use super::schedule::Schedule;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the stats API.
#[derive(Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &CompanionConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(FetchError::Build)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn schedule_url(&self, date: NaiveDate) -> String {
        let date = query_date(date);
        format!(
            "{}/schedule?startDate={date}&endDate={date}&expand=schedule.teams,schedule.linescore&site=en_nhl",
            self.base_url
        )
    }

    pub fn live_feed_url(&self, game_id: GameId) -> String {
        format!("{}/game/{game_id}/feed/live", self.base_url)
    }

    pub async fn schedule(&self, date: NaiveDate) -> Result<Schedule, FetchError> {
        self.get_json(self.schedule_url(date)).await
    }

    pub async fn live_feed(&self, game_id: GameId) -> Result<LiveFeed, FetchError> {
        self.get_json(self.live_feed_url(game_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        tracing::debug!(%url, "fetching");
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Request { url, source }),
        };
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Request { url, source }),
        };
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> StatsClient {
        StatsClient::new(&CompanionConfig {
            base_url: base_url.to_string(),
            ..CompanionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn schedule_url_uses_one_day_window() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 6).unwrap();
        assert_eq!(
            client("https://stats.example/api/v1/").schedule_url(date),
            "https://stats.example/api/v1/schedule?startDate=2023-10-06&endDate=2023-10-06&expand=schedule.teams,schedule.linescore&site=en_nhl"
        );
    }

    #[test]
    fn live_feed_url() {
        assert_eq!(
            client("https://stats.example/api/v1").live_feed_url(2023020001),
            "https://stats.example/api/v1/game/2023020001/feed/live"
        );
    }
}
