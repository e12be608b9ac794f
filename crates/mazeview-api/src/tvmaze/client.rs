//! `TvMazeClient` - TVMaze API client implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::LocalTvMazeApi;
use super::error::TvMazeError;
use super::model::{Episode, Show};
use super::rate_limiter::TvMazeRateLimiter;
use super::records::{parse_episode, parse_episode_list, parse_search_results, parse_show};

/// Default base URL for the TVMaze API.
const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com/";

/// TVMaze API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvMazeClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Rate limiter.
    rate_limiter: Arc<Mutex<TvMazeRateLimiter>>,
}

/// Builder for `TvMazeClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvMazeClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl TvMazeClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            min_interval: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 500ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvMazeClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let rate_limiter = self
            .min_interval
            .map_or_else(TvMazeRateLimiter::default_interval, TvMazeRateLimiter::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TvMazeClient {
            http_client,
            base_url,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        })
    }
}

impl TvMazeClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvMazeClientBuilder {
        TvMazeClientBuilder::new()
    }

    /// Sends a GET request after the rate limiter clears.
    ///
    /// Transport failures map to [`TvMazeError::Network`]. The HTTP status
    /// is left for the caller to interpret.
    #[instrument(skip_all)]
    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, TvMazeError> {
        self.rate_limiter.lock().await.wait().await;

        let url = self
            .base_url
            .join(path)
            .map_err(|_| TvMazeError::Validation(format!("invalid request path: {path}")))?;

        tracing::debug!(%url, "TVMaze API request");

        let mut request = self.http_client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }

    /// Sends a GET request and returns the JSON body of a success response.
    async fn get_value(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, TvMazeError> {
        let response = self.get(path, query).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvMazeError::Request {
                status: status_text(status),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch + validate + transform for [`LocalTvMazeApi::search_show`].
    async fn fetch_search(&self, query: &str) -> Result<Option<Show>, TvMazeError> {
        let body = self.get_value("search/shows", &[("q", query)]).await?;
        let results = parse_search_results(body)?;
        Ok(results
            .into_iter()
            .next()
            .map(|result| Show::from_record(result.show)))
    }

    /// Fetch + validate + transform for [`LocalTvMazeApi::show_episodes`].
    async fn fetch_episodes(&self, show_id: u32) -> Result<Vec<Episode>, TvMazeError> {
        let body = self
            .get_value(&format!("shows/{show_id}/episodes"), &[])
            .await?;
        let records = parse_episode_list(body)?;
        Ok(records
            .into_iter()
            .map(|record| Episode::from_record(record, show_id))
            .collect())
    }

    /// Fetch + validate + transform for [`LocalTvMazeApi::show_details`].
    async fn fetch_show(&self, show_id: u32) -> Result<Show, TvMazeError> {
        let body = self.get_value(&format!("shows/{show_id}"), &[]).await?;
        Ok(Show::from_record(parse_show(body)?))
    }

    /// Fetch + validate + transform for [`LocalTvMazeApi::episode_details`].
    ///
    /// A 404 is the resource's not-found state and yields `None`; other
    /// non-success statuses are request failures.
    async fn fetch_episode(
        &self,
        episode_id: u32,
        show_id: u32,
    ) -> Result<Option<Episode>, TvMazeError> {
        let response = self.get(&format!("episodes/{episode_id}"), &[]).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(TvMazeError::Request {
                status: status_text(status),
            });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(Some(Episode::from_record(parse_episode(body)?, show_id)))
    }
}

/// Formats a status line like "404 Not Found".
fn status_text(status: reqwest::StatusCode) -> String {
    format!(
        "{} {}",
        status.as_str(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

impl LocalTvMazeApi for TvMazeClient {
    #[instrument(skip_all)]
    async fn search_show(&self, query: &str) -> Result<Option<Show>, TvMazeError> {
        self.fetch_search(query)
            .await
            .inspect_err(|error| tracing::error!(%error, query, "show search failed"))
    }

    #[instrument(skip_all)]
    async fn show_episodes(&self, show_id: u32) -> Result<Vec<Episode>, TvMazeError> {
        self.fetch_episodes(show_id)
            .await
            .inspect_err(|error| tracing::error!(%error, show_id, "episode list fetch failed"))
    }

    #[instrument(skip_all)]
    async fn show_details(&self, show_id: u32) -> Result<Show, TvMazeError> {
        self.fetch_show(show_id)
            .await
            .inspect_err(|error| tracing::error!(%error, show_id, "show details fetch failed"))
    }

    #[instrument(skip_all)]
    async fn episode_details(
        &self,
        episode_id: u32,
        show_id: u32,
    ) -> Result<Option<Episode>, TvMazeError> {
        self.fetch_episode(episode_id, show_id)
            .await
            .inspect_err(|error| {
                tracing::error!(%error, episode_id, "episode details fetch failed");
            })
    }
}
