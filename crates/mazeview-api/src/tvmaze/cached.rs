//! Response-memoizing wrapper around a TVMaze API implementation.
#![allow(clippy::future_not_send)]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::api::LocalTvMazeApi;
use super::error::TvMazeError;
use super::model::{Episode, Show};

/// Freshness window for search results (5 minutes).
const FRESH_SEARCH: Duration = Duration::from_secs(5 * 60);

/// Freshness window for show lookups (30 minutes).
const FRESH_SHOW: Duration = Duration::from_secs(30 * 60);

/// Freshness window for episode data (60 minutes).
const FRESH_EPISODES: Duration = Duration::from_secs(60 * 60);

/// A memoized value with its fetch timestamp.
#[derive(Debug, Clone)]
struct Entry<T> {
    /// When the value was fetched.
    fetched_at: Instant,
    /// The memoized response.
    value: T,
}

impl<T: Clone> Entry<T> {
    /// Records a freshly fetched value.
    fn record(value: T) -> Self {
        Self {
            fetched_at: Instant::now(),
            value,
        }
    }

    /// Returns the value while the entry is within its freshness window.
    fn fresh(&self, window: Duration) -> Option<T> {
        (self.fetched_at.elapsed() < window).then(|| self.value.clone())
    }
}

/// Memoized responses, keyed per operation by its argument.
#[derive(Debug, Default)]
struct Store {
    /// `search_show` responses by query.
    search: HashMap<String, Entry<Option<Show>>>,
    /// `show_episodes` responses by show ID.
    episodes: HashMap<u32, Entry<Vec<Episode>>>,
    /// `show_details` responses by show ID.
    shows: HashMap<u32, Entry<Show>>,
    /// `episode_details` responses by (episode ID, show ID).
    episode_details: HashMap<(u32, u32), Entry<Option<Episode>>>,
}

/// Memoizing wrapper around a [`LocalTvMazeApi`] implementation.
///
/// Successful responses are kept in memory and reused while fresh; expired
/// entries are refetched. Errors are never stored, so a failed call is
/// retried on the next request. Two concurrent calls for the same resource
/// still issue two independent requests — there is no in-flight
/// deduplication.
#[derive(Debug)]
pub struct CachedTvMaze<A> {
    /// The wrapped API implementation.
    inner: A,
    /// Memoized responses.
    store: Mutex<Store>,
}

impl<A> CachedTvMaze<A> {
    /// Wraps the given API implementation.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            store: Mutex::new(Store::default()),
        }
    }
}

impl<A: LocalTvMazeApi> LocalTvMazeApi for CachedTvMaze<A> {
    async fn search_show(&self, query: &str) -> Result<Option<Show>, TvMazeError> {
        let hit = self
            .store
            .lock()
            .await
            .search
            .get(query)
            .and_then(|entry| entry.fresh(FRESH_SEARCH));
        if let Some(show) = hit {
            tracing::debug!(query, "search cache hit");
            return Ok(show);
        }

        let show = self.inner.search_show(query).await?;
        self.store
            .lock()
            .await
            .search
            .insert(String::from(query), Entry::record(show.clone()));
        Ok(show)
    }

    async fn show_episodes(&self, show_id: u32) -> Result<Vec<Episode>, TvMazeError> {
        let hit = self
            .store
            .lock()
            .await
            .episodes
            .get(&show_id)
            .and_then(|entry| entry.fresh(FRESH_EPISODES));
        if let Some(episodes) = hit {
            tracing::debug!(show_id, "episode list cache hit");
            return Ok(episodes);
        }

        let episodes = self.inner.show_episodes(show_id).await?;
        self.store
            .lock()
            .await
            .episodes
            .insert(show_id, Entry::record(episodes.clone()));
        Ok(episodes)
    }

    async fn show_details(&self, show_id: u32) -> Result<Show, TvMazeError> {
        let hit = self
            .store
            .lock()
            .await
            .shows
            .get(&show_id)
            .and_then(|entry| entry.fresh(FRESH_SHOW));
        if let Some(show) = hit {
            tracing::debug!(show_id, "show details cache hit");
            return Ok(show);
        }

        let show = self.inner.show_details(show_id).await?;
        self.store
            .lock()
            .await
            .shows
            .insert(show_id, Entry::record(show.clone()));
        Ok(show)
    }

    async fn episode_details(
        &self,
        episode_id: u32,
        show_id: u32,
    ) -> Result<Option<Episode>, TvMazeError> {
        let key = (episode_id, show_id);
        let hit = self
            .store
            .lock()
            .await
            .episode_details
            .get(&key)
            .and_then(|entry| entry.fresh(FRESH_EPISODES));
        if let Some(episode) = hit {
            tracing::debug!(episode_id, "episode details cache hit");
            return Ok(episode);
        }

        let episode = self.inner.episode_details(episode_id, show_id).await?;
        self.store
            .lock()
            .await
            .episode_details
            .insert(key, Entry::record(episode.clone()));
        Ok(episode)
    }
}
