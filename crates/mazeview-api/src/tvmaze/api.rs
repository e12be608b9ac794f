//! `TvMazeApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::TvMazeError;
use super::model::{Episode, Show};

/// TVMaze API trait.
///
/// Abstracts the four read operations for mock substitution in tests and
/// for the memoizing wrapper. Uses `trait_variant::make` to generate a
/// `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvMazeApi: Send)]
pub trait LocalTvMazeApi {
    /// Searches for a show and returns the first match in source order, or
    /// `None` when the search yields no results.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response body does
    /// not match the expected shape.
    async fn search_show(&self, query: &str) -> Result<Option<Show>, TvMazeError>;

    /// Fetches all episodes of a show. Every returned episode carries the
    /// supplied `show_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response body does
    /// not match the expected shape.
    async fn show_episodes(&self, show_id: u32) -> Result<Vec<Episode>, TvMazeError>;

    /// Fetches details for a single show.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response body does
    /// not match the expected shape.
    async fn show_details(&self, show_id: u32) -> Result<Show, TvMazeError>;

    /// Fetches a single episode, or `None` when it does not exist.
    ///
    /// `show_id` is caller-supplied context (e.g. from navigation state);
    /// it is not derivable from the episode resource alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails (other than a plain
    /// not-found) or the response body does not match the expected shape.
    async fn episode_details(
        &self,
        episode_id: u32,
        show_id: u32,
    ) -> Result<Option<Episode>, TvMazeError>;
}
