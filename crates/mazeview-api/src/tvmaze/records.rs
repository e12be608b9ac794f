//! Raw TVMaze API response records and their parse layer.
//!
//! These structures mirror the JSON wire format. Unvalidated response
//! bodies enter the crate only through the parse functions below; domain
//! code never sees a record that has not passed the shape checks. Unknown
//! fields in the payload are ignored.

use serde::Deserialize;
use serde_json::Value;

use super::error::TvMazeError;

/// Image URLs attached to a show or episode.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    /// Medium-resolution image URL.
    pub medium: String,
    /// Original-resolution image URL.
    pub original: String,
}

/// A show as returned by the TVMaze API.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowRecord {
    /// TVMaze show ID.
    pub id: u32,
    /// Show name.
    pub name: String,
    /// Show summary as an HTML fragment (nullable).
    pub summary: Option<String>,
    /// Image URLs (nullable).
    pub image: Option<ImageRecord>,
}

/// An episode as returned by the TVMaze API.
///
/// The payload does not reliably identify the owning show, so no show
/// field is read here; callers supply the show ID from context.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    /// TVMaze episode ID.
    pub id: u32,
    /// Season number.
    pub season: u32,
    /// Episode number within the season.
    pub number: u32,
    /// Episode name.
    pub name: String,
    /// Episode summary as an HTML fragment (nullable).
    pub summary: Option<String>,
    /// Image URLs (nullable).
    pub image: Option<ImageRecord>,
    /// First air date (`YYYY-MM-DD`).
    pub airdate: String,
}

/// One entry of a `/search/shows` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultRecord {
    /// Relevance score assigned by the API (unused; source order wins).
    pub score: f64,
    /// The matched show.
    pub show: ShowRecord,
}

/// Parses a `/search/shows` response body.
///
/// # Errors
///
/// Returns [`TvMazeError::Validation`] when the body is not an array of
/// search results.
pub fn parse_search_results(body: Value) -> Result<Vec<SearchResultRecord>, TvMazeError> {
    serde_json::from_value(body)
        .map_err(|_| TvMazeError::Validation(String::from("expected array of search results")))
}

/// Parses a `/shows/{id}/episodes` response body.
///
/// # Errors
///
/// Returns [`TvMazeError::Validation`] when the body is not an array of
/// episodes.
pub fn parse_episode_list(body: Value) -> Result<Vec<EpisodeRecord>, TvMazeError> {
    serde_json::from_value(body)
        .map_err(|_| TvMazeError::Validation(String::from("expected array of episodes")))
}

/// Parses a single-show response body.
///
/// # Errors
///
/// Returns [`TvMazeError::Validation`] when the body is not a show record.
pub fn parse_show(body: Value) -> Result<ShowRecord, TvMazeError> {
    serde_json::from_value(body)
        .map_err(|_| TvMazeError::Validation(String::from("show data is invalid")))
}

/// Parses a single-episode response body.
///
/// # Errors
///
/// Returns [`TvMazeError::Validation`] when the body is not an episode
/// record.
pub fn parse_episode(body: Value) -> Result<EpisodeRecord, TvMazeError> {
    serde_json::from_value(body)
        .map_err(|_| TvMazeError::Validation(String::from("episode data is invalid")))
}
