//! TVMaze API client.
//!
//! <https://www.tvmaze.com/api>

/// `TvMazeApi` trait definition.
pub mod api;
/// Response-memoizing wrapper.
pub mod cached;
/// HTTP client implementation.
pub mod client;
/// Error types.
pub mod error;
/// Domain model and record transformers.
pub mod model;
/// Request rate limiter.
pub mod rate_limiter;
/// Raw API response records and their parse layer.
pub mod records;
/// Client-side episode search filter.
pub mod search;

pub use api::{LocalTvMazeApi, TvMazeApi};
pub use cached::CachedTvMaze;
pub use client::{TvMazeClient, TvMazeClientBuilder};
pub use error::TvMazeError;
pub use model::{Episode, Show};
pub use search::filter_episodes;
