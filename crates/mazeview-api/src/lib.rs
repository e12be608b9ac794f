//! API client library for mazeview.
//!
//! Provides a typed TVMaze client, the application domain model, and the
//! client-side episode search filter.

/// TVMaze API client.
pub mod tvmaze;
