//! Application-wide constants.

/// Show searched when neither the command line nor the config names one.
pub const DEFAULT_QUERY: &str = "Powerpuff Girls";

/// Default debounce window for the search box, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Fallback cover image URL for shows without one.
pub const FALLBACK_IMAGE_SHOW: &str = "https://placehold.co/600x900/666/white?text=No+Image";

/// Fallback cover image URL for episodes without one.
pub const FALLBACK_IMAGE_EPISODE: &str = "https://placehold.co/600x400/666/white?text=No+Image";
