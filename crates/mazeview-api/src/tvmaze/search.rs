//! Client-side episode search filter.

use super::model::Episode;

/// Returns true when the episode's title or summary contains `needle`,
/// which must already be lower-cased.
#[must_use]
pub fn episode_matches(episode: &Episode, needle: &str) -> bool {
    episode.title.to_lowercase().contains(needle)
        || episode.summary.to_lowercase().contains(needle)
}

/// Filters episodes whose title or summary contains the query as a
/// case-insensitive substring.
///
/// An empty or whitespace-only query returns the full list. The result is
/// an order-preserving subsequence of the input; matches are not re-ranked
/// by quality.
#[must_use]
pub fn filter_episodes<'a>(episodes: &'a [Episode], query: &str) -> Vec<&'a Episode> {
    if query.trim().is_empty() {
        return episodes.iter().collect();
    }

    let needle = query.to_lowercase();
    episodes
        .iter()
        .filter(|episode| episode_matches(episode, &needle))
        .collect()
}
