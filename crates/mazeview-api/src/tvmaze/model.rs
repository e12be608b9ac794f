//! Domain model for shows and episodes.
//!
//! Domain values are built exclusively from validated records by the
//! `from_record` transformers and are immutable afterwards.

use super::records::{EpisodeRecord, ShowRecord};

/// Description substituted when a show has none.
pub const DEFAULT_SHOW_DESCRIPTION: &str = "No description available.";

/// Summary substituted when an episode has none.
pub const DEFAULT_EPISODE_SUMMARY: &str = "No summary available.";

/// A TV show in the application domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// TVMaze show ID.
    pub id: u32,
    /// Show title.
    pub title: String,
    /// Description. Never empty; defaulted when the source has none.
    pub description: String,
    /// Original-resolution cover image URL, if any.
    pub cover_image: Option<String>,
}

impl Show {
    /// Builds a `Show` from a validated API record.
    #[must_use]
    pub fn from_record(record: ShowRecord) -> Self {
        Self {
            id: record.id,
            title: record.name,
            description: non_empty_or(record.summary, DEFAULT_SHOW_DESCRIPTION),
            cover_image: record.image.map(|image| image.original),
        }
    }
}

/// An episode in the application domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// TVMaze episode ID.
    pub id: u32,
    /// Owning show ID. Always the caller-supplied value, never read from
    /// the episode payload.
    pub show_id: u32,
    /// Season number.
    pub season: u32,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode title.
    pub title: String,
    /// Summary. Never empty; defaulted when the source has none.
    pub summary: String,
    /// Original-resolution cover image URL, if any.
    pub cover_image: Option<String>,
    /// First air date (`YYYY-MM-DD`).
    pub airdate: String,
}

impl Episode {
    /// Builds an `Episode` from a validated API record.
    ///
    /// `show_id` comes from the calling context; the episode resource does
    /// not reliably carry its owning show.
    #[must_use]
    pub fn from_record(record: EpisodeRecord, show_id: u32) -> Self {
        Self {
            id: record.id,
            show_id,
            season: record.season,
            episode_number: record.number,
            title: record.name,
            summary: non_empty_or(record.summary, DEFAULT_EPISODE_SUMMARY),
            cover_image: record.image.map(|image| image.original),
            airdate: record.airdate,
        }
    }
}

/// Returns the value when it is a non-empty string, the default otherwise.
fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => String::from(default),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::tvmaze::records::ImageRecord;

    fn show_record(summary: Option<&str>, image: Option<ImageRecord>) -> ShowRecord {
        ShowRecord {
            id: 1955,
            name: String::from("The Powerpuff Girls"),
            summary: summary.map(String::from),
            image,
        }
    }

    fn image_record() -> ImageRecord {
        ImageRecord {
            medium: String::from("https://static.tvmaze.com/m.jpg"),
            original: String::from("https://static.tvmaze.com/o.jpg"),
        }
    }

    #[test]
    fn test_show_from_record_maps_name_to_title() {
        // Arrange
        let record = show_record(Some("<p>Sugar and spice.</p>"), Some(image_record()));

        // Act
        let show = Show::from_record(record);

        // Assert
        assert_eq!(show.id, 1955);
        assert_eq!(show.title, "The Powerpuff Girls");
        assert_eq!(show.description, "<p>Sugar and spice.</p>");
        assert_eq!(
            show.cover_image.as_deref(),
            Some("https://static.tvmaze.com/o.jpg")
        );
    }

    #[test]
    fn test_show_null_summary_gets_default_description() {
        // Arrange & Act
        let show = Show::from_record(show_record(None, None));

        // Assert
        assert_eq!(show.description, DEFAULT_SHOW_DESCRIPTION);
    }

    #[test]
    fn test_show_empty_summary_gets_default_description() {
        // Arrange & Act
        let show = Show::from_record(show_record(Some(""), None));

        // Assert
        assert_eq!(show.description, DEFAULT_SHOW_DESCRIPTION);
    }

    #[test]
    fn test_show_null_image_maps_to_none() {
        // Arrange & Act
        let show = Show::from_record(show_record(Some("x"), None));

        // Assert
        assert!(show.cover_image.is_none());
    }

    #[test]
    fn test_episode_from_record_uses_supplied_show_id() {
        // Arrange
        let record = EpisodeRecord {
            id: 9,
            season: 1,
            number: 2,
            name: String::from("Monkey See, Doggie Do"),
            summary: Some(String::from("<p>Dogs everywhere.</p>")),
            image: None,
            airdate: String::from("1998-11-18"),
        };

        // Act
        let episode = Episode::from_record(record, 1955);

        // Assert
        assert_eq!(episode.id, 9);
        assert_eq!(episode.show_id, 1955);
        assert_eq!(episode.season, 1);
        assert_eq!(episode.episode_number, 2);
        assert_eq!(episode.title, "Monkey See, Doggie Do");
        assert_eq!(episode.airdate, "1998-11-18");
    }

    #[test]
    fn test_episode_blank_summary_gets_default() {
        // Arrange
        let record = EpisodeRecord {
            id: 10,
            season: 1,
            number: 3,
            name: String::from("Insect Inside"),
            summary: None,
            image: None,
            airdate: String::from("1998-11-25"),
        };

        // Act
        let episode = Episode::from_record(record, 1955);

        // Assert
        assert_eq!(episode.summary, DEFAULT_EPISODE_SUMMARY);
        assert!(episode.cover_image.is_none());
    }

    #[test]
    fn test_transform_is_pure() {
        // Arrange
        let a = Show::from_record(show_record(Some("x"), Some(image_record())));
        let b = Show::from_record(show_record(Some("x"), Some(image_record())));

        // Assert: same input, same output, no hidden state
        assert_eq!(a, b);
    }
}
