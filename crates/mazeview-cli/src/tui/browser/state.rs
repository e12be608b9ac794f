//! Browse TUI state management.

use std::time::Duration;

use ratatui::widgets::TableState;

use crate::debounce::Debouncer;
use mazeview_api::tvmaze::model::{Episode, Show};
use mazeview_api::tvmaze::search::episode_matches;

/// Current page of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Show overview with the episode list.
    Show,
    /// Detail view of one episode.
    EpisodeDetail,
}

/// Input mode on the show page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Search text input mode.
    Search,
}

/// State for the browse TUI.
pub struct BrowserState {
    /// The show being browsed.
    pub show: Show,
    /// All episodes of the show.
    pub episodes: Vec<Episode>,
    /// Current page.
    pub page: Page,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Live search input text (pre-debounce).
    pub query: String,
    /// Coalesces keystrokes into one filter application.
    debouncer: Debouncer<String>,
    /// The query the filter currently reflects.
    applied_query: String,
    /// Table state for the episode list (handles selection and scroll).
    pub table_state: TableState,
    /// Cached filtered episode indices.
    filtered_indices: Vec<usize>,
    /// Index (into `episodes`) of the episode on the detail page.
    detail_index: Option<usize>,
}

impl BrowserState {
    /// Creates a new state from a show and its episodes.
    #[must_use]
    pub fn new(show: Show, episodes: Vec<Episode>, debounce_wait: Duration) -> Self {
        let filtered_indices: Vec<usize> = (0..episodes.len()).collect();
        let mut table_state = TableState::default();
        if !episodes.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            show,
            episodes,
            page: Page::Show,
            input_mode: InputMode::Normal,
            query: String::new(),
            debouncer: Debouncer::new(debounce_wait),
            applied_query: String::new(),
            table_state,
            filtered_indices,
            detail_index: None,
        }
    }

    /// Returns the episode list cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Returns filtered episode indices.
    #[must_use]
    pub fn filtered_episodes(&self) -> &[usize] {
        &self.filtered_indices
    }

    /// Returns the episode under the cursor (if any).
    #[must_use]
    pub fn current_episode(&self) -> Option<&Episode> {
        let idx = self.filtered_indices.get(self.cursor())?;
        self.episodes.get(*idx)
    }

    /// Moves the cursor up.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_up(&mut self) {
        let current = self.cursor();
        if current > 0 {
            self.table_state.select(Some(current - 1));
        }
    }

    /// Moves the cursor down.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        let current = self.cursor();
        if current + 1 < self.filtered_indices.len() {
            self.table_state.select(Some(current + 1));
        }
    }

    /// Scrolls up by a page.
    pub fn page_up(&mut self, page_size: usize) {
        self.table_state
            .select(Some(self.cursor().saturating_sub(page_size)));
    }

    /// Scrolls down by a page.
    pub fn page_down(&mut self, page_size: usize) {
        let max = self.filtered_indices.len().saturating_sub(1);
        self.table_state
            .select(Some(self.cursor().saturating_add(page_size).min(max)));
    }

    /// Appends a character to the search input.
    pub fn search_push(&mut self, ch: char) {
        self.query.push(ch);
        self.schedule_filter();
    }

    /// Removes the last character from the search input.
    pub fn search_pop(&mut self) {
        self.query.pop();
        self.schedule_filter();
    }

    /// Clears the search input and applies the empty filter immediately.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.apply_filter(String::new());
    }

    /// Schedules a filter application for the current input.
    ///
    /// An emptied input applies immediately and drops any pending
    /// application; anything else waits out the debounce window.
    fn schedule_filter(&mut self) {
        if self.query.trim().is_empty() {
            self.debouncer.cancel();
            self.apply_filter(self.query.clone());
        } else {
            self.debouncer.call(self.query.clone());
        }
    }

    /// Delivers a due debounced filter application. Call once per event
    /// loop tick.
    pub fn tick(&mut self) {
        if let Some(query) = self.debouncer.poll() {
            self.apply_filter(query);
        }
    }

    /// Returns true while a filter application awaits its debounce window.
    #[must_use]
    pub const fn searching(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Returns the query the filter currently reflects.
    #[must_use]
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    /// Applies the query and rebuilds the filtered indices cache.
    fn apply_filter(&mut self, query: String) {
        self.applied_query = query;
        self.rebuild_filter_cache();
        if self.filtered_indices.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// Rebuilds the filtered episode indices cache.
    fn rebuild_filter_cache(&mut self) {
        if self.applied_query.trim().is_empty() {
            self.filtered_indices = (0..self.episodes.len()).collect();
        } else {
            let needle = self.applied_query.to_lowercase();
            self.filtered_indices = self
                .episodes
                .iter()
                .enumerate()
                .filter(|(_, episode)| episode_matches(episode, &needle))
                .map(|(i, _)| i)
                .collect();
        }
    }

    /// Opens the detail page for the episode under the cursor.
    pub fn open_detail(&mut self) {
        let Some(&idx) = self.filtered_indices.get(self.cursor()) else {
            return;
        };
        self.detail_index = Some(idx);
        self.page = Page::EpisodeDetail;
    }

    /// Returns to the show page. The episode list cursor is left where it
    /// was, so focus lands back on the episode that was opened.
    pub fn close_detail(&mut self) {
        self.detail_index = None;
        self.page = Page::Show;
    }

    /// Returns the episode shown on the detail page.
    #[must_use]
    pub fn detail_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.detail_index?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn make_episode(id: u32, title: &str, summary: &str) -> Episode {
        Episode {
            id,
            show_id: 1955,
            season: 1,
            episode_number: id,
            title: String::from(title),
            summary: String::from(summary),
            cover_image: None,
            airdate: String::from("1998-11-18"),
        }
    }

    fn make_state(debounce_wait: Duration) -> BrowserState {
        let show = Show {
            id: 1955,
            title: String::from("The Powerpuff Girls"),
            description: String::from("<p>Sugar, spice, and everything nice.</p>"),
            cover_image: None,
        };
        let episodes = vec![
            make_episode(1, "Monkey See, Doggie Do", "Mojo Jojo hypnotizes Townsville."),
            make_episode(2, "Insect Inside", "Roach Coach and his roaches."),
            make_episode(3, "Octi Evil", "Him turns a toy against the girls."),
        ];
        BrowserState::new(show, episodes, debounce_wait)
    }

    #[test]
    fn test_initial_state() {
        // Arrange & Act
        let state = make_state(Duration::ZERO);

        // Assert
        assert_eq!(state.page, Page::Show);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filtered_episodes().len(), 3);
        assert_eq!(state.cursor(), 0);
        assert!(!state.searching());
    }

    #[test]
    fn test_move_down_and_up() {
        // Arrange
        let mut state = make_state(Duration::ZERO);

        // Act & Assert
        state.move_down();
        assert_eq!(state.cursor(), 1);

        state.move_down();
        state.move_down(); // at end, should not move
        assert_eq!(state.cursor(), 2);

        state.move_up();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_page_up_and_page_down_clamp() {
        // Arrange
        let mut state = make_state(Duration::ZERO);

        // Act
        state.page_down(10);

        // Assert: clamped to last item
        assert_eq!(state.cursor(), 2);

        // Act
        state.page_up(10);

        // Assert
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_debounced_filter_applies_on_tick() {
        // Arrange: zero wait delivers on the next tick
        let mut state = make_state(Duration::ZERO);

        // Act
        state.search_push('m');
        state.search_push('o');
        state.search_push('j');
        state.search_push('o');
        state.tick();

        // Assert: only the Mojo Jojo episode remains
        assert_eq!(state.applied_query(), "mojo");
        assert_eq!(state.filtered_episodes().len(), 1);
        assert_eq!(state.current_episode().unwrap().id, 1);
    }

    #[test]
    fn test_filter_waits_for_debounce_window() {
        // Arrange: a wait long enough that no test tick reaches it
        let mut state = make_state(Duration::from_secs(60));

        // Act
        state.search_push('x');
        state.tick();

        // Assert: pending, not yet applied
        assert!(state.searching());
        assert_eq!(state.applied_query(), "");
        assert_eq!(state.filtered_episodes().len(), 3);
    }

    #[test]
    fn test_emptied_input_applies_immediately() {
        // Arrange
        let mut state = make_state(Duration::from_secs(60));
        state.search_push('m');

        // Act: removing the last character bypasses the debounce
        state.search_pop();

        // Assert
        assert!(!state.searching());
        assert_eq!(state.filtered_episodes().len(), 3);
    }

    #[test]
    fn test_clear_search_cancels_pending() {
        // Arrange
        let mut state = make_state(Duration::from_secs(60));
        state.search_push('m');
        assert!(state.searching());

        // Act
        state.clear_search();

        // Assert
        assert!(!state.searching());
        assert!(state.query.is_empty());
        assert_eq!(state.filtered_episodes().len(), 3);
    }

    #[test]
    fn test_filter_no_match_clears_selection() {
        // Arrange
        let mut state = make_state(Duration::ZERO);

        // Act
        for ch in "zzz".chars() {
            state.search_push(ch);
        }
        state.tick();

        // Assert
        assert!(state.filtered_episodes().is_empty());
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn test_filter_preserves_episode_order() {
        // Arrange: "o" appears in every episode title
        let mut state = make_state(Duration::ZERO);

        // Act
        state.search_push('o');
        state.tick();

        // Assert
        let ids: Vec<u32> = state
            .filtered_episodes()
            .iter()
            .map(|&i| state.episodes[i].id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_open_and_close_detail_preserves_cursor() {
        // Arrange
        let mut state = make_state(Duration::ZERO);
        state.move_down();

        // Act
        state.open_detail();

        // Assert
        assert_eq!(state.page, Page::EpisodeDetail);
        assert_eq!(state.detail_episode().unwrap().id, 2);

        // Act: back to the list
        state.close_detail();

        // Assert: focus returns to the episode that was opened
        assert_eq!(state.page, Page::Show);
        assert_eq!(state.cursor(), 1);
        assert!(state.detail_episode().is_none());
    }

    #[test]
    fn test_open_detail_with_empty_list_is_noop() {
        // Arrange
        let mut state = make_state(Duration::ZERO);
        for ch in "zzz".chars() {
            state.search_push(ch);
        }
        state.tick();

        // Act
        state.open_detail();

        // Assert
        assert_eq!(state.page, Page::Show);
    }
}
