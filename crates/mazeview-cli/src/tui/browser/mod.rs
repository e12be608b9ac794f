//! Show & episode browser TUI main loop.

/// Browser state types.
pub mod state;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use self::state::{BrowserState, InputMode, Page};
use crate::constants::{FALLBACK_IMAGE_EPISODE, FALLBACK_IMAGE_SHOW};
use mazeview_api::tvmaze::model::{Episode, Show};

/// Runs the browse TUI over a show and its preloaded episodes.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub fn run_browser(show: Show, episodes: Vec<Episode>, debounce_wait: Duration) -> Result<()> {
    let mut state = BrowserState::new(show, episodes, debounce_wait);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut state);

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop.
///
/// Each iteration delivers any due debounced filter application, draws,
/// then waits up to the poll interval for input. The poll timeout doubles
/// as the debounce tick.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
) -> Result<()> {
    let mut list_height: u16 = 0;

    loop {
        state.tick();

        terminal
            .draw(|frame| {
                list_height = ui::draw(frame, state);
            })
            .context("failed to draw TUI")?;

        let page_size = usize::from(list_height.saturating_sub(4));

        if event::poll(Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            let exit = match (state.page, state.input_mode) {
                (Page::Show, InputMode::Search) => handle_search_input(state, key.code),
                (Page::Show, InputMode::Normal) => {
                    handle_show_input(state, key.code, key.modifiers, page_size)
                }
                (Page::EpisodeDetail, _) => handle_detail_input(state, key.code, key.modifiers),
            };
            if exit {
                return Ok(());
            }
        }
    }
}

/// Handles key input in search mode. Returns `true` to exit.
fn handle_search_input(state: &mut BrowserState, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => {
            state.clear_search();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.search_pop();
        }
        KeyCode::Char(c) => {
            state.search_push(c);
        }
        _ => {}
    }
    false
}

/// Handles key input on the show page in normal mode. Returns `true` to exit.
fn handle_show_input(
    state: &mut BrowserState,
    key: KeyCode,
    modifiers: KeyModifiers,
    page_size: usize,
) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::PageUp => state.page_up(page_size),
        KeyCode::PageDown => state.page_down(page_size),
        KeyCode::Enter | KeyCode::Right => state.open_detail(),
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
        }
        KeyCode::Char('o') => open_show_image(state),
        _ => {}
    }
    false
}

/// Handles key input on the episode detail page. Returns `true` to exit.
fn handle_detail_input(state: &mut BrowserState, key: KeyCode, modifiers: KeyModifiers) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => state.close_detail(),
        KeyCode::Char('o') => open_episode_image(state),
        _ => {}
    }
    false
}

/// Opens the show's cover image URL in the system browser.
fn open_show_image(state: &BrowserState) {
    let url = state
        .show
        .cover_image
        .as_deref()
        .unwrap_or(FALLBACK_IMAGE_SHOW);
    let _ = open::that(url);
}

/// Opens the current episode's cover image URL in the system browser.
fn open_episode_image(state: &BrowserState) {
    let Some(episode) = state.detail_episode() else {
        return;
    };
    let url = episode.cover_image.as_deref().unwrap_or(FALLBACK_IMAGE_EPISODE);
    let _ = open::that(url);
}
