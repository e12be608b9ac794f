//! TUI rendering logic for the browser.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};

use super::state::{BrowserState, InputMode, Page};
use crate::constants::{FALLBACK_IMAGE_EPISODE, FALLBACK_IMAGE_SHOW};
use crate::text::strip_html;

/// Draws the browser UI. Returns the episode list area height for page
/// size calculation (0 on the detail page).
pub fn draw(frame: &mut Frame, state: &mut BrowserState) -> u16 {
    match state.page {
        Page::Show => draw_show_page(frame, state),
        Page::EpisodeDetail => {
            draw_detail_page(frame, state);
            0
        }
    }
}

/// Draws the show page: show header, search input, episode list, footer.
#[allow(clippy::indexing_slicing)]
fn draw_show_page(frame: &mut Frame, state: &mut BrowserState) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // show header
            Constraint::Length(3), // search input
            Constraint::Min(5),    // episode list
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_show_header(frame, chunks[0], state);
    draw_search_input(frame, chunks[1], state);
    draw_episode_list(frame, chunks[2], state);
    draw_footer(frame, chunks[3], state);

    chunks[2].height
}

/// Draws the show header with title, description, and cover image URL.
fn draw_show_header(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let image = state
        .show
        .cover_image
        .as_deref()
        .unwrap_or(FALLBACK_IMAGE_SHOW);

    let lines = vec![
        Line::from(Span::styled(
            state.show.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(strip_html(&state.show.description)),
        Line::from(Span::styled(
            format!("Image: {image}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Show "));
    frame.render_widget(header, area);
}

/// Draws the search input with the pending-application indicator.
fn draw_search_input(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let input_style = if state.input_mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::raw(state.query.clone())];
    if state.searching() {
        spans.push(Span::styled(
            "  searching...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search: / "),
    );
    frame.render_widget(input, area);
}

/// Draws the episode list table.
fn draw_episode_list(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let header = Row::new(vec!["S", "E", "Airdate", "Title"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let filtered = state.filtered_episodes();
    let rows: Vec<Row> = filtered
        .iter()
        .filter_map(|&idx| {
            let episode = state.episodes.get(idx)?;
            Some(Row::new(vec![
                episode.season.to_string(),
                episode.episode_number.to_string(),
                episode.airdate.clone(),
                episode.title.clone(),
            ]))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let title = format!(
        " Episodes ({} / {}) ",
        filtered.len(),
        state.episodes.len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(table, area, &mut state.table_state);
}

/// Draws the episode detail page.
#[allow(clippy::indexing_slicing)]
fn draw_detail_page(frame: &mut Frame, state: &BrowserState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // episode header
            Constraint::Min(5),    // summary
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    let Some(episode) = state.detail_episode() else {
        return;
    };

    let image = episode
        .cover_image
        .as_deref()
        .unwrap_or(FALLBACK_IMAGE_EPISODE);

    let header_lines = vec![
        Line::from(Span::styled(
            episode.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Season {}, Episode {}  (aired {})",
            episode.season, episode.episode_number, episode.airdate
        )),
        Line::from(Span::styled(
            format!("Image: {image}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(header_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Episode "));
    frame.render_widget(header, chunks[0]);

    let summary = Paragraph::new(strip_html(&episode.summary))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Summary "));
    frame.render_widget(summary, chunks[1]);

    let footer = Paragraph::new(Line::from(
        "Esc/\u{2190}: back  o: open image  q: quit",
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

/// Draws the show page footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help_text = match state.input_mode {
        InputMode::Search => Line::from("Type to search | Esc: clear | Enter: done"),
        InputMode::Normal => Line::from(
            "\u{2191}\u{2193}/j/k: move  PgUp/PgDn: page  Enter: episode  /: search  o: open image  q: quit",
        ),
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
