use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::BookSummary;
use crate::ui::layout::{grid_columns, layout_regions, TILE_HEIGHT, TILE_WIDTH};
use crate::ui::library::state::{FilterMenu, LibraryState};
use crate::ui::progress::progress_bar;
use crate::ui::theme::{
    ACCENT, ACCENT_STRONG, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PANEL_BG,
};
use crate::ui::{footer::Footer, header::Header};

const MENU_WIDTH: u16 = 18;

pub fn render_library(frame: &mut Frame<'_>, area: Rect, state: &LibraryState) {
    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().library_widget(&state.filter, header.width), header);
    if body.is_empty() {
        return;
    }
    frame.render_widget(Clear, body);
    render_grid(frame, body, state);
    if !footer.is_empty() {
        frame.render_widget(Footer::new().library_widget(footer), footer);
    }

    if let FilterMenu::Open { cursor } = state.menu {
        render_filter_menu(frame, body, state, cursor);
    }
}

fn render_grid(frame: &mut Frame<'_>, body: Rect, state: &LibraryState) {
    let books = state.visible_books();
    if books.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("  No books in \"{}\"", state.filter),
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(empty, body);
        return;
    }

    for (index, tile) in visible_tiles(body, state) {
        frame.render_widget(
            book_tile(books[index], index == state.selected, tile.width),
            tile,
        );
    }
}

/// Tiles that fit in `body`, scrolled so the selection stays on screen.
/// Each entry is the book's index in the filtered list and its cell area.
pub(crate) fn visible_tiles(body: Rect, state: &LibraryState) -> Vec<(usize, Rect)> {
    let len = state.visible_books().len();
    let columns = usize::from(grid_columns(body.width));
    let visible_rows = usize::from((body.height / TILE_HEIGHT).max(1));
    let first_row = first_visible_row(state.selected / columns, visible_rows);

    let mut tiles = Vec::new();
    for index in first_row * columns..len {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let column = index % columns;
        let tile = Rect {
            x: body.x + column as u16 * TILE_WIDTH,
            y: body.y + row as u16 * TILE_HEIGHT,
            width: TILE_WIDTH.saturating_sub(2).min(body.width),
            height: TILE_HEIGHT.min(body.height),
        };
        if tile.bottom() > body.bottom() {
            break;
        }
        tiles.push((index, tile));
    }
    tiles
}

/// First grid row to draw so that `selected_row` stays on screen.
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    (selected_row + 1).saturating_sub(visible_rows)
}

fn book_tile(book: &BookSummary, selected: bool, width: u16) -> Paragraph<'static> {
    let inner = usize::from(width.saturating_sub(2));
    let border = if selected { ACCENT } else { GLOBAL_BORDER };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate(&book.title, inner),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&book.author, inner),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            truncate(&book.category, inner),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
    ];
    if book.is_completed() {
        lines.push(Line::from(Span::styled(
            " Completed ",
            Style::default().fg(HEADER_TEXT).bg(ACCENT_STRONG),
        )));
    } else {
        lines.push(Line::from(""));
    }
    if book.is_started() {
        lines.push(progress_bar(f64::from(book.progress) / 100.0, inner as u16));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if selected {
        block = block.style(Style::default().bg(PANEL_BG));
    }
    Paragraph::new(lines).block(block)
}

fn render_filter_menu(frame: &mut Frame<'_>, body: Rect, state: &LibraryState, cursor: usize) {
    let area = filter_menu_area(body, state.categories.len());
    let width = area.width;

    let lines: Vec<Line> = state
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let mut style = Style::default().fg(HEADER_TEXT);
            if index == cursor {
                style = style.bg(ACTIVE_HIGHLIGHT);
            }
            if *category == state.filter {
                style = style.add_modifier(Modifier::BOLD);
            }
            let label = format!(" {:<w$}", category.label(), w = inner_width(width));
            Line::from(Span::styled(label, style))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(" Filter ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        ),
        area,
    );
}

/// Dropdown anchored to the top-right corner of the grid.
fn filter_menu_area(body: Rect, entries: usize) -> Rect {
    let entries = u16::try_from(entries).unwrap_or(u16::MAX);
    let height = entries.saturating_add(2).min(body.height);
    let width = MENU_WIDTH.min(body.width);
    Rect {
        x: body.x + body.width - width,
        y: body.y,
        width,
        height,
    }
}

/// Category index under `position` when the filter menu is drawn in `body`.
pub(crate) fn menu_entry_at(body: Rect, state: &LibraryState, position: Position) -> Option<usize> {
    let area = filter_menu_area(body, state.categories.len());
    let entries = area.inner(Margin::new(1, 1));
    if !entries.contains(position) {
        return None;
    }
    let index = usize::from(position.y - entries.y);
    (index < state.categories.len()).then_some(index)
}

/// Whether `position` falls anywhere on the open filter menu, borders included.
pub(crate) fn is_on_menu(body: Rect, state: &LibraryState, position: Position) -> bool {
    filter_menu_area(body, state.categories.len()).contains(position)
}

fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(3))
}

/// Shortens `text` to `max` chars, ending with `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
