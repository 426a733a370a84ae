use crate::ui::app::{App, Route};
use crate::ui::header::Header;
use crate::ui::layout::{footer_nav, layout_regions, side_panel, SETTINGS_PANEL_WIDTH};
use crate::ui::library::{is_on_menu, menu_entry_at, visible_tiles, LibraryIntent};
use crate::ui::reader::{panel_intent_at, FontSize, ReaderIntent};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Library => handle_library_key(app, key),
        Route::Reader { .. } => {
            app.touch(Instant::now());
            handle_reader_key(app, key);
        }
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);
    match app.route() {
        Route::Library => match mouse.kind {
            MouseEventKind::ScrollDown => {
                app.dispatch_library(LibraryIntent::MoveSelection(row_step(app)))
            }
            MouseEventKind::ScrollUp => {
                app.dispatch_library(LibraryIntent::MoveSelection(-row_step(app)))
            }
            MouseEventKind::Down(MouseButton::Left) => handle_library_click(app, position),
            _ => {}
        },
        Route::Reader { .. } => {
            if let MouseEventKind::Down(button) = mouse.kind {
                // Hidden controls only come back; they are not clicked through
                let controls_were_visible = app.reader.controls_visible;
                app.touch(Instant::now());
                if button == MouseButton::Left && controls_were_visible {
                    handle_reader_click(app, position);
                }
            }
        }
    }
}

fn handle_library_click(app: &mut App, position: Position) {
    let (header, body, _) = layout_regions(app.screen());
    if Header::filter_area(header, &app.library.filter).contains(position) {
        app.dispatch_library(LibraryIntent::ToggleFilterMenu);
        return;
    }

    if app.library.is_menu_open() {
        let intent = match menu_entry_at(body, &app.library, position) {
            Some(index) => LibraryIntent::SelectCategory(app.library.categories[index].clone()),
            None if is_on_menu(body, &app.library, position) => return,
            // Outside the menu
            None => LibraryIntent::ToggleFilterMenu,
        };
        app.dispatch_library(intent);
        return;
    }

    let hit = visible_tiles(body, &app.library)
        .into_iter()
        .find(|(_, tile)| tile.contains(position));
    if let Some((index, _)) = hit {
        app.dispatch_library(LibraryIntent::Select(index));
        app.open_selected();
    }
}

fn handle_reader_click(app: &mut App, position: Position) {
    let area = app.screen();
    let (header, _, footer) = layout_regions(area);

    if Header::settings_area(header).contains(position) {
        app.dispatch_reader(ReaderIntent::ToggleSettings);
        return;
    }
    if app.reader.settings_open {
        let panel = side_panel(area, SETTINGS_PANEL_WIDTH);
        if panel.contains(position) {
            if let Some(intent) = panel_intent_at(panel, &app.reader, position) {
                app.dispatch_reader(intent);
            }
            return;
        }
    }

    let [prev, _, next] = footer_nav(footer);
    if Header::back_area(header).contains(position) {
        app.back_to_library();
    } else if prev.contains(position) {
        app.dispatch_reader(ReaderIntent::PrevPage);
    } else if next.contains(position) {
        app.dispatch_reader(ReaderIntent::NextPage);
    }
}

/// Selection delta for one grid row.
fn row_step(app: &App) -> isize {
    isize::try_from(app.grid_columns()).unwrap_or(1)
}

fn handle_library_key(app: &mut App, key: KeyEvent) {
    if app.library.is_menu_open() {
        let intent = match key.code {
            KeyCode::Up | KeyCode::Char('k') => LibraryIntent::MenuUp,
            KeyCode::Down | KeyCode::Char('j') => LibraryIntent::MenuDown,
            KeyCode::Enter => LibraryIntent::ConfirmMenu,
            KeyCode::Esc | KeyCode::Char('f') => LibraryIntent::ToggleFilterMenu,
            KeyCode::Char('q') => {
                app.request_quit();
                return;
            }
            _ => return,
        };
        app.dispatch_library(intent);
        return;
    }

    let columns = row_step(app);
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => LibraryIntent::MoveSelection(-1),
        KeyCode::Right | KeyCode::Char('l') => LibraryIntent::MoveSelection(1),
        KeyCode::Up | KeyCode::Char('k') => LibraryIntent::MoveSelection(-columns),
        KeyCode::Down | KeyCode::Char('j') => LibraryIntent::MoveSelection(columns),
        KeyCode::Tab => LibraryIntent::NextCategory,
        KeyCode::BackTab => LibraryIntent::PrevCategory,
        KeyCode::Char('f') => LibraryIntent::ToggleFilterMenu,
        KeyCode::Enter => {
            app.open_selected();
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        _ => return,
    };
    app.dispatch_library(intent);
}

fn handle_reader_key(app: &mut App, key: KeyEvent) {
    let settings_open = app.reader.settings_open;
    let font_size = app.reader.font_size.get();

    let intent = match key.code {
        KeyCode::Esc if settings_open => ReaderIntent::ToggleSettings,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.back_to_library();
            return;
        }
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        // Settings panel slider
        KeyCode::Left if settings_open => ReaderIntent::SetFontSize(font_size.saturating_sub(1)),
        KeyCode::Right if settings_open => ReaderIntent::SetFontSize(font_size + 1),
        KeyCode::Home if settings_open => ReaderIntent::SetFontSize(FontSize::MIN),
        KeyCode::End if settings_open => ReaderIntent::SetFontSize(FontSize::MAX),
        KeyCode::Right
        | KeyCode::PageDown
        | KeyCode::Char('l')
        | KeyCode::Char('n')
        | KeyCode::Char(' ') => ReaderIntent::NextPage,
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') | KeyCode::Char('p') => {
            ReaderIntent::PrevPage
        }
        KeyCode::Char('+') | KeyCode::Char('=') => ReaderIntent::IncreaseFont,
        KeyCode::Char('-') => ReaderIntent::DecreaseFont,
        KeyCode::Char('t') => ReaderIntent::ToggleTheme,
        KeyCode::Char('s') => ReaderIntent::ToggleSettings,
        _ => return,
    };
    app.dispatch_reader(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
