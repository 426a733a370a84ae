//! Tests for App routing, key bindings and controls auto-hide.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hondana::catalog::Category;
use hondana::config::ReaderConfig;
use hondana::ui::app::Route;
use hondana::ui::input::{handle_key, handle_mouse};
use hondana::ui::library::LibraryIntent;
use hondana::ui::reader::ReaderIntent;
use std::time::{Duration, Instant};

fn click_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click() -> MouseEvent {
    click_at(10, 10)
}

// -- Routing ------------------------------------------------------------------

#[test]
fn app_starts_on_library_with_all_books() {
    let app = make_app();
    assert_eq!(app.route(), Route::Library);
    assert_eq!(app.library.visible_books().len(), 6);
    assert_eq!(app.library.filter, Category::All);
}

#[test]
fn enter_opens_selected_book() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Right));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.route(), Route::Reader { book_id: 2 });
    assert_eq!(app.reader.book_id, 2);
    assert_eq!(app.reader.page, 1);
}

#[test]
fn reader_ignores_book_id_for_content() {
    let mut app = make_app();
    app.open_book(4);
    assert_eq!(app.current_book().title, "The Midnight Library");
    assert_eq!(app.reader.total_pages, 283);
}

#[test]
fn open_uses_configured_defaults() {
    let mut app = make_app_with(ReaderConfig {
        font_size: 26,
        dark_mode: false,
        auto_hide_controls_ms: None,
    });
    app.open_book(1);
    assert_eq!(app.reader.font_size.get(), 26);
    assert!(!app.reader.dark_mode);
}

#[test]
fn back_discards_reader_state() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Char('n')));
    handle_key(&mut app, press_key(KeyCode::Char('+')));
    assert_eq!(app.reader.page, 2);

    handle_key(&mut app, press_key(KeyCode::Char('b')));
    assert_eq!(app.route(), Route::Library);

    app.open_book(1);
    assert_eq!(app.reader.page, 1);
    assert_eq!(app.reader.font_size.get(), 18);
}

#[test]
fn enter_on_empty_filter_stays_in_library() {
    let mut app = make_app();
    app.dispatch_library(LibraryIntent::SelectCategory(Category::Named(
        "Poetry".to_string(),
    )));
    assert!(!app.open_selected());
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.route(), Route::Library);
}

// -- Library keys -------------------------------------------------------------

#[test]
fn tab_cycles_categories() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Tab));
    assert_eq!(app.library.filter.label(), "Fiction");
    handle_key(&mut app, press_key(KeyCode::BackTab));
    assert_eq!(app.library.filter, Category::All);
}

#[test]
fn filter_menu_keys() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('f')));
    assert!(app.library.is_menu_open());
    handle_key(&mut app, press_key(KeyCode::Down));
    handle_key(&mut app, press_key(KeyCode::Down));
    handle_key(&mut app, press_key(KeyCode::Down));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert!(!app.library.is_menu_open());
    assert_eq!(app.library.filter.label(), "Sci-Fi");
    assert_eq!(app.route(), Route::Library);
}

#[test]
fn down_moves_one_grid_row() {
    let mut app = make_app();
    app.on_resize(80, 24);
    assert_eq!(app.grid_columns(), 3);
    handle_key(&mut app, press_key(KeyCode::Down));
    assert_eq!(app.library.selected, 3);
    handle_key(&mut app, press_key(KeyCode::Right));
    assert_eq!(app.library.selected, 4);
}

#[test]
fn grid_moves_wrap_around_the_list() {
    let mut app = make_app();
    app.on_resize(80, 24);
    handle_key(&mut app, press_key(KeyCode::Left));
    assert_eq!(app.library.selected, 5);
    handle_key(&mut app, press_key(KeyCode::Down));
    assert_eq!(app.library.selected, 2);
    handle_key(&mut app, press_key(KeyCode::Up));
    assert_eq!(app.library.selected, 5);
}

#[test]
fn mouse_scroll_moves_selection() {
    let mut app = make_app();
    app.on_resize(30, 24);
    let scroll = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse(&mut app, scroll);
    assert_eq!(app.library.selected, 1);
}

// -- Mouse clicks -------------------------------------------------------------

// Library at 80x24: header rows 0-2, tiles 26 cells wide and 7 rows tall from
// row 3, filter control on the right of row 1.

#[test]
fn clicking_a_tile_opens_that_book() {
    let mut app = make_app();
    app.on_resize(80, 24);
    handle_mouse(&mut app, click_at(30, 12));
    assert_eq!(app.route(), Route::Reader { book_id: 5 });
}

#[test]
fn clicking_between_tiles_does_nothing() {
    let mut app = make_app();
    app.on_resize(80, 24);
    handle_mouse(&mut app, click_at(25, 5));
    assert_eq!(app.route(), Route::Library);
    assert_eq!(app.library.selected, 0);
}

#[test]
fn clicking_filter_control_opens_menu_and_picks_entry() {
    let mut app = make_app();
    app.on_resize(80, 24);
    handle_mouse(&mut app, click_at(70, 1));
    assert!(app.library.is_menu_open());

    // Fourth entry, below the menu's top border on row 3
    handle_mouse(&mut app, click_at(66, 7));
    assert!(!app.library.is_menu_open());
    assert_eq!(app.library.filter.label(), "Sci-Fi");
    assert_eq!(app.route(), Route::Library);
}

#[test]
fn clicking_outside_menu_closes_it() {
    let mut app = make_app();
    app.on_resize(80, 24);
    handle_key(&mut app, press_key(KeyCode::Char('f')));
    handle_mouse(&mut app, click_at(10, 12));
    assert!(!app.library.is_menu_open());
    assert_eq!(app.library.filter, Category::All);
    assert_eq!(app.route(), Route::Library);
}

// Reader at 100x30: header text on row 1, footer buttons on rows 28-29.

#[test]
fn clicking_footer_buttons_turns_pages() {
    let mut app = make_app();
    app.on_resize(100, 30);
    app.open_book(1);
    handle_mouse(&mut app, click_at(90, 28));
    handle_mouse(&mut app, click_at(90, 29));
    assert_eq!(app.reader.page, 3);
    handle_mouse(&mut app, click_at(5, 28));
    assert_eq!(app.reader.page, 2);
    // Counter in the middle
    handle_mouse(&mut app, click_at(50, 28));
    assert_eq!(app.reader.page, 2);
}

#[test]
fn clicking_settings_control_toggles_panel() {
    let mut app = make_app();
    app.on_resize(100, 30);
    app.open_book(1);
    handle_mouse(&mut app, click_at(95, 1));
    assert!(app.reader.settings_open);

    // A+ on the slider row of the panel
    handle_mouse(&mut app, click_at(89, 7));
    assert_eq!(app.reader.font_size.get(), 20);
    // Light button
    handle_mouse(&mut app, click_at(80, 3));
    assert!(!app.reader.dark_mode);

    handle_mouse(&mut app, click_at(95, 1));
    assert!(!app.reader.settings_open);
}

#[test]
fn clicking_back_link_returns_to_library() {
    let mut app = make_app();
    app.on_resize(100, 30);
    app.open_book(1);
    handle_mouse(&mut app, click_at(5, 1));
    assert_eq!(app.route(), Route::Library);
}

#[test]
fn click_on_hidden_controls_only_reveals_them() {
    let mut app = make_app();
    app.on_resize(100, 30);
    app.open_book(1);
    app.dispatch_reader(ReaderIntent::HideControls);
    handle_mouse(&mut app, click_at(5, 1));
    assert!(app.reader.controls_visible);
    assert!(matches!(app.route(), Route::Reader { .. }));
}

#[test]
fn q_quits_from_library() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_from_reader() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    handle_key(&mut app, release_key(KeyCode::Char('q')));
    assert!(!app.should_quit());
}

// -- Reader keys --------------------------------------------------------------

#[test]
fn reader_page_keys_saturate() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Left));
    assert_eq!(app.reader.page, 1);
    handle_key(&mut app, press_key(KeyCode::Right));
    handle_key(&mut app, press_key(KeyCode::PageDown));
    assert_eq!(app.reader.page, 3);
    handle_key(&mut app, press_key(KeyCode::PageUp));
    assert_eq!(app.reader.page, 2);
}

#[test]
fn reader_font_and_theme_keys() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Char('+')));
    assert_eq!(app.reader.font_size.get(), 20);
    handle_key(&mut app, press_key(KeyCode::Char('-')));
    handle_key(&mut app, press_key(KeyCode::Char('-')));
    assert_eq!(app.reader.font_size.get(), 16);
    handle_key(&mut app, press_key(KeyCode::Char('t')));
    assert!(!app.reader.dark_mode);
}

#[test]
fn settings_panel_arrows_drive_slider() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    assert!(app.reader.settings_open);

    handle_key(&mut app, press_key(KeyCode::Right));
    assert_eq!(app.reader.font_size.get(), 19);
    assert_eq!(app.reader.page, 1);
    handle_key(&mut app, press_key(KeyCode::End));
    assert_eq!(app.reader.font_size.get(), 32);
    handle_key(&mut app, press_key(KeyCode::Right));
    assert_eq!(app.reader.font_size.get(), 32);
    handle_key(&mut app, press_key(KeyCode::Home));
    assert_eq!(app.reader.font_size.get(), 12);

    // Paging still works with the panel open
    handle_key(&mut app, press_key(KeyCode::Char('n')));
    assert_eq!(app.reader.page, 2);
}

#[test]
fn esc_closes_settings_before_leaving() {
    let mut app = make_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    handle_key(&mut app, press_key(KeyCode::Esc));
    assert!(!app.reader.settings_open);
    assert!(matches!(app.route(), Route::Reader { .. }));
    handle_key(&mut app, press_key(KeyCode::Esc));
    assert_eq!(app.route(), Route::Library);
}

// -- Controls visibility ------------------------------------------------------

fn auto_hide_app() -> hondana::ui::app::App {
    make_app_with(ReaderConfig {
        auto_hide_controls_ms: Some(3000),
        ..ReaderConfig::default()
    })
}

#[test]
fn auto_hide_disabled_by_default() {
    let mut app = make_app();
    app.open_book(1);
    app.on_tick_at(Instant::now() + Duration::from_secs(3600));
    assert!(app.reader.controls_visible);
}

#[test]
fn auto_hide_hides_controls_and_settings_after_interval() {
    let mut app = auto_hide_app();
    app.open_book(1);
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    let start = Instant::now();
    app.touch(start);

    app.on_tick_at(start + Duration::from_millis(2999));
    assert!(app.reader.controls_visible);
    assert!(app.reader.settings_open);

    app.on_tick_at(start + Duration::from_millis(3000));
    assert!(!app.reader.controls_visible);
    assert!(!app.reader.settings_open);
}

#[test]
fn click_brings_controls_back() {
    let mut app = auto_hide_app();
    app.open_book(1);
    let start = Instant::now();
    app.touch(start);
    app.on_tick_at(start + Duration::from_secs(5));
    assert!(!app.reader.controls_visible);

    handle_mouse(&mut app, click());
    assert!(app.reader.controls_visible);
}

#[test]
fn any_key_brings_controls_back() {
    let mut app = auto_hide_app();
    app.open_book(1);
    let start = Instant::now();
    app.touch(start);
    app.on_tick_at(start + Duration::from_secs(5));
    assert!(!app.reader.controls_visible);

    handle_key(&mut app, press_key(KeyCode::Char('x')));
    assert!(app.reader.controls_visible);
}

#[test]
fn auto_hide_does_nothing_in_library() {
    let mut app = auto_hide_app();
    app.on_tick_at(Instant::now() + Duration::from_secs(60));
    assert_eq!(app.route(), Route::Library);
    assert!(app.reader.controls_visible);
}
