use crate::ui::app::{App, Route};
use crate::ui::library::render_library;
use crate::ui::reader::render_reader;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    match app.route() {
        Route::Library => render_library(frame, area, &app.library),
        Route::Reader { .. } => render_reader(frame, area, &app.reader, app.current_book()),
    }
}
