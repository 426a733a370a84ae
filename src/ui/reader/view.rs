use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::BookDetail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    centered_rect_by_size, layout_regions, side_panel, text_columns, SETTINGS_PANEL_WIDTH,
};
use crate::ui::reader::panel::render_settings_panel;
use crate::ui::reader::state::ReaderState;
use crate::ui::theme::ReaderPalette;

pub fn render_reader(frame: &mut Frame<'_>, area: Rect, state: &ReaderState, book: &BookDetail) {
    let palette = ReaderPalette::for_mode(state.dark_mode);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let body = if state.controls_visible {
        let (header, body, footer) = layout_regions(area);
        frame.render_widget(
            Header::new().reader_widget(&book.title, state.settings_open, header.width),
            header,
        );
        if !footer.is_empty() {
            Footer::new().render_reader(frame, footer, state, book.chapter_for_page(state.page));
        }
        body
    } else {
        area
    };

    render_text(frame, body, state, book, palette);

    if state.settings_open {
        render_settings_panel(frame, side_panel(area, SETTINGS_PANEL_WIDTH), state);
    }
}

fn render_text(
    frame: &mut Frame<'_>,
    body: Rect,
    state: &ReaderState,
    book: &BookDetail,
    palette: ReaderPalette,
) {
    if body.is_empty() {
        return;
    }

    let columns = text_columns(body.width.saturating_sub(4), state.font_size.get());
    let column = centered_rect_by_size(body, columns, body.height.saturating_sub(2));

    let mut lines = Vec::new();
    for (index, paragraph) in book.paragraphs().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(paragraph.to_string()));
    }

    let text = Paragraph::new(lines)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, column);
}
