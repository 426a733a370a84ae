use crate::catalog::Category;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const APP_TITLE: &str = "Hondana";
const FILTER_LABEL: &str = "Filter: ";
const BACK_LINK: &str = "  ◀ Back to Library";
const SETTINGS_LINK: &str = "⚙ Settings  ";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// App title on the left, active filter on the right.
    pub fn library_widget(&self, filter: &Category, width: u16) -> Paragraph<'static> {
        let title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(MUTED_TEXT);
        let filter_style = Style::default().fg(HEADER_TEXT);

        let title = format!("  {APP_TITLE}");
        let filter_text = filter_text(filter);
        let label = FILTER_LABEL;
        let padding = usize::from(width)
            .saturating_sub(title.chars().count())
            .saturating_sub(label.chars().count())
            .saturating_sub(filter_text.chars().count());

        let line = Line::from(vec![
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(label, label_style),
            Span::styled(filter_text, filter_style),
        ]);
        Self::framed(line)
    }

    /// Back link, centered book title, settings control.
    pub fn reader_widget(&self, title: &str, settings_open: bool, width: u16) -> Paragraph<'static> {
        let link_style = Style::default().fg(MUTED_TEXT);
        let title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let settings_style = if settings_open {
            Style::default().fg(ACCENT)
        } else {
            link_style
        };

        let back = BACK_LINK;
        let settings = SETTINGS_LINK;
        let width = usize::from(width);
        let title_width = title.chars().count();
        let back_width = back.chars().count();
        let settings_width = settings.chars().count();

        let left_pad = (width.saturating_sub(title_width) / 2).saturating_sub(back_width);
        let right_pad = width
            .saturating_sub(back_width + left_pad + title_width)
            .saturating_sub(settings_width);

        let line = Line::from(vec![
            Span::styled(back, link_style),
            Span::raw(" ".repeat(left_pad.max(1))),
            Span::styled(title.to_string(), title_style),
            Span::raw(" ".repeat(right_pad.max(1))),
            Span::styled(settings, settings_style),
        ]);
        Self::framed(line)
    }

    /// Clickable "Filter: [ … ▾ ]" control in a library `header` area.
    pub fn filter_area(header: Rect, filter: &Category) -> Rect {
        let width = FILTER_LABEL.chars().count() + filter_text(filter).chars().count();
        right_aligned(header, width)
    }

    /// Clickable back link in a reader `header` area.
    pub fn back_area(header: Rect) -> Rect {
        let width = (BACK_LINK.chars().count() as u16).min(header.width);
        Rect {
            width,
            ..text_row(header)
        }
    }

    /// Clickable settings control in a reader `header` area.
    pub fn settings_area(header: Rect) -> Rect {
        right_aligned(header, SETTINGS_LINK.chars().count())
    }

    fn framed(line: Line<'static>) -> Paragraph<'static> {
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn filter_text(filter: &Category) -> String {
    format!("[ {} ▾ ] ", filter.label())
}

/// The single text line between the top and bottom borders.
fn text_row(header: Rect) -> Rect {
    Rect {
        y: header.y.saturating_add(1),
        height: header.height.saturating_sub(2).min(1),
        ..header
    }
}

fn right_aligned(header: Rect, width: usize) -> Rect {
    let row = text_row(header);
    let width = u16::try_from(width).unwrap_or(u16::MAX).min(row.width);
    Rect {
        x: row.right() - width,
        width,
        ..row
    }
}
