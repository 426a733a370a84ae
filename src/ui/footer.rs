use crate::catalog::Chapter;
use crate::ui::layout::footer_nav;
use crate::ui::progress::progress_bar;
use crate::ui::reader::ReaderState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PANEL_BG};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the library grid.
    pub fn library_widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = " ←↑↓→: Move │ Enter: Open │ f: Filter │ Tab: Next category │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }

    /// Previous/Next controls around the page counter and progress bar.
    pub fn render_reader(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        state: &ReaderState,
        chapter: Option<&Chapter>,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let [prev, center, next] = footer_nav(area);

        frame.render_widget(nav_button("◀ Previous", state.can_go_prev()), prev);
        frame.render_widget(nav_button("Next ▶", state.can_go_next()), next);

        let mut counter = vec![Span::styled(
            format!("{} / {}", state.page, state.total_pages),
            Style::default().fg(HEADER_TEXT),
        )];
        if let Some(chapter) = chapter {
            counter.push(Span::styled(
                format!("  ·  {}", chapter.title),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        let bar_width = center.width.saturating_sub(4);
        let lines = vec![
            Line::from(counter),
            progress_bar(state.progress(), bar_width),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

/// Rendered dimmed when the move would be refused.
fn nav_button(label: &'static str, enabled: bool) -> Paragraph<'static> {
    let style = if enabled {
        Style::default().fg(HEADER_TEXT).bg(PANEL_BG)
    } else {
        Style::default()
            .fg(MUTED_TEXT)
            .bg(PANEL_BG)
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
        .alignment(Alignment::Center)
}
