use std::ops::Range;

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::reader::intent::ReaderIntent;
use crate::ui::reader::state::{FontSize, ReaderState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, INACTIVE_HIGHLIGHT, MUTED_TEXT,
    PANEL_BG, TRACK,
};

const SLIDER_WIDTH: usize = 16;

// Clickable cells, relative to the panel body below the title.
const THEME_ROW: u16 = 2;
const SLIDER_ROW: u16 = 6;
const DARK_BUTTON: Range<u16> = 1..9;
const LIGHT_BUTTON: Range<u16> = 11..20;
const DECREASE_BUTTON: Range<u16> = 0..4;
const SLIDER_TRACK: Range<u16> = 4..(5 + SLIDER_WIDTH as u16);
const INCREASE_BUTTON: Range<u16> = SLIDER_TRACK.end..(SLIDER_TRACK.end + 3);

/// Slide-in "Reader Settings" panel.
pub fn render_settings_panel(frame: &mut Frame<'_>, area: Rect, state: &ReaderState) {
    let heading = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("APPEARANCE", heading)),
        Line::from(vec![
            Span::raw(" "),
            toggle_button("☾ Dark", state.dark_mode),
            Span::raw("  "),
            toggle_button("☀ Light", !state.dark_mode),
        ]),
        Line::from(Span::styled(" t: toggle", Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("FONT SIZE", heading),
            Span::styled(format!("{:>14}", format!("{}px", state.font_size.get())), text),
        ]),
        font_slider(state.font_size),
        Line::from(Span::styled(
            " -/+: step  ←/→: slide  Home/End",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("FONT TYPE", heading)),
        Line::from(vec![
            Span::raw(" "),
            toggle_button("Serif", true),
            Span::raw("  "),
            toggle_button("Sans-serif", false),
        ]),
        Line::from(""),
        Line::from(Span::styled("TEXT ALIGNMENT", heading)),
        Line::from(vec![
            Span::raw(" "),
            toggle_button("≡ Left", true),
            Span::raw("  "),
            toggle_button("T Justify", false),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(panel_block()), area);
}

/// Intent for a click at `position` on the panel drawn in `area`.
pub(crate) fn panel_intent_at(
    area: Rect,
    state: &ReaderState,
    position: Position,
) -> Option<ReaderIntent> {
    let body = panel_block().inner(area);
    if !body.contains(position) {
        return None;
    }
    let x = position.x - body.x;
    match position.y - body.y {
        THEME_ROW if DARK_BUTTON.contains(&x) && !state.dark_mode => {
            Some(ReaderIntent::ToggleTheme)
        }
        THEME_ROW if LIGHT_BUTTON.contains(&x) && state.dark_mode => {
            Some(ReaderIntent::ToggleTheme)
        }
        SLIDER_ROW if DECREASE_BUTTON.contains(&x) => Some(ReaderIntent::DecreaseFont),
        SLIDER_ROW if INCREASE_BUTTON.contains(&x) => Some(ReaderIntent::IncreaseFont),
        SLIDER_ROW if SLIDER_TRACK.contains(&x) => Some(ReaderIntent::SetFontSize(slider_value(
            usize::from(x - SLIDER_TRACK.start),
            SLIDER_WIDTH,
        ))),
        _ => None,
    }
}

fn panel_block() -> Block<'static> {
    Block::default()
        .title(Span::styled(
            " Reader Settings ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .style(Style::default().bg(PANEL_BG))
}

fn toggle_button(label: &'static str, active: bool) -> Span<'static> {
    let bg = if active {
        ACTIVE_HIGHLIGHT
    } else {
        INACTIVE_HIGHLIGHT
    };
    Span::styled(format!(" {label} "), Style::default().fg(HEADER_TEXT).bg(bg))
}

/// `A- ───●──── A+`, with the knob placed proportionally in the range.
fn font_slider(size: FontSize) -> Line<'static> {
    let knob = slider_position(size, SLIDER_WIDTH);
    let step_style = |disabled: bool| {
        if disabled {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };
    Line::from(vec![
        Span::styled(" A- ", step_style(size.is_min())),
        Span::styled("━".repeat(knob), Style::default().fg(ACCENT)),
        Span::styled("●", Style::default().fg(ACCENT)),
        Span::styled(
            "─".repeat(SLIDER_WIDTH - knob),
            Style::default().fg(TRACK),
        ),
        Span::styled(" A+", step_style(size.is_max())),
    ])
}

fn slider_position(size: FontSize, width: usize) -> usize {
    let offset = usize::from(size.get() - FontSize::MIN);
    let range = usize::from(FontSize::MAX - FontSize::MIN);
    offset * width / range
}

/// Font size for a knob dropped `offset` cells into a track `width` wide.
fn slider_value(offset: usize, width: usize) -> u16 {
    let range = usize::from(FontSize::MAX - FontSize::MIN);
    let points = (offset.min(width) * range + width / 2) / width;
    FontSize::MIN + points as u16
}
