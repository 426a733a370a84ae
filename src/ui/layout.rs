use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const SETTINGS_PANEL_WIDTH: u16 = 34;
/// Width of one library tile including its right gap.
pub const TILE_WIDTH: u16 = 26;
pub const TILE_HEIGHT: u16 = 7;
/// Widest the reading column gets, in cells.
pub const MAX_TEXT_COLUMNS: u16 = 96;
pub const NAV_BUTTON_WIDTH: u16 = 14;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Panel docked to the right edge, full height.
pub fn side_panel(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Previous button, counter and Next button cells of the reader footer.
pub fn footer_nav(footer: Rect) -> [Rect; 3] {
    // Below the top border
    let inner = Rect {
        y: footer.y.saturating_add(1),
        height: footer.height.saturating_sub(1),
        ..footer
    };
    Layout::horizontal([
        Constraint::Length(NAV_BUTTON_WIDTH),
        Constraint::Min(0),
        Constraint::Length(NAV_BUTTON_WIDTH),
    ])
    .areas(inner)
}

/// Number of tiles per grid row for a body `width` cells wide.
pub fn grid_columns(width: u16) -> u16 {
    (width / TILE_WIDTH).max(1)
}

/// Reading column width for `font_size` points.
///
/// A terminal cannot scale glyphs, so larger fonts narrow the column
/// instead: 12pt uses the full width, 32pt a little over a third of it.
pub fn text_columns(available: u16, font_size: u16) -> u16 {
    let font_size = u32::from(font_size.max(1));
    let scaled = u32::from(available) * 12 / font_size;
    let upper = u32::from(available.min(MAX_TEXT_COLUMNS));
    scaled.clamp(upper.min(1), upper) as u16
}
