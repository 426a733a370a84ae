use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, TRACK};

const FILLED: &str = "━";
const EMPTY: &str = "─";

/// Single-line progress bar `width` cells wide for `ratio` in `0.0..=1.0`.
pub fn progress_bar(ratio: f64, width: u16) -> Line<'static> {
    let width = usize::from(width);
    let filled = filled_cells(ratio, width);
    Line::from(vec![
        Span::styled(FILLED.repeat(filled), Style::default().fg(ACCENT)),
        Span::styled(EMPTY.repeat(width - filled), Style::default().fg(TRACK)),
    ])
}

fn filled_cells(ratio: f64, width: usize) -> usize {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    ((ratio * width as f64).round() as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_cells_rounds_and_clamps() {
        assert_eq!(filled_cells(0.0, 10), 0);
        assert_eq!(filled_cells(0.66, 10), 7);
        assert_eq!(filled_cells(1.0, 10), 10);
        assert_eq!(filled_cells(3.0, 10), 10);
        assert_eq!(filled_cells(f64::NAN, 10), 0);
    }

    #[test]
    fn bar_is_exactly_width_cells() {
        assert_eq!(progress_bar(0.42, 12).width(), 12);
        assert_eq!(progress_bar(0.0, 0).width(), 0);
    }
}
