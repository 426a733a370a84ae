use crate::catalog::BookId;
use crate::ui::mvi::UiState;

/// Reader font size in points, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    pub const MIN: u16 = 12;
    pub const MAX: u16 = 32;
    /// Increment applied by the A-/A+ controls.
    pub const STEP: u16 = 2;
    pub const DEFAULT: FontSize = FontSize(18);

    /// Builds a font size, clamping `points` into range.
    pub fn new(points: u16) -> Self {
        Self(points.clamp(Self::MIN, Self::MAX))
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }

    pub fn is_min(self) -> bool {
        self.0 == Self::MIN
    }

    pub fn is_max(self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Transient state of the reader view. Dropped when leaving the reader.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderState {
    /// Book requested by the route. Kept for display and logging only.
    pub book_id: BookId,
    pub total_pages: u32,
    /// Current page, 1-based, never above `total_pages`.
    pub page: u32,
    pub font_size: FontSize,
    pub dark_mode: bool,
    pub controls_visible: bool,
    pub settings_open: bool,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            book_id: 0,
            total_pages: 1,
            page: 1,
            font_size: FontSize::DEFAULT,
            dark_mode: true,
            controls_visible: true,
            settings_open: false,
        }
    }
}

impl UiState for ReaderState {}

impl ReaderState {
    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Fraction of the book read, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (f64::from(self.page) / f64::from(self.total_pages)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_new_clamps() {
        assert_eq!(FontSize::new(4).get(), FontSize::MIN);
        assert_eq!(FontSize::new(99).get(), FontSize::MAX);
        assert_eq!(FontSize::new(21).get(), 21);
    }

    #[test]
    fn font_size_steps_saturate() {
        assert_eq!(FontSize::new(32).increase().get(), 32);
        assert_eq!(FontSize::new(31).increase().get(), 32);
        assert_eq!(FontSize::new(12).decrease().get(), 12);
        assert_eq!(FontSize::new(13).decrease().get(), 12);
    }

    #[test]
    fn default_state_is_first_page_dark_with_controls() {
        let state = ReaderState::default();
        assert_eq!(state.page, 1);
        assert!(state.dark_mode);
        assert!(state.controls_visible);
        assert!(!state.settings_open);
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn progress_is_page_over_total() {
        let state = ReaderState {
            total_pages: 200,
            page: 50,
            ..ReaderState::default()
        };
        assert!((state.progress() - 0.25).abs() < f64::EPSILON);
    }
}
