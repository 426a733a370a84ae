use crate::ui::mvi::Reducer;
use crate::ui::reader::intent::ReaderIntent;
use crate::ui::reader::state::{FontSize, ReaderState};

pub struct ReaderReducer;

impl Reducer for ReaderReducer {
    type State = ReaderState;
    type Intent = ReaderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReaderIntent::Open {
                book_id,
                total_pages,
                font_size,
                dark_mode,
            } => ReaderState {
                book_id,
                total_pages: total_pages.max(1),
                page: 1,
                font_size,
                dark_mode,
                controls_visible: true,
                settings_open: false,
            },
            ReaderIntent::NextPage if state.can_go_next() => ReaderState {
                page: state.page + 1,
                ..state
            },
            ReaderIntent::PrevPage if state.can_go_prev() => ReaderState {
                page: state.page - 1,
                ..state
            },
            // At a bound: the transition is refused
            ReaderIntent::NextPage | ReaderIntent::PrevPage => state,
            ReaderIntent::IncreaseFont => ReaderState {
                font_size: state.font_size.increase(),
                ..state
            },
            ReaderIntent::DecreaseFont => ReaderState {
                font_size: state.font_size.decrease(),
                ..state
            },
            ReaderIntent::SetFontSize(points) => ReaderState {
                font_size: FontSize::new(points),
                ..state
            },
            ReaderIntent::ToggleTheme => ReaderState {
                dark_mode: !state.dark_mode,
                ..state
            },
            ReaderIntent::ToggleSettings => ReaderState {
                settings_open: !state.settings_open,
                ..state
            },
            ReaderIntent::Interact => ReaderState {
                controls_visible: true,
                ..state
            },
            ReaderIntent::HideControls => ReaderState {
                controls_visible: false,
                settings_open: false,
                ..state
            },
        }
    }
}
