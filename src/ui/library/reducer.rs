use crate::catalog::{categories, Category};
use crate::ui::library::intent::LibraryIntent;
use crate::ui::library::state::{FilterMenu, LibraryState};
use crate::ui::mvi::Reducer;

pub struct LibraryReducer;

impl Reducer for LibraryReducer {
    type State = LibraryState;
    type Intent = LibraryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LibraryIntent::Load { books } => LibraryState {
                categories: categories(&books),
                books,
                filter: Category::All,
                selected: 0,
                menu: FilterMenu::Closed,
            },
            LibraryIntent::SelectCategory(category) => with_filter(state, category),
            LibraryIntent::NextCategory => {
                let next = cycle(&state, 1);
                with_filter(state, next)
            }
            LibraryIntent::PrevCategory => {
                let prev = cycle(&state, -1);
                with_filter(state, prev)
            }
            LibraryIntent::ToggleFilterMenu => {
                let menu = match state.menu {
                    FilterMenu::Closed => FilterMenu::Open {
                        cursor: state.category_index(&state.filter).unwrap_or(0),
                    },
                    FilterMenu::Open { .. } => FilterMenu::Closed,
                };
                LibraryState { menu, ..state }
            }
            LibraryIntent::MenuUp => move_cursor(state, -1),
            LibraryIntent::MenuDown => move_cursor(state, 1),
            LibraryIntent::ConfirmMenu => match state.menu {
                FilterMenu::Open { cursor } => match state.categories.get(cursor).cloned() {
                    Some(category) => with_filter(state, category),
                    None => LibraryState {
                        menu: FilterMenu::Closed,
                        ..state
                    },
                },
                FilterMenu::Closed => state,
            },
            LibraryIntent::MoveSelection(delta) => {
                let len = state.visible_books().len() as isize;
                if len == 0 {
                    return LibraryState {
                        selected: 0,
                        ..state
                    };
                }
                let selected = (state.selected as isize)
                    .saturating_add(delta)
                    .rem_euclid(len) as usize;
                LibraryState { selected, ..state }
            }
            LibraryIntent::Select(index) if index < state.visible_books().len() => LibraryState {
                selected: index,
                ..state
            },
            LibraryIntent::Select(_) => state,
        }
    }
}

/// Applies a filter, resets the selection and closes the menu.
fn with_filter(state: LibraryState, filter: Category) -> LibraryState {
    LibraryState {
        filter,
        selected: 0,
        menu: FilterMenu::Closed,
        ..state
    }
}

/// Category `step` positions away from the active one, wrapping.
fn cycle(state: &LibraryState, step: isize) -> Category {
    let len = state.categories.len();
    if len == 0 {
        return Category::All;
    }
    let current = state.category_index(&state.filter).unwrap_or(0) as isize;
    let index = (current + step).rem_euclid(len as isize) as usize;
    state.categories[index].clone()
}

fn move_cursor(state: LibraryState, step: isize) -> LibraryState {
    match state.menu {
        FilterMenu::Open { cursor } if !state.categories.is_empty() => {
            let len = state.categories.len() as isize;
            let cursor = (cursor as isize + step).rem_euclid(len) as usize;
            LibraryState {
                menu: FilterMenu::Open { cursor },
                ..state
            }
        }
        _ => state,
    }
}
