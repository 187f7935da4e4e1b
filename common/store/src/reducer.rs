// Slice reducers and their combination into the application reducer.
//
// `None` state stands for the very first call, when the slice falls back to
// its own default.

use crate::{Action, AppState, Theme};

pub fn theme_reducer(state: Option<&Theme>, action: &Action) -> Theme {
    match action {
        Action::ChangeTheme { theme } => theme.clone(),
        _ => state.cloned().unwrap_or_default(),
    }
}

pub fn app_reducer(state: Option<&AppState>, action: &Action) -> AppState {
    AppState {
        theme: theme_reducer(state.map(|state| &state.theme), action),
    }
}
