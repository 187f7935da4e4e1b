mod action;
mod connection;
mod reducer;
mod state;
mod store;
mod theme;

pub use action::{Action, InitAction};
pub use connection::Connection;
pub use reducer::{app_reducer, theme_reducer};
pub use state::AppState;
pub use store::{Store, Subscription};
pub use theme::{Theme, Themes, UnknownTheme};

pub type AppStore = Store<AppState, Action>;

/// Creates the application store, optionally preloaded with a theme.
pub fn app_store(initial_theme: Option<Theme>) -> AppStore {
    match initial_theme {
        Some(theme) => Store::with_state(app_reducer, AppState { theme }),
        None => Store::new(app_reducer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_store_starts_light() {
        assert_eq!(app_store(None).state().theme, "light");
    }

    #[test]
    fn app_store_preloaded() {
        let store = app_store(Some(Themes::Dark.into()));
        assert_eq!(store.state().theme, "dark");
    }
}
