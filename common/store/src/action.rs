use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// State change request.
///
/// Serialized internally tagged on `type`, e.g.
/// `{"type": "CHANGE_THEME", "theme": "dark"}`. A `CHANGE_THEME` without a
/// `theme` does not parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "CHANGE_THEME")]
    ChangeTheme { theme: Theme },

    /// Dispatched once by the store itself to compute the initial state.
    #[serde(rename = "@@INIT")]
    Init,

    /// Any action type nobody handles.
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn change_theme(theme: impl Into<Theme>) -> Self {
        Self::ChangeTheme {
            theme: theme.into(),
        }
    }
}

/// Action a store dispatches to itself on creation.
pub trait InitAction {
    fn init() -> Self;
}

impl InitAction for Action {
    fn init() -> Self {
        Self::Init
    }
}
