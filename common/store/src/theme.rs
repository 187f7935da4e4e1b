use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme name as carried by the state.
///
/// Any string is accepted: a theme outside of [`Themes`] is kept as is and
/// ends up as an unstyled class name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(String);

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<Themes> {
        Themes::try_from(self.as_str()).ok()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Themes::default().into()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Themes> for Theme {
    fn from(value: Themes) -> Self {
        Self::new(value.as_str())
    }
}

impl PartialEq<str> for Theme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Theme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Themes {
    Dark,
    Light,
    None,
}

impl Default for Themes {
    fn default() -> Self {
        Self::Light
    }
}

impl Themes {
    /// Order of the options offered by the theme select.
    pub const ALL: [Themes; 3] = [Self::Dark, Self::Light, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::None => "none",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown theme `{0}`, expected one of: dark, light, none")]
pub struct UnknownTheme(pub String);

impl TryFrom<&str> for Themes {
    type Error = UnknownTheme;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "dark" => Self::Dark,
            "light" => Self::Light,
            "none" => Self::None,
            other => return Err(UnknownTheme(other.to_owned())),
        };
        debug_assert_eq!(theme.as_str(), value);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_none, assert_ok_eq};

    #[test]
    fn known_themes_parse() {
        for theme in Themes::ALL {
            assert_ok_eq!(Themes::try_from(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_theme_is_rejected_by_classification_only() {
        assert_err!(Themes::try_from("pastel"));
        assert_err!(Themes::try_from("Dark"));

        let theme = Theme::from("pastel");
        assert_none!(theme.known());
        assert_eq!(theme.as_str(), "pastel");
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), "light");
        assert_eq!(Themes::default(), Themes::Light);
    }

    #[test]
    fn error_message_names_the_value() {
        let err = Themes::try_from("blue").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown theme `blue`, expected one of: dark, light, none"
        );
    }
}
