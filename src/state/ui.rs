#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// View-only state: the active color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

/// Color theme. Light is the default; Dark adds a class on `<html>` and
/// is persisted as a preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Storage token for the persisted preference.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted preference token. Unknown tokens map to `None`
    /// so a corrupt value falls back to the system preference.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
