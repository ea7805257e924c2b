#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two visual modes of the page.
///
/// Persisted under the `"theme"` storage key as `"dark"` / `"gradient"`;
/// anything else stored there reads back as [`Theme::Dark`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Gradient,
}

impl Theme {
    /// The storage / `data-theme` attribute value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Gradient => "gradient",
        }
    }

    /// Parse a stored value, falling back to the dark default.
    pub fn parse(value: &str) -> Self {
        match value {
            "gradient" => Self::Gradient,
            _ => Self::Dark,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Gradient,
            Self::Gradient => Self::Dark,
        }
    }

    /// Accessibility label for a toggle control showing this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to gradient theme",
            Self::Gradient => "Switch to dark theme",
        }
    }
}

/// Current visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Flip dark ↔ gradient.
    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
    }
}
