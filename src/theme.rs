//! Theme model: which of the two visual themes is active, how the initial
//! theme is chosen, and what the sun/moon indicator icons look like for each.
//!
//! Everything here is DOM-free; `frontend` wires it to localStorage, the
//! `prefers-color-scheme` media query, and the `data-theme` attribute.

/// Class added to the document root during the toggle crossfade.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// How long the crossfade class stays on the root, in milliseconds.
pub const TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Inline style for the sun icon. Visible and upright in light mode,
    /// rotated away and shrunk in dark mode.
    pub fn sun_style(self) -> &'static str {
        match self {
            Self::Light => "opacity: 1; transform: rotate(0deg) scale(1);",
            Self::Dark => "opacity: 0; transform: rotate(-180deg) scale(0.8);",
        }
    }

    /// Inline style for the moon icon, the mirror of [`Theme::sun_style`].
    pub fn moon_style(self) -> &'static str {
        match self {
            Self::Light => "opacity: 0; transform: rotate(180deg) scale(0.8);",
            Self::Dark => "opacity: 1; transform: rotate(0deg) scale(1);",
        }
    }
}

/// Initial theme at page load: a stored preference always wins, otherwise the
/// system dark-mode signal decides, otherwise light.
pub fn resolve_initial(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system_signal() {
        assert_eq!(resolve_initial(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve_initial(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn system_signal_decides_when_nothing_is_stored() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn toggling_twice_returns_to_the_start() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn attribute_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn dark_theme_shows_the_moon_upright() {
        assert!(Theme::Dark.moon_style().contains("opacity: 1"));
        assert!(Theme::Dark.moon_style().contains("rotate(0deg) scale(1)"));
        assert!(Theme::Dark.sun_style().contains("opacity: 0"));
        assert!(Theme::Dark.sun_style().contains("rotate(-180deg) scale(0.8)"));
    }

    #[test]
    fn light_theme_shows_the_sun_upright() {
        assert!(Theme::Light.sun_style().contains("opacity: 1"));
        assert!(Theme::Light.moon_style().contains("opacity: 0"));
        assert!(Theme::Light.moon_style().contains("rotate(180deg) scale(0.8)"));
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
