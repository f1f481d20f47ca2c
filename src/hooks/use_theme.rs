//! Light/dark theme state, shared through context and persisted to
//! `localStorage`.

use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

/// Global display mode. Mutated only through the nav toggle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the page root; every dark-mode style variant keys
    /// off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle button: the moon while light, the sun while
    /// dark.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

pub type ThemeContext = UseStateHandle<Theme>;

fn stored_theme() -> Option<Theme> {
    let storage = window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Theme::from_stored(&value)
}

fn preferred_theme() -> Theme {
    if let Some(window) = window() {
        if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
            if query.matches() {
                return Theme::Dark;
            }
        }
    }
    Theme::Light
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        if storage.set_item(STORAGE_KEY, theme.class()).is_err() {
            log::warn!("could not persist theme preference");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the theme for the whole page. The stored preference wins, then the
/// OS-level `prefers-color-scheme`, then light.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| stored_theme().unwrap_or_else(preferred_theme));

    use_effect_with_deps(
        move |theme: &Theme| {
            log::info!("theme set to {}", theme.class());
            persist_theme(*theme);
            || ()
        },
        *theme,
    );

    html! {
        <ContextProvider<ThemeContext> context={theme.clone()}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme handle; setting it re-renders every consumer.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme called outside of a ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn class_and_icon_variants() {
        assert_eq!(Theme::Light.class(), "light");
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.icon(), "fa-moon");
        assert_eq!(Theme::Dark.icon(), "fa-sun");
    }

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Theme::Dark.class()), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("solarized"), None);
        assert_eq!(Theme::from_stored(""), None);
    }

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }
}
