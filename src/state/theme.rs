//! Theme state: a tab-wide light/dark flag, persisted across reloads and
//! broadcast through a single `dark` class on the document root.
//!
//! Precedence at startup: persisted preference, then the OS-level
//! color-scheme signal, then light. Toggling persists the new value; when
//! storage is unavailable the theme still flips for the rest of the session.

use leptos::*;

use crate::utils::storage;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Literal persisted under the storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Startup precedence: a stored literal wins over the ambient signal; an
/// absent or unrecognized value falls through to it.
fn resolve_initial(stored: Option<&str>, system_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn apply_to_dom(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let list = root.class_list();
        if theme.is_dark() {
            let _ = list.add_1(DARK_CLASS);
        } else {
            let _ = list.remove_1(DARK_CLASS);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_dom(_theme: Theme) {}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    /// Reads the persisted preference (falling back to the ambient signal)
    /// and applies the result to the document immediately, so the first
    /// paint already has the right marker.
    pub fn new() -> Self {
        let initial = resolve_initial(
            storage::get_item(STORAGE_KEY).as_deref(),
            system_prefers_dark(),
        );
        apply_to_dom(initial);
        Self {
            theme: create_rw_signal(initial),
        }
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Flips the theme, persists the new literal, and re-applies the
    /// document marker. Persistence failure degrades to session-only memory.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(err) = storage::set_item(STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        apply_to_dom(next);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_dark_wins_over_ambient_signal() {
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial(Some("dark"), true), Theme::Dark);
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
    }

    #[test]
    fn unrecognized_or_missing_value_falls_back() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("solarized"), true), Theme::Dark);
        assert_eq!(resolve_initial(Some(""), false), Theme::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn literals_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
