pub const THEME_KEY: &str = "theme";
pub const ICON_SWAP_DELAY_MS: u32 = 150;
pub const LOGO_GLITCH_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
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

    pub fn parse(value: &str) -> Option<Self> {
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
}

/// Durable storage for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Which of the two toggle icons is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub moon: bool,
    pub sun: bool,
}

impl IconVisibility {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self { moon: true, sun: false },
            Theme::Dark => Self { moon: false, sun: true },
        }
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Resolves the persisted theme (unknown values fall back to light) and
    /// writes the resolved value back.
    pub fn init(mut store: S) -> Self {
        let current = store
            .load()
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        store.save(current.as_str());
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.save(theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryThemeStore {
        value: Option<String>,
    }

    impl ThemeStore for MemoryThemeStore {
        fn load(&self) -> Option<String> {
            self.value.clone()
        }

        fn save(&mut self, value: &str) {
            self.value = Some(value.to_string());
        }
    }

    fn store_with(value: Option<&str>) -> MemoryThemeStore {
        MemoryThemeStore {
            value: value.map(ToString::to_string),
        }
    }

    #[test]
    fn missing_preference_defaults_to_light_and_persists_it() {
        let controller = ThemeController::init(store_with(None));

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.store().value.as_deref(), Some("light"));
    }

    #[test]
    fn unknown_preference_falls_back_to_light() {
        let controller = ThemeController::init(store_with(Some("sepia")));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn stored_dark_preference_is_restored() {
        let controller = ThemeController::init(store_with(Some("dark")));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_value_and_icons() {
        let mut controller = ThemeController::init(store_with(Some("dark")));
        let original_icons = IconVisibility::for_theme(controller.current());

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().value.as_deref(), Some("light"));
        assert_ne!(IconVisibility::for_theme(controller.current()), original_icons);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().value.as_deref(), Some("dark"));
        assert_eq!(IconVisibility::for_theme(controller.current()), original_icons);
    }

    #[test]
    fn light_theme_shows_moon_icon() {
        let icons = IconVisibility::for_theme(Theme::Light);
        assert!(icons.moon);
        assert!(!icons.sun);
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
