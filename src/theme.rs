use std::str::FromStr;

use crate::dom::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn body_class(self) -> String {
        format!("{}-theme", self.as_str())
    }

    /// The toggle shows the theme you'd switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Owns the current theme and keeps the persisted flag in sync.
pub struct ThemeController<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|v| v.parse::<Theme>().ok())
            .unwrap_or_default();
        let controller = Self { store, current };
        controller.persist();
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
            log::warn!("couldn't save theme: {e}");
        }
    }
}
