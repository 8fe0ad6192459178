//! Theme preference: a single dark/light flag, persisted on every change.
//!
//! The preference is owned by one `ThemeManager` constructed at startup and
//! passed down by reference; there is no ambient global theme state.

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::Result;

/// The persisted values for the `theme` key.
const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub is_dark: bool,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        if self.is_dark {
            THEME_DARK
        } else {
            THEME_LIGHT
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            THEME_DARK => Some(Self { is_dark: true }),
            THEME_LIGHT => Some(Self { is_dark: false }),
            _ => None,
        }
    }
}

/// Storage seam for the theme preference, so the manager can be tested
/// without touching the filesystem.
pub trait PreferenceStore {
    /// Read the persisted preference, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<ThemePreference>>;
    /// Persist the preference.
    fn save(&mut self, pref: ThemePreference) -> Result<()>;
}

/// Persists the preference under `[ui] theme` in the app config file.
pub struct ConfigPreferenceStore {
    path: PathBuf,
}

impl ConfigPreferenceStore {
    pub fn new() -> Self {
        Self {
            path: AppConfig::config_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for ConfigPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn load(&self) -> Result<Option<ThemePreference>> {
        let config = AppConfig::load_from(&self.path)?;
        Ok(config
            .ui
            .theme
            .as_deref()
            .and_then(ThemePreference::from_str))
    }

    fn save(&mut self, pref: ThemePreference) -> Result<()> {
        let mut config = AppConfig::load_from(&self.path)?;
        config.ui.theme = Some(pref.as_str().to_string());
        config.save_to(&self.path)
    }
}

/// Detect the OS color scheme, defaulting to dark when unknown.
pub fn detect_os_preference() -> ThemePreference {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => ThemePreference { is_dark: false },
        Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
            ThemePreference { is_dark: true }
        }
    }
}

/// Sole owner of the theme flag. Mutation happens only through `toggle`,
/// which persists synchronously before returning.
pub struct ThemeManager {
    preference: ThemePreference,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    /// Build from the store, falling back to the OS color scheme when no
    /// preference has been persisted yet.
    pub fn new(store: Box<dyn PreferenceStore>) -> Result<Self> {
        let preference = match store.load()? {
            Some(pref) => pref,
            None => detect_os_preference(),
        };
        Ok(Self { preference, store })
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Flip dark/light and persist immediately. Returns the new flag.
    pub fn toggle(&mut self) -> Result<bool> {
        self.preference.is_dark = !self.preference.is_dark;
        self.store.save(self.preference)?;
        tracing::debug!("theme toggled to {}", self.preference.as_str());
        Ok(self.preference.is_dark)
    }

    /// Set an explicit preference and persist it.
    pub fn set(&mut self, pref: ThemePreference) -> Result<()> {
        self.preference = pref;
        self.store.save(self.preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MemoryStore {
        saved: Rc<RefCell<Vec<ThemePreference>>>,
        initial: Option<ThemePreference>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<ThemePreference>> {
            Ok(self.initial)
        }

        fn save(&mut self, pref: ThemePreference) -> Result<()> {
            self.saved.borrow_mut().push(pref);
            Ok(())
        }
    }

    #[test]
    fn test_toggle_is_involution_and_writes_twice() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let store = MemoryStore {
            saved: saved.clone(),
            initial: Some(ThemePreference { is_dark: true }),
        };
        let mut manager = ThemeManager::new(Box::new(store)).unwrap();

        assert!(manager.is_dark());
        manager.toggle().unwrap();
        assert!(!manager.is_dark());
        manager.toggle().unwrap();
        assert!(manager.is_dark());

        let writes = saved.borrow();
        assert_eq!(writes.len(), 2);
        assert!(!writes[0].is_dark);
        assert!(writes[1].is_dark);
    }

    #[test]
    fn test_persisted_preference_wins() {
        let store = MemoryStore {
            saved: Rc::new(RefCell::new(Vec::new())),
            initial: Some(ThemePreference { is_dark: false }),
        };
        let manager = ThemeManager::new(Box::new(store)).unwrap();
        assert!(!manager.is_dark());
    }

    #[test]
    fn test_config_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ConfigPreferenceStore::with_path(path.clone());
        assert_eq!(store.load().unwrap(), None);

        store.save(ThemePreference { is_dark: false }).unwrap();
        let store = ConfigPreferenceStore::with_path(path);
        assert_eq!(
            store.load().unwrap(),
            Some(ThemePreference { is_dark: false })
        );
    }

    #[test]
    fn test_os_detection_resolves_to_a_preference() {
        // Whatever the platform reports (or fails to), detection lands on
        // one of the two persistable values.
        let pref = detect_os_preference();
        assert_eq!(ThemePreference::from_str(pref.as_str()), Some(pref));
    }

    #[test]
    fn test_preference_string_roundtrip() {
        for is_dark in [true, false] {
            let pref = ThemePreference { is_dark };
            assert_eq!(ThemePreference::from_str(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::from_str("solarized"), None);
    }
}
