//! Configuration for where the login toggle lives and which routes are guarded

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::ConfigError;
use crate::route::Route;

// =============================================================================
// File-based Configuration (TOML)
// =============================================================================

/// Where the login/logout button is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TogglePlacement {
    #[default]
    Navbar,
    Home,
    Both,
}

impl TogglePlacement {
    pub fn in_navbar(self) -> bool {
        matches!(self, TogglePlacement::Navbar | TogglePlacement::Both)
    }

    pub fn on_home(self) -> bool {
        matches!(self, TogglePlacement::Home | TogglePlacement::Both)
    }
}

/// Configuration as written in TOML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub toggle: TogglePlacement,
    /// Route paths wrapped by the guard
    #[serde(default = "default_guarded")]
    pub guarded: Vec<String>,
}

fn default_guarded() -> Vec<String> {
    vec![Route::Profile.path().to_string()]
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub toggle: TogglePlacement,
    guarded: BTreeSet<Route>,
}

impl Default for Config {
    /// Toggle in the navbar, only `/profile` guarded
    fn default() -> Self {
        Self {
            toggle: TogglePlacement::default(),
            guarded: BTreeSet::from([Route::Profile]),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file_config: FileConfig = toml::from_str(content)?;
        Self::from_file(&file_config)
    }

    pub fn from_file(file_config: &FileConfig) -> Result<Self, ConfigError> {
        let guarded = file_config
            .guarded
            .iter()
            .map(|path| path.parse::<Route>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        if guarded.contains(&Route::ROOT) {
            return Err(ConfigError::GuardedRoot);
        }

        Ok(Self {
            toggle: file_config.toggle,
            guarded,
        })
    }

    pub fn with_toggle(mut self, toggle: TogglePlacement) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn with_guarded(mut self, route: Route) -> Result<Self, ConfigError> {
        if route == Route::ROOT {
            return Err(ConfigError::GuardedRoot);
        }
        self.guarded.insert(route);
        Ok(self)
    }

    pub fn is_guarded(&self, route: Route) -> bool {
        self.guarded.contains(&route)
    }

    pub fn guarded(&self) -> impl Iterator<Item = Route> + '_ {
        self.guarded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.is_guarded(Route::Profile));
        assert!(!config.is_guarded(Route::Setting));
        assert!(config.toggle.in_navbar());
        assert!(!config.toggle.on_home());
    }

    #[test]
    fn test_guard_setting_and_home_toggle() {
        let config = Config::from_toml_str(
            r#"
            toggle = "home"
            guarded = ["/profile", "/setting"]
            "#,
        )
        .unwrap();

        assert_eq!(config.toggle, TogglePlacement::Home);
        assert_eq!(config.guarded().collect::<Vec<_>>(), [Route::Profile, Route::Setting]);
    }

    #[test]
    fn test_empty_guard_list() {
        let config = Config::from_toml_str("guarded = []").unwrap();
        assert_eq!(config.guarded().count(), 0);
    }

    #[test]
    fn test_both_placement() {
        let config = Config::from_toml_str(r#"toggle = "both""#).unwrap();
        assert!(config.toggle.in_navbar());
        assert!(config.toggle.on_home());
    }

    #[test]
    fn test_unknown_route() {
        let err = Config::from_toml_str(r#"guarded = ["/admin"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRoute(path) if path == "/admin"));
    }

    #[test]
    fn test_root_cannot_be_guarded() {
        let err = Config::from_toml_str(r#"guarded = ["/"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::GuardedRoot));
        assert!(matches!(Config::default().with_guarded(Route::Home), Err(ConfigError::GuardedRoot)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Config::from_toml_str(r#"toggle = "sidebar""#), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_toml_str("colour = 1"), Err(ConfigError::Parse(_))));
    }
}
