//! Known client-side routes and path matching

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Props handed to a page, parsed from the query string
pub type Props = BTreeMap<String, String>;

/// Routes declared by the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    Home,
    Profile,
    Setting,
}

impl Route {
    /// Every route, in navbar order
    pub const ALL: [Route; 3] = [Route::Home, Route::Profile, Route::Setting];

    /// Where the guard sends logged-out visitors
    pub const ROOT: Route = Route::Home;

    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Setting => "/setting",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Setting => "Setting",
        }
    }

    /// Match a raw path (query, fragment and trailing slash are ignored)
    pub fn from_path(path: &str) -> Option<Self> {
        Location::parse(path).route()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ConfigError;

    /// Strict parse used by configuration: only the canonical path is accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| ConfigError::UnknownRoute(s.to_string()))
    }
}

/// A parsed history entry: normalized path plus query props
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub props: Props,
}

impl Location {
    /// Parse "/profile/?tab=keys#top" into path "/profile" and props {tab: keys}
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        let (path, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));

        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        let props = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_string(), value.to_string())
            })
            .collect();

        Self { path, props }
    }

    pub fn route(&self) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_normalizes_trailing_slash_query_and_fragment() {
        assert_eq!(Route::from_path("/profile/"), Some(Route::Profile));
        assert_eq!(Route::from_path("/setting?x=1"), Some(Route::Setting));
        assert_eq!(Route::from_path("/#top"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("/profile/extra"), None);
    }

    #[test]
    fn test_query_becomes_props() {
        let location = Location::parse("/profile?tab=keys&debug&=x#frag");
        assert_eq!(location.path, "/profile");
        assert_eq!(location.props.get("tab").map(String::as_str), Some("keys"));
        assert_eq!(location.props.get("debug").map(String::as_str), Some(""));
        assert_eq!(location.props.len(), 3);
    }

    #[test]
    fn test_strict_parse_for_config() {
        assert_eq!("/setting".parse::<Route>().unwrap(), Route::Setting);
        assert!(matches!("/setting/".parse::<Route>(), Err(ConfigError::UnknownRoute(_))));
        assert!("setting".parse::<Route>().is_err());
    }
}
