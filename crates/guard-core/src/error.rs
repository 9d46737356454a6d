use thiserror::Error;

use crate::shell::ToggleSite;

/// Problems with the TOML configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown route path in `guarded`: {0:?}")]
    UnknownRoute(String),

    #[error("\"/\" cannot be guarded: it is where logged-out visitors are redirected")]
    GuardedRoot,
}

/// Failures of the headless app shell
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("no {0} toggle is rendered")]
    ToggleUnavailable(ToggleSite),

    #[error("gave up on {path} after {limit} redirects")]
    RedirectLoop { path: String, limit: usize },
}
