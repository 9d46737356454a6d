//! App configuration, embedded from guard.toml at compile time

use guard_core::Config;
use leptos::prelude::*;
use tracing::warn;

const CONFIG_TOML: &str = include_str!("../guard.toml");

/// Parse the embedded config, falling back to defaults if it is invalid
pub fn load() -> Config {
    Config::from_toml_str(CONFIG_TOML).unwrap_or_else(|err| {
        warn!(%err, "invalid guard.toml, using default configuration");
        Config::default()
    })
}

pub fn provide_config(config: Config) {
    provide_context(config);
}

pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        assert!(Config::from_toml_str(CONFIG_TOML).is_ok());
    }
}
