use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

/// Runtime knobs, overridable through `NUMSCRAPE_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Transport timeout for the page fetch, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Default destination for saved numbers.
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timeout_secs: 30,
            user_agent: concat!("numscrape/", env!("CARGO_PKG_VERSION")).to_string(),
            output: PathBuf::from("numbers.txt"),
        }
    }
}

/// Load settings from the environment, falling back to defaults when the
/// environment has nothing usable.
pub fn load() -> Settings {
    let loaded = Config::builder()
        .add_source(Environment::with_prefix("NUMSCRAPE").try_parsing(true))
        .build()
        .and_then(|config| config.try_deserialize());

    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            debug!("using default settings: {e}");
            Settings::default()
        }
    }
}
