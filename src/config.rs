use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

/// Site configuration file, read once at startup from the working
/// directory. Server concerns (address, port) stay in Rocket.toml.
pub const CONFIG_FILE: &str = "Folio.toml";

pub const DEFAULT_CATALOG: &str = "website/projects.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path or http(s) URL of the catalog document.
    pub catalog: String,
    /// Home-link label used only when the catalog omits its own siteTitle.
    pub site_title: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            catalog: DEFAULT_CATALOG.to_string(),
            site_title: None,
        }
    }
}

impl Config {
    /// A missing or malformed config file is not fatal; defaults keep the
    /// site serving the bundled catalog path.
    pub fn load() -> Config {
        Config::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Config {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                warn!("{} not found — using default config", path.display());
                return Config::default();
            }
        };

        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to parse {}: {} — using default config",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }
}
