use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use url::Url;

use crate::catalog::Catalog;

/// Where the catalog document lives. Classified once from the configured
/// source string: an http(s) URL is fetched over the network, anything else
/// is a path relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Local(PathBuf),
    Remote(String),
}

impl CatalogSource {
    pub fn classify(raw: &str) -> CatalogSource {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                CatalogSource::Remote(raw.to_string())
            }
            _ => CatalogSource::Local(PathBuf::from(raw)),
        }
    }
}

/// One-shot catalog load. The startup sequence does not recover from a
/// failure here; the process aborts with the returned message.
pub fn load(source: &CatalogSource) -> Result<Catalog, String> {
    let catalog = match source {
        CatalogSource::Local(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            serde_json::from_str(&raw)
                .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?
        }
        CatalogSource::Remote(url) => fetch(url)?,
    };

    info!(
        "Catalog loaded: {} categories, {} projects",
        catalog.categories.len(),
        catalog
            .categories
            .iter()
            .map(|c| c.projects.len())
            .sum::<usize>()
    );

    Ok(catalog)
}

/// Blocking GET with cache-bypass request headers, so a re-deploy of the
/// catalog document is picked up on the next start.
fn fetch(url: &str) -> Result<Catalog, String> {
    // The blocking client must not run on a runtime thread, and startup
    // executes under the server runtime; the request gets its own thread.
    let url = url.to_string();
    std::thread::spawn(move || fetch_blocking(&url))
        .join()
        .map_err(|_| "Catalog fetch thread panicked".to_string())?
}

fn fetch_blocking(url: &str) -> Result<Catalog, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| format!("HTTP client error: {}", e))?;

    let resp = client
        .get(url)
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .send()
        .map_err(|e| format!("Catalog request failed: {}", e))?;

    if !resp.status().is_success() {
        return Err(format!("Failed to load {}: {}", url, resp.status()));
    }

    resp.json()
        .map_err(|e| format!("Failed to parse {}: {}", url, e))
}
