use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use folio::config::Config;
use folio::store::CatalogSource;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website", "website/static"];

/// Run all boot checks. Call this before Rocket launches. Creates missing
/// directories and aborts if the catalog cannot possibly be loaded.
pub fn run(config: &Config) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Catalog reachable ───────────────────────────
    match CatalogSource::classify(&config.catalog) {
        CatalogSource::Local(path) => {
            if !path.exists() {
                error!("  MISSING catalog file: {}", path.display());
                errors += 1;
            }
        }
        CatalogSource::Remote(url) => {
            info!("  Remote catalog: {}", url);
        }
    }

    // ── 3. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default server config");
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed. All systems go.");
    }
}
