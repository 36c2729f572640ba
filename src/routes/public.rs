use rocket::response::content::{RawHtml, RawJson};
use rocket::State;

use folio::app::App;
use folio::catalog::Catalog;
use folio::render;
use folio::router::{self, MemoryLocation};

pub fn routes() -> Vec<rocket::Route> {
    routes![home, catalog_json, category_page, project_page]
}

// ── Shell ──────────────────────────────────────────────

#[get("/")]
pub fn home(catalog: &State<Catalog>) -> RawHtml<String> {
    prerender(catalog, "#".to_string())
}

/// Deep link mirroring `#<category>`: the shell prerendered with that
/// category open. Unknown ids are not errors; they fall back to the
/// empty shell.
#[get("/<category>")]
pub fn category_page(catalog: &State<Catalog>, category: &str) -> RawHtml<String> {
    prerender(catalog, router::format_fragment(Some(category), None))
}

/// Deep link mirroring `#<category>/<project>`.
#[get("/<category>/<project>")]
pub fn project_page(catalog: &State<Catalog>, category: &str, project: &str) -> RawHtml<String> {
    prerender(catalog, router::format_fragment(Some(category), Some(project)))
}

/// Runs the same init-from-fragment routine an interactive host runs, then
/// wraps the resulting frame in the page shell.
fn prerender(catalog: &Catalog, fragment: String) -> RawHtml<String> {
    let app = App::new(catalog, MemoryLocation::with_fragment(&fragment));
    RawHtml(render::render_page(catalog, app.frame()))
}

// ── Catalog resource ───────────────────────────────────

/// The loaded catalog re-serialized for clients. The NoCacheCatalog
/// fairing stamps no-store headers on this path so cache-bypassing
/// fetches always observe fresh data.
#[get("/projects.json")]
pub fn catalog_json(catalog: &State<Catalog>) -> RawJson<String> {
    RawJson(serde_json::to_string(catalog.inner()).unwrap_or_else(|_| "{}".to_string()))
}
