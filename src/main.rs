#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::response::content::RawHtml;

mod boot;
mod routes;

use folio::config::Config;
use folio::store::{self, CatalogSource};

/// Stamps no-store headers on the catalog resource so clients fetching it
/// with cache bypass always see the currently served document.
pub struct NoCacheCatalog;

#[rocket::async_trait]
impl Fairing for NoCacheCatalog {
    fn info(&self) -> Info {
        Info {
            name: "No-Cache Catalog",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().as_str() == "/projects.json" {
            res.set_header(Header::new(
                "Cache-Control",
                "no-store, no-cache, must-revalidate, max-age=0",
            ));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = Config::load();

    // Boot check — verify/create directories, validate the catalog source
    boot::run(&config);

    let source = CatalogSource::classify(&config.catalog);
    let mut catalog = store::load(&source).expect("Failed to load catalog");
    if catalog.site_title.is_none() {
        catalog.site_title = config.site_title.clone();
    }

    rocket::build()
        .manage(catalog)
        .attach(NoCacheCatalog)
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
