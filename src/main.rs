use crate::catalog::Catalog;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use crate::session::MemorySessionStore;
use astra::{Request, Server};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listings_browser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    // 1️⃣ Load the dataset once; it never changes afterwards
    let catalog = match Catalog::load(config.data.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Dataset load failed: {e}");
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        tracing::warn!("dataset has no listings");
    }
    tracing::info!(
        listings = catalog.len(),
        visible = catalog.all_listings().len(),
        "dataset loaded"
    );

    let state = AppState {
        catalog,
        sessions: Box::new(MemorySessionStore::new(config.session_ttl())),
        view: config.view_settings(),
    };

    // 2️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.workers.max(1));

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        tracing::debug!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
