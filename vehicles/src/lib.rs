//! Vehicle inventory service: HTML pages with a form and JSON endpoints under `/carros`.

pub mod db;
mod routes;
mod templates;

use std::path::PathBuf;

use axum::{routing::get, Router};
use clap::Parser;
use shared::{ServerArgs, Store};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub const DEFAULT_PORT: u16 = 8001;

#[derive(Parser, Debug, Clone)]
#[command(name = "vehicle-service", about = "Vehicle inventory backed by SQLite", version)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerArgs,

    /// SQLite database file
    #[arg(long, env = "VEHICLES_DB_PATH", default_value = "carros.db")]
    pub db_path: PathBuf,
}

/// Create the vehicles table if needed and return the store handle.
pub fn open_store(config: &Config) -> Result<Store, shared::StoreError> {
    Store::open(&config.db_path, db::SCHEMA)
}

pub fn app(store: Store, server: &ServerArgs) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route(
            "/carros",
            get(routes::list_vehicles).post(routes::create_vehicle),
        )
        .route(
            "/carros/:id",
            get(routes::get_vehicle)
                .put(routes::update_vehicle)
                .delete(routes::delete_vehicle),
        )
        .route("/editar/:id", get(routes::edit_page))
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
