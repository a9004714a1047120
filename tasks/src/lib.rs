//! Task (to-do) service: JSON API under `/tarefas` plus an HTML page at `/`.

pub mod db;
mod routes;
mod templates;

use std::path::PathBuf;

use axum::{routing::get, Router};
use clap::Parser;
use shared::{ServerArgs, Store};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Parser, Debug, Clone)]
#[command(name = "task-service", about = "To-do list service backed by SQLite", version)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerArgs,

    /// SQLite database file
    #[arg(long, env = "TASKS_DB_PATH", default_value = "tarefas.db")]
    pub db_path: PathBuf,
}

/// Create the tasks table if needed and return the store handle.
pub fn open_store(config: &Config) -> Result<Store, shared::StoreError> {
    Store::open(&config.db_path, db::SCHEMA)
}

pub fn app(store: Store, server: &ServerArgs) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/tarefas", get(routes::list_tasks).post(routes::create_task))
        .route(
            "/tarefas/:id",
            get(routes::get_task)
                .put(routes::update_task)
                .delete(routes::delete_task),
        )
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
