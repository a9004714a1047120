use clap::Parser;
use vehicles::{app, open_store, Config, DEFAULT_PORT};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::telemetry::init_tracing();

    let config = Config::parse();
    info!("Database: {}", config.db_path.display());
    let store = open_store(&config)?;

    let addr = config.server.socket_addr(DEFAULT_PORT)?;
    let app = app(store, &config.server);

    shared::server::serve(app, addr).await?;
    Ok(())
}
