use anyhow::Context;
use trivia_api::configuration::Settings;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Failed to load settings")?;

    let pool = establish_connection(
        &settings.database.path,
        settings.database.create_if_missing,
    )
    .await
    .with_context(|| format!("Cannot open {}", settings.database.path.display()))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await.context("Migrations failed")?;

    let result = run_server(pool.clone(), &settings.application).await;
    pool.close().await;
    result
}
