use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use marquee_catalog::CatalogService;
use marquee_core::Schema;
use marquee_gateway::cli::CLI;
use marquee_gateway::{telemetry, App, AppState, OriginPolicy};
use marquee_generator::UuidGenerator;
use marquee_storage::{seed, InMemoryRepository};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    let schema = Schema::current();
    let movies = match &config.seed_path {
        Some(path) => seed::from_path(path, &schema)
            .with_context(|| format!("failed to load seed dataset {}", path.display()))?,
        None => seed::bundled(&schema).context("failed to load bundled seed dataset")?,
    };
    let policy = OriginPolicy::from_origins(&config.allowed_origins)?;

    info!(
        movies = movies.len(),
        allowed_origins = ?config.allowed_origins,
        max_year = schema.max_year(),
        "seeded movie catalog"
    );

    let repository = InMemoryRepository::with_movies(schema, movies);
    let catalog = CatalogService::with_schema(repository, UuidGenerator::new(), schema);
    let app = App::router(AppState::new(Arc::new(catalog)), policy);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
