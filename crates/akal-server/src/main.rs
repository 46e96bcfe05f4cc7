use akal_core::{AkalClient, CollectionPipeline, ExtractionPolicy};
use akal_server::config::Config;
use akal_server::{init_tracing, router};
use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);

    let client = AkalClient::with_config(config.client_config())?;
    let pipeline = CollectionPipeline::with_fetcher(client, ExtractionPolicy::KARLSRUHE);
    let app = router(pipeline);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream_url,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
