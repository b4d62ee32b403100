use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spine_labels::{
    api::create_router,
    application::{builder::ApplicationBuilder, cleanup::PeriodicTaskRunner},
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting spine label service");

    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    let state = ApplicationBuilder::new(config.clone())
        .with_infrastructure()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize infrastructure: {}", e))?
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    // Evict stale QR previews in the background
    if state.qr_preview_use_case.cache().is_some() {
        let runner = PeriodicTaskRunner::new(
            Arc::clone(&state.qr_preview_use_case),
            config.qr_cache_ttl(),
            "qr_cache_cleanup",
        );
        tokio::spawn(async move {
            runner
                .run(|use_case| async move {
                    let evicted = use_case.cleanup_expired();
                    if evicted > 0 {
                        info!("Evicted {} stale QR preview(s)", evicted);
                    }
                    Ok(())
                })
                .await;
        });
        info!("QR preview cache cleanup started");
    }

    let app = create_router(state);

    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
