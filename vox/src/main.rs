#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use vox_config::Config;
use vox_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Initialize logging
    vox_telemetry::init(config.telemetry.as_ref(), args.log_filter.as_deref())?;

    tracing::info!(
        config_path = ?args.config.as_ref().map(|path| path.display().to_string()),
        synthesizer = %config.synthesizer.command,
        "starting vox"
    );

    let listen_address = args.listen_address(config.server.listen_address());

    // Build server; fails if the synthesizer cannot list its voices
    let server = Box::pin(Server::new(config)).await?.with_listen_address(listen_address);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("vox stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
