mod health;
mod info;
mod panic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use vox_config::Config;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the speech synthesizer cannot be queried for its
    /// voices or the configuration is unusable
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();

        let tts_state = tts::build_server(&config).await?;

        // Root usage page
        let info_text: Arc<str> = info::render(&config.wav).into();
        let mut app = Router::new().route(
            "/",
            get(move || info::info_handler(Arc::clone(&info_text))),
        );

        // Health check
        if config.server.health.enabled {
            let tts = Arc::clone(&tts_state);
            app = app.route(
                &config.server.health.path,
                get(move || health::health_handler(Arc::clone(&tts))),
            );
        }

        // TTS routes; their fallback serves the `/v1/wav` prefix and 404s the rest
        app = app.merge(tts::endpoint_router().with_state(tts_state));

        // Apply middleware layers (innermost first)

        // Panics become 500s before tracing records the response
        app = app.layer(CatchPanicLayer::custom(panic::handle_panic));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Replace the listen address (command-line overrides)
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

