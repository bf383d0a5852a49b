//! vox bound to an ephemeral loopback port

use std::{net::SocketAddr, time::Duration};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;
use vox_config::Config;
use vox_server::Server;

const RAW_READ_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    stop: CancellationToken,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Build vox from `config` and serve it until the handle is dropped
    ///
    /// Startup failures (voice listing, bad format) surface here, before
    /// anything is bound.
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let router = Server::new(config).await?.into_router();

        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let stop = CancellationToken::new();
        let task = tokio::spawn({
            let stopped = stop.clone().cancelled_owned();
            async move {
                if let Err(e) = axum::serve(listener, router).with_graceful_shutdown(stopped).await {
                    eprintln!("test server on {addr} failed: {e}");
                }
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            stop,
            task,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Write `request` verbatim and collect everything until the server hangs up
    ///
    /// reqwest always fixes up `Content-Length`; this does not.
    pub async fn raw_exchange(&self, request: &[u8]) -> anyhow::Result<String> {
        let mut stream = TcpStream::connect(self.addr).await?;
        stream.write_all(request).await?;

        let mut response = Vec::new();
        tokio::time::timeout(RAW_READ_TIMEOUT, stream.read_to_end(&mut response)).await??;

        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop.cancel();
        // Open keep-alive connections would otherwise hold graceful shutdown
        self.task.abort();
    }
}
