use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Text to speech over HTTP
#[derive(Debug, Parser)]
#[command(name = "vox", about = "Serve WAV audio rendered by the system speech synthesizer")]
pub struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "VOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "VOX_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Override the host part of the listen address
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Override the port part of the listen address
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter directive, e.g. "debug" or "tts=debug,info"
    #[arg(long, env = "VOX_LOG")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Apply `--listen`, `--host` and `--port` on top of `configured`
    pub fn listen_address(&self, configured: SocketAddr) -> SocketAddr {
        let mut address = self.listen.unwrap_or(configured);

        if let Some(host) = self.host {
            address.set_ip(host);
        }
        if let Some(port) = self.port {
            address.set_port(port);
        }

        address
    }
}
