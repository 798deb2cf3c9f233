use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 5000;

/// Server settings. Flags take precedence over `HOST` / `PORT`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "fare_server",
    about = "HTTP API for the surge pricing simulator",
    long_about = "Serves price calculations, scenario presets, comparisons and\n\
                  step-by-step traces over JSON. Log level follows RUST_LOG."
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
