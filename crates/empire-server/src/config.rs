//! Environment-driven server configuration

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Configuration for the backend process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store location on disk.
    pub db_path: PathBuf,
    /// Listening port.
    pub port: u16,
    /// Listen address.
    pub bind_addr: IpAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("energy_empire.db"),
            port: 3000,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `EMPIRE_DB_PATH` - store location (default: `energy_empire.db`)
    /// - `PORT` - listening port (default: 3000)
    /// - `BIND_ADDR` - listen address (default: `0.0.0.0`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("EMPIRE_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(port) = read_env::<u16>("PORT") {
            config.port = port;
        }
        if let Some(addr) = read_env::<IpAddr>("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
