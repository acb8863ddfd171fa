use log::warn;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_STORE_DIR: &str = "data";

/// Start-up settings, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub store_dir: PathBuf,
    /// External ratings file replacing the bundled one.
    pub ratings_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            ratings_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("invalid PORT '{}', using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let host = match value("HOST") {
            Some(raw) => raw.parse::<IpAddr>().unwrap_or_else(|_| {
                warn!("invalid HOST '{}', using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        ServerConfig {
            host,
            port,
            store_dir: value("STORE_DIR").map(PathBuf::from).unwrap_or(defaults.store_dir),
            ratings_path: value("RATINGS_PATH").map(PathBuf::from),
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
