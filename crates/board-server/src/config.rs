use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Server settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Built frontend bundle served at `/`.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("BOARD_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("BOARD_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BOARD_PORT must be a port number, got '{}'", raw))?,
            None => 8080,
        };
        let db_path = lookup("BOARD_DB_PATH")
            .unwrap_or_else(|| "board.db".into())
            .into();
        let static_dir = lookup("BOARD_STATIC_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            db_path,
            static_dir,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
