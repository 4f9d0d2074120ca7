//! Server configuration loaded from CLI flags and environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`. `None` disables static files.
    pub static_dir: Option<PathBuf>,
    /// Seed file for the directory (from MERGINGTON_SEED_FILE or `--seed`).
    pub seed_file: Option<PathBuf>,
    /// Allowed CORS origins (from MERGINGTON_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables, with defaults for
    /// everything the environment leaves unset.
    pub fn from_env() -> Self {
        let seed_file = std::env::var("MERGINGTON_SEED_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let cors_origins = std::env::var("MERGINGTON_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty());

        Self {
            seed_file,
            cors_origins,
            ..Self::default()
        }
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            seed_file: None,
            cors_origins: None,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
