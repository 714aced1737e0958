//! HTTP server configuration: layered settings and the builder passed to
//! [`super::create_server`].

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::UserRegistry;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_JSON_LIMIT: usize = 16 * 1024;

/// Settings loaded from CLI arguments, `REGISTRY_*` environment variables
/// and an optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRY")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Maximum accepted JSON body size in bytes.
    #[ortho_config(default = 16384)]
    pub json_limit: usize,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the host and port do
    /// not form a valid socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host(), self.port)
            .parse()
            .map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid bind address {}:{}: {err}", self.host(), self.port),
                )
            })
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) json_limit: usize,
    pub(crate) registry: Arc<UserRegistry>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with an empty
    /// registry and the default JSON limit.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            json_limit: DEFAULT_JSON_LIMIT,
            registry: Arc::new(UserRegistry::new()),
        }
    }

    /// Build a configuration from loaded settings.
    ///
    /// # Errors
    /// Propagates [`ServerSettings::bind_addr`] failures.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        Ok(Self::new(settings.bind_addr()?).with_json_limit(settings.json_limit))
    }

    /// Override the maximum JSON body size.
    #[must_use]
    pub fn with_json_limit(mut self, json_limit: usize) -> Self {
        self.json_limit = json_limit;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured JSON body limit.
    #[must_use]
    pub fn json_limit(&self) -> usize {
        self.json_limit
    }
}
