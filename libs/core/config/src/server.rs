use crate::{ConfigError, FromEnv, env_optional, env_or_default};
use std::net::{IpAddr, Ipv4Addr};

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public origin (scheme + host, e.g. `https://api.example.com`) under which
    /// clients reach this server. Used to build absolute resource URLs.
    pub public_domain: Option<String>,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            public_domain: None,
        }
    }

    /// Override the public origin reported in resource URLs.
    pub fn with_public_domain(mut self, public_domain: impl Into<String>) -> Self {
        self.public_domain = Some(public_domain.into());
        self
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origin clients should use to reach this server.
    ///
    /// Returns the configured public domain without a trailing slash, or the
    /// server's own `http://host:port`. A wildcard bind host is reported as
    /// `localhost`.
    pub fn public_uri(&self) -> String {
        if let Some(domain) = &self.public_domain {
            return domain.trim_end_matches('/').to_string();
        }

        let host = match self.host.parse::<IpAddr>() {
            Ok(ip) if ip.is_unspecified() => "localhost".to_string(),
            Ok(IpAddr::V6(ip)) => format!("[{}]", ip),
            _ => self.host.clone(),
        };

        format!("http://{}:{}", host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to Ipv4Addr::UNSPECIFIED (0.0.0.0 - all interfaces)
    /// - PORT: defaults to 8080
    /// - PUBLIC_DOMAIN: optional, unset means the server address is used
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080").parse().map_err(|e| {
            ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            }
        })?;

        Ok(Self {
            host,
            port,
            public_domain: env_optional("PUBLIC_DOMAIN"),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
