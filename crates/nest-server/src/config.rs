//! Server configuration from the environment

use std::path::PathBuf;

/// Runtime settings; every field has a development default
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Public origin of the client, used for the payment callback URL
    pub frontend_url: String,

    /// Directory holding the built WASM client
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3001,
            frontend_url: "http://localhost:5173".into(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "Invalid PORT, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("BIND_HOST").unwrap_or(defaults.host),
            port,
            frontend_url: lookup("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("BIND_HOST", "127.0.0.1"),
            ("FRONTEND_URL", "https://diasporanest.com.ng"),
            ("STATIC_DIR", "dist"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.frontend_url, "https://diasporanest.com.ng");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, 3001);
    }
}
