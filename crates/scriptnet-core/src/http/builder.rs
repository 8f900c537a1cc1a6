//! Client builder: script configuration in, client handle out
//!
//! Construction is a single synchronous pass. It validates the explicit
//! options, fills the rest from the environment and built-in defaults, and
//! assembles the client. No connection is opened and no name is resolved.

use crate::http::client::ClientHandle;
use crate::http::config::TransportConfig;
use crate::http::env::{EnvSource, SystemEnv};
use crate::{Result, Value};

/// Builds client handles from script configuration values
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder<E = SystemEnv> {
    env: E,
}

impl ClientBuilder<SystemEnv> {
    /// Builder reading the real process environment
    pub fn new() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: EnvSource> ClientBuilder<E> {
    /// Builder reading environment variables from `env`
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Validate and resolve a configuration without building a client
    pub fn resolve(&self, raw: Option<&Value>) -> Result<TransportConfig> {
        TransportConfig::resolve(raw, &self.env)
    }

    /// Validate, resolve and build
    pub fn build(&self, raw: Option<&Value>) -> Result<ClientHandle> {
        let config = self.resolve(raw)?;

        tracing::debug!(
            timeout_secs = config.timeout.as_secs_f64(),
            proxy = config.redacted_proxy().as_deref().unwrap_or("none"),
            verify_certificates = config.tls.verify_certificates,
            "Building HTTP client"
        );

        ClientHandle::from_config(config)
    }
}

/// Build a client handle using the process environment
pub fn build(raw: Option<&Value>) -> Result<ClientHandle> {
    ClientBuilder::new().build(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn test_build_without_config() {
        let builder = ClientBuilder::with_env(HashMap::new());
        let handle = builder.build(None).unwrap();
        assert_eq!(handle.config(), &TransportConfig::default());
    }

    #[test]
    fn test_build_with_closure_env() {
        let builder = ClientBuilder::with_env(|name: &str| {
            (name == "HTTP_PROXY").then(|| "http://env-proxy:8080".to_string())
        });
        let handle = builder.build(None).unwrap();
        assert_eq!(
            handle.config().redacted_proxy().as_deref(),
            Some("http://env-proxy:8080/")
        );
    }

    #[test]
    fn test_build_rejects_invalid_option() {
        let builder = ClientBuilder::with_env(HashMap::new());
        let raw = Value::table([("timeout", "ten")]);
        let err = builder.build(Some(&raw)).unwrap_err();
        assert!(matches!(err, Error::InvalidType { field: "timeout", .. }));
    }

    #[test]
    fn test_resolve_matches_build() {
        let builder = ClientBuilder::with_env(HashMap::new());
        let raw = Value::table([("timeout", 7)]);

        let resolved = builder.resolve(Some(&raw)).unwrap();
        let handle = builder.build(Some(&raw)).unwrap();
        assert_eq!(&resolved, handle.config());
        assert_eq!(resolved.timeout, Duration::from_secs(7));
    }
}
