//! Proxy URL parsing and environment discovery
//!
//! An explicit `http_proxy` option must parse or construction fails. The
//! `HTTP_PROXY` environment variable is ambient state: when it does not parse
//! it is treated as if it were unset.

use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

use crate::http::env::EnvSource;
use crate::{Error, Result, Value};

/// Configuration key for an explicit proxy
pub const HTTP_PROXY_KEY: &str = "http_proxy";

/// Environment variable consulted when no explicit proxy is configured
pub const PROXY_ENV_VAR: &str = "HTTP_PROXY";

/// Accepted proxy URL shape, quoted in error messages
pub const PROXY_URL_FORMAT: &str = "http(s)://<user>:<password>@host:<port>";

/// Why a proxy string was rejected
#[derive(Debug, thiserror::Error)]
pub enum ProxyUrlError {
    #[error("not a valid URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("unsupported proxy scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("proxy URL has no host")]
    MissingHost,
}

/// A parsed proxy URL
///
/// `Debug`, `Display` and `Serialize` mask the password so resolved
/// configurations can be logged and printed safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyUrl(Url);

impl ProxyUrl {
    /// Parse and validate a proxy URL
    ///
    /// HTTP(S) and SOCKS5 proxies are accepted; `socks5h` resolves names on
    /// the proxy side.
    pub fn parse(input: &str) -> std::result::Result<Self, ProxyUrlError> {
        let url = Url::parse(input.trim())?;

        match url.scheme() {
            "http" | "https" | "socks5" | "socks5h" => {}
            other => return Err(ProxyUrlError::UnsupportedScheme(other.to_string())),
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(ProxyUrlError::MissingHost);
        }

        Ok(Self(url))
    }

    /// The full URL, credentials included
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn has_credentials(&self) -> bool {
        !self.0.username().is_empty() || self.0.password().is_some()
    }

    /// URL text with the password replaced by `***`
    pub fn redacted(&self) -> String {
        let mut url = self.0.clone();
        if url.password().is_some() {
            // Cannot fail: URLs with a host always accept a password.
            let _ = url.set_password(Some("***"));
        }
        url.to_string()
    }
}

impl fmt::Debug for ProxyUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProxyUrl").field(&self.redacted()).finish()
    }
}

impl fmt::Display for ProxyUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl Serialize for ProxyUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.redacted())
    }
}

/// Validate an explicit `http_proxy` option
pub fn parse_http_proxy(value: &Value) -> Result<ProxyUrl> {
    let raw = value
        .as_str()
        .ok_or_else(|| Error::invalid_type(HTTP_PROXY_KEY, "string", value))?;

    ProxyUrl::parse(raw).map_err(|e| Error::InvalidValue {
        field: HTTP_PROXY_KEY,
        message: format!("{} (expected {})", e, PROXY_URL_FORMAT),
        source: Some(e.into()),
    })
}

/// Proxy named by the `HTTP_PROXY` environment variable
///
/// Unset, empty and unparseable values all yield `None`.
pub fn proxy_from_env<E: EnvSource + ?Sized>(env: &E) -> Option<ProxyUrl> {
    let raw = env.var(PROXY_ENV_VAR).filter(|v| !v.trim().is_empty())?;

    match ProxyUrl::parse(&raw) {
        Ok(proxy) => Some(proxy),
        Err(e) => {
            tracing::debug!(
                variable = PROXY_ENV_VAR,
                error = %e,
                "Ignoring unparseable proxy from environment"
            );
            None
        }
    }
}
