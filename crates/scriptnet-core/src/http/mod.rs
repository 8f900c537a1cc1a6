//! HTTP client construction from script configuration
//!
//! This module provides:
//! - Validation of the untyped `timeout`, `http_proxy` and
//!   `insecure_skip_verify` options
//! - Proxy discovery from the `HTTP_PROXY` environment variable
//! - Resolution into an immutable [`TransportConfig`]
//! - Construction of the pooled client behind a [`ClientHandle`]

pub mod builder;
pub mod client;
pub mod config;
pub mod env;
pub mod proxy;
pub mod timeout;
pub mod tls;

pub use builder::{build, ClientBuilder};
pub use client::ClientHandle;
pub use config::{ConfigOverrides, PoolLimits, TransportConfig, DEFAULT_USER_AGENT};
pub use env::{EnvSource, SystemEnv};
pub use proxy::{ProxyUrl, ProxyUrlError, PROXY_ENV_VAR};
pub use timeout::DEFAULT_TIMEOUT;
pub use tls::TlsPolicy;
