//! The opaque client handle returned to scripts

use std::fmt;

use crate::http::config::TransportConfig;
use crate::{Error, Result};

/// A constructed HTTP client together with the configuration it was built from
///
/// The handle is immutable. The wrapped `reqwest::Client` is internally
/// reference counted and its pool is synchronized, so a handle can be shared
/// freely across threads. Dropping it is the only cleanup required; idle
/// connections expire on their own.
pub struct ClientHandle {
    client: reqwest::Client,
    config: TransportConfig,
}

impl ClientHandle {
    /// Build a client from a resolved configuration without any network I/O
    pub fn from_config(config: TransportConfig) -> Result<Self> {
        let client = config
            .to_reqwest_builder()?
            .build()
            .map_err(|e| Error::ClientBuild {
                message: e.to_string(),
                source: e,
            })?;

        Ok(Self { client, config })
    }

    /// The underlying client, used by request-issuing operations
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The configuration the client was built with
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
