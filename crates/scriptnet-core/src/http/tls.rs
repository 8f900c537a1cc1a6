//! TLS verification policy
//!
//! Certificate verification is on unless the script explicitly sets
//! `insecure_skip_verify = true` for a particular client.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Value};

/// Configuration key for disabling certificate verification
pub const INSECURE_SKIP_VERIFY_KEY: &str = "insecure_skip_verify";

/// TLS behaviour of a constructed client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsPolicy {
    /// Whether server certificates are verified
    pub verify_certificates: bool,
}

impl Default for TlsPolicy {
    fn default() -> Self {
        Self::secure()
    }
}

impl TlsPolicy {
    /// Verify certificates (the default)
    pub fn secure() -> Self {
        Self {
            verify_certificates: true,
        }
    }

    /// Accept any server certificate
    pub fn insecure() -> Self {
        Self {
            verify_certificates: false,
        }
    }

    /// Policy for an `insecure_skip_verify` flag value
    pub fn from_skip_verify(skip: bool) -> Self {
        if skip {
            Self::insecure()
        } else {
            Self::secure()
        }
    }

    pub fn skip_verify(&self) -> bool {
        !self.verify_certificates
    }

    pub(crate) fn apply(&self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        builder.danger_accept_invalid_certs(self.skip_verify())
    }
}

/// Validate an `insecure_skip_verify` option
pub fn parse_insecure_skip_verify(value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_type(INSECURE_SKIP_VERIFY_KEY, "boolean", value))
}
