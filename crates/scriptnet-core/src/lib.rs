//! Scriptnet Core - HTTP clients configured from embedded scripts
//!
//! Scripts hand over a loosely typed configuration table. This crate validates
//! it, merges it with environment-derived and built-in defaults, and builds an
//! immutable, connection-pooled HTTP client wrapped in an opaque handle.
//!
//! # Main Components
//!
//! - **Values**: the tagged [`Value`] type every host object is converted to
//! - **Client Builder**: [`http::build`] and [`ClientBuilder`]
//! - **Errors**: caller errors naming the offending option, using `thiserror`
//! - **Registry**: the table of capabilities installed into a host environment
//!
//! # Example
//!
//! ```no_run
//! use scriptnet_core::{Result, Value};
//!
//! fn example() -> Result<()> {
//!     let config = Value::table([
//!         ("timeout", Value::from(5)),
//!         ("insecure_skip_verify", Value::from(true)),
//!     ]);
//!     let handle = scriptnet_core::http::build(Some(&config))?;
//!     assert_eq!(handle.config().timeout.as_secs(), 5);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod registry;
pub mod value;

pub use error::{Error, Result};
pub use http::{ClientBuilder, ClientHandle, TransportConfig};
pub use registry::{register_all, Capability};
pub use value::{Table, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
