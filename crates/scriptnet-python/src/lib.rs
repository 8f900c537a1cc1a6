//! Scriptnet Python Bindings
//!
//! This crate is the embedding-environment side of Scriptnet: it installs
//! the registered capabilities into the `scriptnet` extension module so that
//! Python code can build configured HTTP clients.
//!
//! ```python
//! import scriptnet.http
//!
//! client = scriptnet.http.client({"timeout": 5, "insecure_skip_verify": True})
//! ```

#![allow(non_local_definitions)] // PyO3 macros generate non-local impl blocks

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use scriptnet_core::registry::{self, Capability};

mod convert;
mod error;
mod http;

/// Capabilities installed into the `scriptnet` module, in registration order
static CAPABILITIES: &[Capability<PyModule, PyErr>] = &[Capability::new("http", http::register)];

/// Scriptnet Python module
#[pymodule]
fn scriptnet(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    registry::register_all(m, CAPABILITIES)?;

    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(capabilities, m)?)?;

    Ok(())
}

/// Attach `child` to `parent` and make it importable as `parent.child`
pub(crate) fn install_submodule(parent: &PyModule, child: &PyModule) -> PyResult<()> {
    let py = parent.py();
    parent.add_submodule(child)?;

    let qualified = format!("{}.{}", parent.name()?, child.name()?);
    py.import("sys")?
        .getattr("modules")?
        .set_item(qualified.as_str(), child)?;

    tracing::debug!(module = %qualified, "Installed capability module");
    Ok(())
}

/// Get the version of the Scriptnet library
#[pyfunction]
fn version() -> PyResult<String> {
    Ok(format!("{} {}", env!("CARGO_PKG_NAME"), scriptnet_core::VERSION))
}

/// Names of the installed capability modules, in registration order
#[pyfunction]
fn capabilities() -> Vec<&'static str> {
    registry::names(CAPABILITIES)
}
