//! The `scriptnet.http` module
//!
//! Exposes the client constructor to Python. The returned `Client` object is
//! the opaque handle: Python only ever holds a reference to it, the
//! `reqwest` client lives on the Rust side.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use scriptnet_core::ClientHandle;

use crate::convert::{json_to_py, to_value};
use crate::error::{to_py_err, ClientError};

/// Opaque handle around a configured HTTP client
#[pyclass(name = "Client", module = "scriptnet.http", frozen)]
pub struct PyClient {
    inner: ClientHandle,
}

impl PyClient {
    pub fn handle(&self) -> &ClientHandle {
        &self.inner
    }
}

#[pymethods]
impl PyClient {
    /// Request timeout in seconds (0 means no deadline)
    #[getter]
    fn timeout(&self) -> f64 {
        self.inner.config().timeout.as_secs_f64()
    }

    /// Proxy URL with the password masked, or None
    #[getter]
    fn proxy(&self) -> Option<String> {
        self.inner.config().redacted_proxy()
    }

    /// Whether certificate verification is disabled
    #[getter]
    fn insecure_skip_verify(&self) -> bool {
        self.inner.config().tls.skip_verify()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Client(timeout={}, proxy={}, insecure_skip_verify={})",
            config.timeout.as_secs_f64(),
            config.redacted_proxy().as_deref().unwrap_or("None"),
            if config.tls.skip_verify() { "True" } else { "False" },
        )
    }
}

/// Create a configured HTTP client
///
/// Args:
///     config (Optional[dict]): options, all optional:
///         timeout (int | float): request timeout in seconds, default 10
///         http_proxy (str): "http(s)://<user>:<password>@host:<port>",
///             defaults to the HTTP_PROXY environment variable
///         insecure_skip_verify (bool): disable certificate verification
///
/// Returns:
///     Client: an opaque client handle
///
/// Raises:
///     TypeError: if config is not a dict or an option has the wrong type
///     ValueError: if an option value is unusable (e.g. a malformed proxy URL)
///     ClientError: if the HTTP library rejects the configuration
#[pyfunction]
#[pyo3(signature = (config=None))]
pub fn client(config: Option<&PyAny>) -> PyResult<PyClient> {
    let raw = config.map(to_value).transpose()?;
    let inner = scriptnet_core::http::build(raw.as_ref()).map_err(to_py_err)?;
    Ok(PyClient { inner })
}

/// Resolved transport configuration of a client, as a dict
///
/// Raises:
///     TypeError: if the argument is not a Client
#[pyfunction]
pub fn transport_config(py: Python<'_>, client: &PyAny) -> PyResult<PyObject> {
    let cell = check_client(client)?;
    let client = cell.borrow();
    let value = serde_json::to_value(client.handle().config())
        .map_err(|e| ClientError::new_err(format!("Serialization error: {}", e)))?;
    json_to_py(py, &value)
}

/// Downcast an argument to a client handle
pub fn check_client(obj: &PyAny) -> PyResult<&PyCell<PyClient>> {
    obj.downcast::<PyCell<PyClient>>()
        .map_err(|_| PyTypeError::new_err("http client expected"))
}

/// Registry initializer for the `http` capability
pub fn register(parent: &PyModule) -> PyResult<()> {
    let py = parent.py();
    let module = PyModule::new(py, "http")?;

    module.add("ClientError", py.get_type::<ClientError>())?;
    module.add_class::<PyClient>()?;
    module.add_function(wrap_pyfunction!(client, module)?)?;
    module.add_function(wrap_pyfunction!(transport_config, module)?)?;

    crate::install_submodule(parent, module)
}
