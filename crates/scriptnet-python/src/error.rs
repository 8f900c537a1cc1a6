//! Mapping of client builder errors to Python exceptions
//!
//! Caller mistakes surface as the built-in `TypeError` / `ValueError` a
//! Python programmer expects from a bad argument. Only a failure inside the
//! HTTP library itself raises the module's own `ClientError`.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyTypeError, PyValueError};
use pyo3::prelude::*;
use scriptnet_core::Error;

create_exception!(scriptnet.http, ClientError, PyException);

/// Convert a core error into the matching Python exception
pub fn to_py_err(error: Error) -> PyErr {
    let message = error.to_string();
    match error {
        Error::ConfigShape { .. } | Error::InvalidType { .. } => PyTypeError::new_err(message),
        Error::InvalidValue { .. } => PyValueError::new_err(message),
        Error::ClientBuild { .. } => ClientError::new_err(message),
    }
}
