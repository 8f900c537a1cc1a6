//! Conversions between Python objects and script values
//!
//! Python objects are mapped onto the tagged [`Value`] type before the
//! client builder sees them. Type checks go from most to least specific:
//! `bool` is a subclass of `int` and has to be tested first.

use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyList, PyLong, PyString};
use scriptnet_core::{Table, Value};

/// Convert a Python object into a script value
///
/// Dictionary entries with non-string keys can never match an option name
/// and are dropped. Unsupported objects become [`Value::Other`] carrying
/// their Python type name.
pub fn to_value(obj: &PyAny) -> PyResult<Value> {
    if obj.is_none() {
        Ok(Value::Nil)
    } else if let Ok(b) = obj.downcast::<PyBool>() {
        Ok(Value::Boolean(b.is_true()))
    } else if obj.downcast::<PyLong>().is_ok() {
        Ok(Value::Number(int_to_f64(obj)?))
    } else if obj.downcast::<PyFloat>().is_ok() {
        Ok(Value::Number(obj.extract::<f64>()?))
    } else if let Ok(s) = obj.downcast::<PyString>() {
        Ok(Value::String(s.to_str()?.to_owned()))
    } else if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut table = Table::new();
        for (key, value) in dict.iter() {
            if let Ok(key) = key.downcast::<PyString>() {
                table.insert(key.to_str()?.to_owned(), to_value(value)?);
            }
        }
        Ok(Value::Table(table))
    } else {
        Ok(Value::Other(obj.get_type().name()?.to_owned()))
    }
}

/// An `int` beyond the `f64` range saturates to an infinity of the same sign
fn int_to_f64(obj: &PyAny) -> PyResult<f64> {
    match obj.extract::<f64>() {
        Ok(n) => Ok(n),
        Err(_) if obj.gt(0)? => Ok(f64::INFINITY),
        Err(_) => Ok(f64::NEG_INFINITY),
    }
}

/// Convert a JSON document into Python objects
pub fn json_to_py(py: Python<'_>, value: &serde_json::Value) -> PyResult<PyObject> {
    match value {
        serde_json::Value::Null => Ok(py.None()),
        serde_json::Value::Bool(b) => Ok(b.to_object(py)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.to_object(py))
            } else if let Some(f) = n.as_f64() {
                Ok(f.to_object(py))
            } else {
                Ok(n.to_string().to_object(py))
            }
        }
        serde_json::Value::String(s) => Ok(s.to_object(py)),
        serde_json::Value::Array(arr) => {
            let py_list = PyList::empty(py);
            for item in arr {
                py_list.append(json_to_py(py, item)?)?;
            }
            Ok(py_list.to_object(py))
        }
        serde_json::Value::Object(obj) => {
            let py_dict = PyDict::new(py);
            for (k, v) in obj {
                py_dict.set_item(k, json_to_py(py, v)?)?;
            }
            Ok(py_dict.to_object(py))
        }
    }
}
