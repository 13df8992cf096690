//! Python bindings for bidscat
//!
//! The host conversion pipeline is a Python tool, so the two plugin entry
//! points (`create_key`, `classify`) are exposed as a Python module.
//! `classify` returns the dict-of-key-tuples shape the host already
//! consumes: bare series ids for anatomicals, flat field mappings for the
//! parameterized categories.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::types::{PyDict, PyList, PyTuple};
use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::api::{create_key as build_key, SeriesClassifier};
use crate::types::{Descriptor, SeriesInfo, TemplateKey};

// Base exception
create_exception!(
    bidscat,
    PyBidscatError,
    PyException,
    "Base exception for all bidscat errors"
);

create_exception!(
    bidscat,
    PyInvalidTemplateError,
    PyBidscatError,
    "Template string was empty or absent"
);

create_exception!(
    bidscat,
    PyMalformedProtocolNameError,
    PyBidscatError,
    "Protocol name did not parse into the expected fields"
);

/// Convert Rust BidscatError to appropriate Python exception
fn convert_error(err: crate::error::BidscatError) -> PyErr {
    match err {
        crate::error::BidscatError::InvalidTemplate => {
            PyInvalidTemplateError::new_err(err.to_string())
        }
        crate::error::BidscatError::MalformedProtocolName { .. } => {
            PyMalformedProtocolNameError::new_err(err.to_string())
        }
        other => PyBidscatError::new_err(other.to_string()),
    }
}

/// One scanner series, as the host's series table describes it
#[pyclass(name = "SeriesInfo", module = "bidscat")]
#[derive(Clone)]
pub struct PySeriesInfo {
    pub(crate) inner: SeriesInfo,
}

#[pymethods]
impl PySeriesInfo {
    #[new]
    #[pyo3(signature = (series_id, protocol_name, series_description, image_type = Vec::new()))]
    fn new(
        series_id: &str,
        protocol_name: &str,
        series_description: &str,
        image_type: Vec<String>,
    ) -> Self {
        let mut inner = SeriesInfo::new(series_id, protocol_name, series_description);
        inner.image_type = image_type;
        Self { inner }
    }

    #[getter]
    fn series_id(&self) -> String {
        self.inner.series_id.clone()
    }

    #[getter]
    fn protocol_name(&self) -> String {
        self.inner.protocol_name.clone()
    }

    #[getter]
    fn series_description(&self) -> String {
        self.inner.series_description.clone()
    }

    #[getter]
    fn image_type(&self) -> Vec<String> {
        self.inner.image_type.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "SeriesInfo(series_id={:?}, protocol_name={:?})",
            self.inner.series_id, self.inner.protocol_name
        )
    }
}

/// Converts a TemplateKey to the host's hashable key tuple
fn key_to_tuple<'py>(py: Python<'py>, key: &TemplateKey) -> Bound<'py, PyTuple> {
    let formats = PyTuple::new_bound(py, &key.output_formats);
    let items: Vec<PyObject> = vec![
        key.template.clone().into_py(py),
        formats.into_py(py),
        py.None(),
    ];
    PyTuple::new_bound(py, items)
}

/// Converts a Descriptor to the host's list entry (str or dict)
fn descriptor_to_py(py: Python<'_>, descriptor: &Descriptor) -> PyResult<PyObject> {
    match descriptor {
        Descriptor::Bare(item) => Ok(item.clone().into_py(py)),
        Descriptor::Functional {
            item,
            task,
            dir,
            run,
        } => {
            let entry = PyDict::new_bound(py);
            entry.set_item("item", item)?;
            entry.set_item("task", task)?;
            entry.set_item("dir", dir)?;
            entry.set_item("run", run)?;
            Ok(entry.into_py(py))
        }
        Descriptor::Diffusion { item, acq, dir } => {
            let entry = PyDict::new_bound(py);
            entry.set_item("item", item)?;
            entry.set_item("acq", acq)?;
            entry.set_item("dir", dir)?;
            Ok(entry.into_py(py))
        }
        Descriptor::FieldMap { item, dir } => {
            let entry = PyDict::new_bound(py);
            entry.set_item("item", item)?;
            entry.set_item("dir", dir)?;
            Ok(entry.into_py(py))
        }
    }
}

/// Build a template key tuple: (template, output formats, annotation classes)
///
/// Raises InvalidTemplateError when `template` is None or empty.
#[pyfunction]
#[pyo3(signature = (template, outtype = None, annotation_classes = None))]
fn create_key<'py>(
    py: Python<'py>,
    template: Option<&str>,
    outtype: Option<Vec<String>>,
    annotation_classes: Option<Vec<String>>,
) -> PyResult<Bound<'py, PyTuple>> {
    let key = match outtype {
        None => build_key(template).map_err(convert_error)?,
        Some(formats) => TemplateKey::new(
            template.unwrap_or_default().to_string(),
            formats,
            annotation_classes,
        )
        .map_err(convert_error)?,
    };
    Ok(key_to_tuple(py, &key))
}

/// Classify a list of SeriesInfo into the fixed BIDS category set
///
/// Returns a dict mapping each key tuple to its ordered descriptor list;
/// all seven keys are present even when their lists are empty.
#[pyfunction]
fn classify<'py>(py: Python<'py>, seqinfo: Vec<PySeriesInfo>) -> PyResult<Bound<'py, PyDict>> {
    let series: Vec<SeriesInfo> = seqinfo.into_iter().map(|s| s.inner).collect();
    let result = SeriesClassifier::classify(&series).map_err(convert_error)?;

    let info = PyDict::new_bound(py);
    for group in result.groups() {
        let entries = PyList::empty_bound(py);
        for descriptor in &group.descriptors {
            entries.append(descriptor_to_py(py, descriptor)?)?;
        }
        info.set_item(key_to_tuple(py, &group.key), entries)?;
    }
    Ok(info)
}

/// Python module definition
#[pymodule]
fn _bidscat(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add("BidscatError", py.get_type_bound::<PyBidscatError>())?;
    m.add(
        "InvalidTemplateError",
        py.get_type_bound::<PyInvalidTemplateError>(),
    )?;
    m.add(
        "MalformedProtocolNameError",
        py.get_type_bound::<PyMalformedProtocolNameError>(),
    )?;

    // Register data structure classes
    m.add_class::<PySeriesInfo>()?;

    // Register entry points
    m.add_function(wrap_pyfunction!(create_key, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;

    Ok(())
}
