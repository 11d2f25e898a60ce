// src/engine/bindings.rs

use numpy::IntoPyArray;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::{
    boundary::{checked_curve, checked_metrics},
    scenario::{points_to_matrix, MATRIX_COLUMNS},
    PositionParameters, MAX_MARGIN_FRACTION,
};
use crate::error::RiskError;

fn to_py_err(err: RiskError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyfunction]
#[pyo3(signature=(
    margin_balance, available_balance, quantity,
    entry_price, current_price, leverage, maintenance_margin,
    max_margin_fraction=MAX_MARGIN_FRACTION, rounded=true
))]
pub fn compute_metrics(
    py: Python<'_>,
    margin_balance:      f64,
    available_balance:   f64,
    quantity:            f64,
    entry_price:         f64,
    current_price:       f64,
    leverage:            f64,
    maintenance_margin:  f64,
    max_margin_fraction: f64,
    rounded:             bool,
) -> PyResult<PyObject> {
    let params = PositionParameters {
        margin_balance,
        available_balance,
        quantity,
        entry_price,
        current_price,
        leverage,
        maintenance_margin,
    };
    let report = checked_metrics(params, max_margin_fraction, rounded).map_err(to_py_err)?;

    let out = PyDict::new(py);
    for (name, value) in report.metrics.fields() {
        out.set_item(name, value)?;
    }
    out.set_item("is_margin_safe",    report.metrics.is_margin_safe)?;
    out.set_item("threshold_percent", report.threshold_percent)?;
    Ok(out.into())
}

#[pyfunction]
#[pyo3(signature=(
    margin_balance, available_balance, quantity,
    entry_price, current_price, leverage, maintenance_margin,
    shifts=None, rounded=true
))]
pub fn scenario_curve(
    py: Python<'_>,
    margin_balance:     f64,
    available_balance:  f64,
    quantity:           f64,
    entry_price:        f64,
    current_price:      f64,
    leverage:           f64,
    maintenance_margin: f64,
    shifts:             Option<Vec<f64>>,
    rounded:            bool,
) -> PyResult<PyObject> {
    let params = PositionParameters {
        margin_balance,
        available_balance,
        quantity,
        entry_price,
        current_price,
        leverage,
        maintenance_margin,
    };
    let points = checked_curve(params, shifts, rounded).map_err(to_py_err)?;

    let out = PyDict::new(py);

    let py_points = PyList::empty(py);
    for p in &points {
        let pd = PyDict::new(py);
        for (name, value) in p.fields() {
            pd.set_item(name, value)?;
        }
        py_points.append(pd)?;
    }
    out.set_item("points", py_points)?;

    let matrix: PyObject = points_to_matrix(&points).into_pyarray(py).into_py(py);
    out.set_item("matrix", matrix)?;
    out.set_item("columns", PyList::new(py, MATRIX_COLUMNS))?;
    Ok(out.into())
}
