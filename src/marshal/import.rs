//! Import conversions: host tagged array to dense container.
//!
//! One `FromHost` implementation per (element kind, shape) pair. Real
//! targets widen integer input; integer targets truncate real input toward
//! zero; the unsigned target delegates to the signed import and
//! reinterprets bits, so negative input wraps instead of saturating to zero.

use nalgebra::{DMatrix, DVector, RowDVector};

use super::FromHost;
use crate::error::MarshalError;
use crate::host::{HostArray, HostValues};

fn matrix_dim(value: &HostArray) -> Result<(usize, usize), MarshalError> {
    value.dim().ok_or(MarshalError::NotAMatrix { len: value.len() })
}

// --- matrices ---

impl FromHost for DMatrix<f64> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DMatrix::<i32>::from_host(value)?.map(|v| v as f64)),
            HostValues::Real(data) => {
                let (nrows, ncols) = matrix_dim(value)?;
                Ok(DMatrix::from_column_slice(nrows, ncols, data))
            }
        }
    }
}

impl FromHost for DMatrix<f32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DMatrix::<i32>::from_host(value)?.map(|v| v as f32)),
            HostValues::Real(data) => {
                let (nrows, ncols) = matrix_dim(value)?;
                Ok(DMatrix::from_iterator(
                    nrows,
                    ncols,
                    data.iter().map(|&v| v as f32),
                ))
            }
        }
    }
}

impl FromHost for DMatrix<i32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        let (nrows, ncols) = matrix_dim(value)?;
        Ok(match value.values() {
            HostValues::Int(data) => DMatrix::from_column_slice(nrows, ncols, data),
            // Truncates toward zero, saturating at the i32 limits.
            HostValues::Real(data) => {
                DMatrix::from_iterator(nrows, ncols, data.iter().map(|&v| v as i32))
            }
        })
    }
}

impl FromHost for DMatrix<u32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DMatrix::<i32>::from_host(value)?.map(|v| v as u32)),
            // Negative reals wrap through the signed intermediate.
            HostValues::Real(data) => {
                let (nrows, ncols) = matrix_dim(value)?;
                Ok(DMatrix::from_iterator(
                    nrows,
                    ncols,
                    data.iter().map(|&v| v as i32 as u32),
                ))
            }
        }
    }
}

// --- column vectors ---

impl FromHost for DVector<f64> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DVector::<i32>::from_host(value)?.map(|v| v as f64)),
            HostValues::Real(data) => Ok(DVector::from_column_slice(data)),
        }
    }
}

impl FromHost for DVector<f32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DVector::<i32>::from_host(value)?.map(|v| v as f32)),
            HostValues::Real(data) => Ok(DVector::from_iterator(
                data.len(),
                data.iter().map(|&v| v as f32),
            )),
        }
    }
}

impl FromHost for DVector<i32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        Ok(match value.values() {
            HostValues::Int(data) => DVector::from_column_slice(data),
            // Truncates toward zero, saturating at the i32 limits.
            HostValues::Real(data) => {
                DVector::from_iterator(data.len(), data.iter().map(|&v| v as i32))
            }
        })
    }
}

impl FromHost for DVector<u32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        match value.values() {
            HostValues::Int(_) => Ok(DVector::<i32>::from_host(value)?.map(|v| v as u32)),
            // Negative reals wrap through the signed intermediate.
            HostValues::Real(data) => Ok(DVector::from_iterator(
                data.len(),
                data.iter().map(|&v| v as i32 as u32),
            )),
        }
    }
}

// --- row vectors: the column import, transposed ---

impl FromHost for RowDVector<f64> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        Ok(DVector::<f64>::from_host(value)?.transpose())
    }
}

impl FromHost for RowDVector<f32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        Ok(DVector::<f32>::from_host(value)?.transpose())
    }
}

impl FromHost for RowDVector<i32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        Ok(DVector::<i32>::from_host(value)?.transpose())
    }
}

impl FromHost for RowDVector<u32> {
    fn from_host(value: &HostArray) -> Result<Self, MarshalError> {
        Ok(DVector::<u32>::from_host(value)?.transpose())
    }
}
