//! Export conversions: dense container to host tagged array.
//!
//! Real kinds land in real host arrays (`f32` widened first); integer kinds
//! land in integer host arrays (`u32` reinterpreted as `i32` bits). Matrix
//! shape is preserved; vectors export as single-column or single-row host
//! matrices matching their orientation.

use nalgebra::{DMatrix, DVector, RowDVector};

use super::ToHost;
use crate::host::HostArray;

// --- matrices ---

impl ToHost for DMatrix<f64> {
    fn to_host(&self) -> HostArray {
        HostArray::from_reals(self.as_slice().to_vec(), Some((self.nrows(), self.ncols())))
    }
}

impl ToHost for DMatrix<f32> {
    fn to_host(&self) -> HostArray {
        let widened: Vec<f64> = self.iter().map(|&v| f64::from(v)).collect();
        HostArray::from_reals(widened, Some((self.nrows(), self.ncols())))
    }
}

impl ToHost for DMatrix<i32> {
    fn to_host(&self) -> HostArray {
        HostArray::from_ints(self.as_slice().to_vec(), Some((self.nrows(), self.ncols())))
    }
}

impl ToHost for DMatrix<u32> {
    fn to_host(&self) -> HostArray {
        // Bit-pattern reinterpretation; values above i32::MAX come out
        // negative on the host side.
        let reinterpreted: Vec<i32> = self.iter().map(|&v| v as i32).collect();
        HostArray::from_ints(reinterpreted, Some((self.nrows(), self.ncols())))
    }
}

// --- column vectors: single-column host matrices ---

impl ToHost for DVector<f64> {
    fn to_host(&self) -> HostArray {
        HostArray::from_reals(self.as_slice().to_vec(), Some((self.len(), 1)))
    }
}

impl ToHost for DVector<f32> {
    fn to_host(&self) -> HostArray {
        let widened: Vec<f64> = self.iter().map(|&v| f64::from(v)).collect();
        HostArray::from_reals(widened, Some((self.len(), 1)))
    }
}

impl ToHost for DVector<i32> {
    fn to_host(&self) -> HostArray {
        HostArray::from_ints(self.as_slice().to_vec(), Some((self.len(), 1)))
    }
}

impl ToHost for DVector<u32> {
    fn to_host(&self) -> HostArray {
        let reinterpreted: Vec<i32> = self.iter().map(|&v| v as i32).collect();
        HostArray::from_ints(reinterpreted, Some((self.len(), 1)))
    }
}

// --- row vectors: single-row host matrices ---

impl ToHost for RowDVector<f64> {
    fn to_host(&self) -> HostArray {
        HostArray::from_reals(self.as_slice().to_vec(), Some((1, self.len())))
    }
}

impl ToHost for RowDVector<f32> {
    fn to_host(&self) -> HostArray {
        let widened: Vec<f64> = self.iter().map(|&v| f64::from(v)).collect();
        HostArray::from_reals(widened, Some((1, self.len())))
    }
}

impl ToHost for RowDVector<i32> {
    fn to_host(&self) -> HostArray {
        HostArray::from_ints(self.as_slice().to_vec(), Some((1, self.len())))
    }
}

impl ToHost for RowDVector<u32> {
    fn to_host(&self) -> HostArray {
        let reinterpreted: Vec<i32> = self.iter().map(|&v| v as i32).collect();
        HostArray::from_ints(reinterpreted, Some((1, self.len())))
    }
}
