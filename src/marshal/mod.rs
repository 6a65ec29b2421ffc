//! Numeric-kind-aware marshalling between host tagged arrays and `nalgebra`
//! dense containers.
//!
//! This module provides:
//! - [`FromHost`]: import half of the contract, one implementation per
//!   supported (element kind, shape) pair
//! - [`ToHost`]: export half, same coverage
//! - [`import()`] / [`export()`]: free-function entry points for glue code
//!
//! Supported pairs are `f64`, `f32`, `i32`, and `u32` crossed with
//! [`DMatrix`](nalgebra::DMatrix), [`DVector`](nalgebra::DVector), and
//! [`RowDVector`](nalgebra::RowDVector). Each implementation is written out
//! explicitly so every coercion rule stays auditable on its own; the pair
//! set is closed and needs no runtime dispatch.
//!
//! # Coercion rules
//!
//! Imports dispatch on the host array's numeric-kind tag and coerce instead
//! of rejecting mismatches. Narrowing is silent but defined: real values
//! truncate toward zero and saturate at the `i32` limits; signed and
//! unsigned 32-bit values reinterpret each other's two's-complement bit
//! pattern, so negative reals imported as `u32` wrap
//! (`-1.0` becomes `4294967295`). No narrowing raises an error or logs.
//!
//! # Shapes
//!
//! Matrix imports require a matrix-shaped host array. Column-vector imports
//! accept flat input and flatten matrix input in column-major storage order;
//! row-vector imports are the column import followed by a transpose. Exports
//! always copy, preserve matrix shape, and emit vectors as single-column or
//! single-row host matrices matching their orientation.

mod export;
mod import;

use crate::error::MarshalError;
use crate::host::HostArray;

/// Import half of the marshalling contract.
///
/// Produces a fresh container from a borrowed host array; the host array is
/// never retained and no aliasing between the two representations exists.
pub trait FromHost: Sized {
    /// Builds a fresh container of this type from `value`, coercing the
    /// element kind if the host tag differs.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::NotAMatrix`] when a matrix-shaped container
    /// is requested from a flat host array. Kind coercion never fails.
    fn from_host(value: &HostArray) -> Result<Self, MarshalError>;
}

/// Export half of the marshalling contract.
///
/// Every export copies; no in-place export path exists.
pub trait ToHost {
    /// Copies this container into a fresh host array.
    fn to_host(&self) -> HostArray;
}

/// Imports a host array as the container type `T`.
///
/// Convenience entry point for glue code selecting the target kind at
/// compile time: `import::<DMatrix<f64>>(&value)`.
///
/// # Errors
///
/// Propagates [`MarshalError`] from [`FromHost::from_host`].
pub fn import<T: FromHost>(value: &HostArray) -> Result<T, MarshalError> {
    T::from_host(value)
}

/// Exports a container as a fresh host array.
pub fn export<T: ToHost>(value: &T) -> HostArray {
    value.to_host()
}
