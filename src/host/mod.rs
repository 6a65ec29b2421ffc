//! Host-runtime boundary: tagged arrays and the capability surface the
//! bridge consumes from the embedding host.
//!
//! This module provides:
//! - [`NumericTag`]: runtime-inspectable element-kind tag of a host array
//! - [`HostArray`]: a host-owned tagged array value (integer or real storage,
//!   matrix or flat shape)
//! - [`HostRuntime`]: the two capabilities the bridge needs from the host
//!   (bounded uniform draws and fatal error signalling)
//! - [`SeededHost`]: reference host backed by a seeded generator, for tests
//!   and standalone embeddings
//!
//! The host owns every `HostArray` and the single global RNG stream. The
//! bridge borrows arrays for the duration of one conversion call and never
//! retains a reference; every conversion is a full copy.

mod reference;

pub use reference::SeededHost;

use crate::error::MarshalError;

/// Runtime numeric-kind tag of a host array.
///
/// The host runtime stores arrays in exactly two numeric kinds; every other
/// element kind the dense containers support is reached by coercion during
/// marshalling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericTag {
    /// 32-bit signed integer storage.
    Integer,
    /// Double-precision real storage.
    Real,
}

/// Tagged storage of a host array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum HostValues {
    /// 32-bit signed integer elements.
    Int(Vec<i32>),
    /// Double-precision real elements.
    Real(Vec<f64>),
}

/// A host-owned tagged array value.
///
/// Carries integer or real storage plus an optional matrix dimension; an
/// absent dimension means a flat sequence, which the marshaller interprets
/// as a column. Matrix storage is column-major, matching both the host
/// runtime and `nalgebra`.
///
/// # Examples
/// ```
/// use linalg_bridge::host::{HostArray, NumericTag};
///
/// let flat = HostArray::real_flat(vec![1.0, 2.0, 3.0]);
/// assert_eq!(flat.tag(), NumericTag::Real);
/// assert_eq!(flat.dim(), None);
///
/// let matrix = HostArray::int_matrix(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert!(matrix.is_matrix());
/// assert_eq!(matrix.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostArray {
    values: HostValues,
    dim: Option<(usize, usize)>,
}

impl HostArray {
    /// Creates a flat integer array.
    pub fn int_flat(data: Vec<i32>) -> Self {
        Self {
            values: HostValues::Int(data),
            dim: None,
        }
    }

    /// Creates a flat real array.
    pub fn real_flat(data: Vec<f64>) -> Self {
        Self {
            values: HostValues::Real(data),
            dim: None,
        }
    }

    /// Creates an integer matrix from column-major storage.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::DimensionMismatch`] if
    /// `data.len() != nrows * ncols`.
    pub fn int_matrix(nrows: usize, ncols: usize, data: Vec<i32>) -> Result<Self, MarshalError> {
        check_dim(nrows, ncols, data.len())?;
        Ok(Self {
            values: HostValues::Int(data),
            dim: Some((nrows, ncols)),
        })
    }

    /// Creates a real matrix from column-major storage.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::DimensionMismatch`] if
    /// `data.len() != nrows * ncols`.
    pub fn real_matrix(nrows: usize, ncols: usize, data: Vec<f64>) -> Result<Self, MarshalError> {
        check_dim(nrows, ncols, data.len())?;
        Ok(Self {
            values: HostValues::Real(data),
            dim: Some((nrows, ncols)),
        })
    }

    /// Builds an integer array from parts whose consistency the caller has
    /// already established (export paths).
    pub(crate) fn from_ints(data: Vec<i32>, dim: Option<(usize, usize)>) -> Self {
        Self {
            values: HostValues::Int(data),
            dim,
        }
    }

    /// Builds a real array from parts whose consistency the caller has
    /// already established (export paths).
    pub(crate) fn from_reals(data: Vec<f64>, dim: Option<(usize, usize)>) -> Self {
        Self {
            values: HostValues::Real(data),
            dim,
        }
    }

    /// The runtime numeric-kind tag.
    #[inline]
    pub fn tag(&self) -> NumericTag {
        match self.values {
            HostValues::Int(_) => NumericTag::Integer,
            HostValues::Real(_) => NumericTag::Real,
        }
    }

    /// Matrix dimension as `(nrows, ncols)`, or `None` for a flat sequence.
    #[inline]
    pub fn dim(&self) -> Option<(usize, usize)> {
        self.dim
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.values {
            HostValues::Int(data) => data.len(),
            HostValues::Real(data) => data.len(),
        }
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the array carries a matrix dimension.
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.dim.is_some()
    }

    /// Integer storage in column-major order, if the tag is
    /// [`NumericTag::Integer`].
    #[inline]
    pub fn as_ints(&self) -> Option<&[i32]> {
        match &self.values {
            HostValues::Int(data) => Some(data),
            HostValues::Real(_) => None,
        }
    }

    /// Real storage in column-major order, if the tag is
    /// [`NumericTag::Real`].
    #[inline]
    pub fn as_reals(&self) -> Option<&[f64]> {
        match &self.values {
            HostValues::Int(_) => None,
            HostValues::Real(data) => Some(data),
        }
    }

    /// Tagged storage for the marshaller.
    #[inline]
    pub(crate) fn values(&self) -> &HostValues {
        &self.values
    }
}

fn check_dim(nrows: usize, ncols: usize, got: usize) -> Result<(), MarshalError> {
    let expected = nrows * ncols;
    if got != expected {
        return Err(MarshalError::DimensionMismatch {
            nrows,
            ncols,
            expected,
            got,
        });
    }
    Ok(())
}

/// Capabilities the bridge consumes from the embedding host runtime.
///
/// The host owns the single authoritative RNG stream and the error/abort
/// mechanism. Neither capability is safe to use from more than one thread;
/// the `&mut` receiver keeps the draw path structurally single-threaded and
/// no locking is used.
pub trait HostRuntime {
    /// One draw uniformly distributed over `[low, high)` from the host's
    /// global generator stream.
    ///
    /// State is owned and seeded entirely by the host; repeated calls
    /// advance the host's single stream.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Signals a fatal, user-visible error and never returns.
    ///
    /// Aborts the current call into the bridge. In a real embedding this
    /// forwards to the host's own error mechanism; [`SeededHost`] maps it to
    /// a panic carrying `message`.
    fn fatal(&self, message: &str) -> !;
}
