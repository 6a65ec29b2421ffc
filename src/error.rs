//! Structured error types for host array marshalling.
//!
//! This module provides:
//! - `MarshalError`: shape errors from conversion and host array construction
//!
//! Numeric-kind coercion is deliberately not represented here: narrowing
//! conversions truncate or wrap silently (see the [`marshal`](crate::marshal)
//! module docs). The only fatal condition in the crate, misuse of
//! [`set_seed_random`](crate::rng::SampleSource::set_seed_random), propagates
//! through [`HostRuntime::fatal`](crate::host::HostRuntime::fatal) rather
//! than a `Result`.

use thiserror::Error;

/// Shape errors from marshalling operations.
///
/// Returned by matrix imports given flat input and by host matrix
/// construction with inconsistent storage length. The glue layer forwards
/// these to [`HostRuntime::fatal`](crate::host::HostRuntime::fatal), which
/// aborts the current host call.
///
/// # Examples
/// ```
/// use linalg_bridge::error::MarshalError;
///
/// let err = MarshalError::NotAMatrix { len: 3 };
/// assert!(format!("{}", err).contains("flat array of length 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarshalError {
    /// A matrix-shaped container was requested from a flat host array.
    #[error("expected a matrix-shaped host array, got a flat array of length {len}")]
    NotAMatrix {
        /// Length of the flat array that was supplied.
        len: usize,
    },

    /// Host matrix construction with inconsistent storage length.
    #[error("dimension mismatch: a {nrows}x{ncols} matrix needs {expected} elements, got {got}")]
    DimensionMismatch {
        /// Requested row count.
        nrows: usize,
        /// Requested column count.
        ncols: usize,
        /// Required storage length (`nrows * ncols`).
        expected: usize,
        /// Storage length actually supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_matrix_display() {
        let err = MarshalError::NotAMatrix { len: 5 };
        assert_eq!(
            format!("{}", err),
            "expected a matrix-shaped host array, got a flat array of length 5"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MarshalError::DimensionMismatch {
            nrows: 2,
            ncols: 3,
            expected: 6,
            got: 5,
        };
        assert_eq!(
            format!("{}", err),
            "dimension mismatch: a 2x3 matrix needs 6 elements, got 5"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MarshalError::NotAMatrix { len: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarshalError::NotAMatrix { len: 7 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_marshal_error_serde_roundtrip() {
            let err = MarshalError::DimensionMismatch {
                nrows: 2,
                ncols: 3,
                expected: 6,
                got: 5,
            };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: MarshalError = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
