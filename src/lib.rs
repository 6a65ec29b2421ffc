//! # linalg_bridge: host runtime to nalgebra bridge
//!
//! A thin binding layer between a host statistical runtime and `nalgebra`
//! dense containers, made of two independent leaf adapters:
//!
//! - **Marshaller** (`marshal`): bidirectional, always-copying conversion
//!   between host tagged arrays and typed dense containers for every
//!   supported element-kind and shape pair (`f64`/`f32`/`i32`/`u32` crossed
//!   with matrix, column vector, and row vector), with transparent
//!   numeric-kind coercion.
//! - **RNG Adapter** (`rng`): a sampling source satisfying the generator
//!   contract of the numeric side of the embedding, delegating every draw to
//!   the host runtime's own generator so draws stay reproducible under the
//!   host's seeding model.
//!
//! The two components share no runtime state. Both are invoked by glue code
//! that owns the host call context; see the module docs for the contracts.
//!
//! ## Host interaction model
//!
//! The host runtime is represented by the [`host::HostRuntime`] trait: a
//! bounded uniform draw primitive whose state the host owns exclusively, and
//! a fatal-error capability that never returns. All host-affecting calls are
//! single-threaded by construction (`&mut` receivers); no locking is used or
//! needed.
//!
//! ## Usage Examples
//!
//! ```rust
//! use linalg_bridge::host::{HostArray, SeededHost};
//! use linalg_bridge::marshal::{import, ToHost};
//! use linalg_bridge::rng::{HostRng, SampleSource};
//! use nalgebra::DMatrix;
//!
//! // Marshal a host integer matrix into a real container and back.
//! let host = HostArray::int_matrix(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let m: DMatrix<f64> = import(&host).unwrap();
//! assert_eq!(m[(1, 0)], 2.0);
//! let exported = m.to_host();
//! assert_eq!(exported.dim(), Some((2, 2)));
//!
//! // Draw through the host's generator.
//! let mut rng = HostRng::new(SeededHost::from_seed(42));
//! let u = rng.uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for [`host::HostArray`],
//!   [`host::NumericTag`], and [`error::MarshalError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod host;
pub mod marshal;
pub mod rng;
