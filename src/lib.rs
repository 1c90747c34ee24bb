//! pycol-marshal: shape-checked conversion of flat numeric buffers.
//!
//! Buffers handed over from a host environment (real or complex doubles with
//! no shape metadata) are turned into owned vectors, 3-vectors and square
//! complex matrices for a downstream numerical engine. Every conversion
//! validates the declared sizes first and fails with a [`MarshalError`]
//! instead of truncating or reading out of bounds.
//!
//! The slice-based API lives in [`marshal`]; [`ffi`] adds raw pointer entry
//! points and [`flatten`] the inverse conversions.
pub mod config;
pub mod error;
pub mod ffi;
pub mod flatten;
pub mod logging;
pub mod marshal;
pub mod math;

pub use config::{MarshalConfig, MatrixOrder, MatrixSize};
pub use error::{ErrorKind, MarshalError};
pub use marshal::BufferMarshaller;
