//! # Cofactor - dense immutable matrices
//!
//! A small linear-algebra core built around one type, [`Matrix`]: a
//! shape-tagged grid of floats stored in row-major order. Every operation
//! returns a new matrix; nothing mutates in place.
//!
//! ## Core Features
//!
//! - **Construction**: shape-first builder, identity, scalar and column vectors
//! - **Shape transforms**: transpose, rotate, mirror, row and column slices
//! - **Cofactor algebra**: minors, recursive determinant, adjugate, inverse
//! - **Products**: scalar scaling and matrix multiplication
//!
//! ## Quick Start
//!
//! ```rust
//! use cofactor::{identity, matrix, MatrixError};
//!
//! # fn main() -> Result<(), MatrixError> {
//! let m = matrix(3, 3).build([1.0f32, 2.0, 3.0,
//!                             0.0, 1.0, 4.0,
//!                             5.0, 6.0, 0.0])?;
//!
//! assert_eq!(m.determinant()?, 1.0);
//!
//! let inverse = m.inverse()?;
//! assert_eq!(inverse.multiply(&m)?, identity(3));
//!
//! // Singular input is reported, never returned as inf/NaN values.
//! let singular = matrix(2, 2).build([1.0f32, 2.0, 2.0, 4.0])?;
//! assert_eq!(singular.inverse(), Err(MatrixError::Singular));
//! # Ok(())
//! # }
//! ```

pub mod numerics;

pub use numerics::config::{ConfigError, NumericsConfig};
pub use numerics::types::error::MatrixError;
pub use numerics::types::matrix::{identity, matrix, scalar, vector, Matrix, MatrixBuilder};
pub use numerics::types::traits::FloatingPoint;

/// Version information for the cofactor crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
