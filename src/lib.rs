//! Fixed-size vector and matrix math for 3D graphics.
//!
//! This crate provides column vectors with 2, 3 or 4 elements and column-major matrices up to 4x4
//! (both generalized over their dimensions via const generics), along with the operations 3D
//! transform math needs: dot and cross products, normalization, determinants, inverses, LU/PLU
//! decomposition, and constructors for the usual transform and projection matrices.
//!
//! # Goals & Non-Goals
//!
//! - Support only compile-time-known dimensions. Encoding the shape in the type keeps the API
//!   small and turns dimension mismatches into compile errors instead of runtime ones.
//! - Use a single, column-major, unpadded data layout, so matrices can be handed to graphics APIs
//!   as-is (via [`bytemuck`]).
//! - Be generic over the element type, but only over plain [`Copy`] numerics. Operations that
//!   require division or square roots (normalization, inversion, decomposition, projections) are
//!   restricted to element types providing them.
//! - Stay allocation-free: every operation works on stack-resident values.
//! - Out of scope: dynamically-sized or sparse matrices, SIMD-specific storage, and symbolic math.
//!
//! # Conventions
//!
//! Matrices are stored column-major (element `(row, col)` lives at flat offset `row + R * col`)
//! and multiply *column* vectors from the left: transforms compose as
//! `projection * view * model * v`. The row-vector form `v * m` is also provided and computes the
//! transposed product. All transform constructors in this crate assume the column-vector
//! convention.
//!
//! # Error handling
//!
//! Precondition violations are programming errors and fail loudly: indexing out of bounds panics
//! (like slices), [`Matrix::invert`] panics on a non-invertible matrix, and
//! [`Matrix::from_row_major`] panics when given the wrong number of elements. Checked
//! alternatives ([`Matrix::get`], [`Matrix::try_invert`], the decompositions) return [`Option`]
//! instead. The documented IEEE-754 fallthrough cases are *not* errors: normalizing a zero vector
//! yields non-finite elements, and refraction past the critical angle returns the zero vector.

pub mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
