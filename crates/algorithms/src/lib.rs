//! Scalar arithmetic for the keysplit library
//!
//! Implements fixed-width big-endian scalars and modular arithmetic over an
//! explicitly supplied curve order. The order is a value parameter of every
//! operation rather than a hidden module-level constant, so the same code
//! serves any 256-bit curve without risk of a silent modulus mismatch.
//!
//! Curve-point arithmetic is deliberately absent: deriving a public key
//! from a scalar is an external collaborator concern (see `keysplit-keys`).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod scalar;

pub use scalar::{CurveOrder, Scalar, SCALAR_SIZE};
