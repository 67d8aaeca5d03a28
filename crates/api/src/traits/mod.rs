// File: crates/api/src/traits/mod.rs

//! Collaborator traits for externally supplied curve arithmetic.
//!
//! The splitting core does not implement curve-point arithmetic. It relies
//! on two capabilities supplied by an external collaborator: deriving a
//! public key from a private scalar, and serializing that key to a byte
//! encoding. Both are expressed as traits so tests can substitute
//! deterministic fakes for the real curve backends.

use crate::types::PointFormat;
use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A public point that can be serialized to its standard byte encodings.
pub trait PointSerialize {
    /// Serialize the point in the requested format.
    ///
    /// Uncompressed points are `0x04 || x || y`; compressed points are
    /// `0x02`/`0x03` (parity of y) followed by `x`. Coordinates are
    /// zero-padded to the field byte length.
    fn to_bytes(&self, format: PointFormat) -> Vec<u8>;
}

/// Derivation of a public key from a private scalar on a fixed named curve.
///
/// Implementations must be deterministic (same scalar, same point) and must
/// fail for a zero or out-of-range scalar rather than silently producing a
/// degenerate result.
pub trait PublicKeyDerivation {
    /// The derived public point type.
    type PublicKey: PointSerialize;

    /// Derive the public key for a big-endian encoded private scalar.
    fn derive_public_key(&self, scalar_be: &[u8; 32]) -> Result<Self::PublicKey>;
}
