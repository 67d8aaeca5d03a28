//! External curve collaborators for the keysplit library
//!
//! Realizes the two capabilities the splitting core borrows from outside:
//! deriving a public key from a private scalar, and serializing the derived
//! point to its SEC1 byte encodings. Both are backed by the RustCrypto
//! curve crates; no point arithmetic is implemented here.
//!
//! Each supported curve gets a concrete derivation type implementing
//! [`keysplit_api::PublicKeyDerivation`] plus a `KeyPair` type that binds a
//! private scalar to the public key derived from it at construction time.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod nistp256;
pub mod secp256k1;

pub use nistp256::{P256KeyDerivation, P256KeyPair, P256PublicKey};
pub use secp256k1::{K256KeyDerivation, K256KeyPair, K256PublicKey};

/// Size of an uncompressed SEC1 point for a 256-bit curve: 0x04 || x || y
pub const POINT_UNCOMPRESSED_SIZE: usize = 65;

/// Size of a compressed SEC1 point for a 256-bit curve: 0x02/0x03 || x
pub const POINT_COMPRESSED_SIZE: usize = 33;
