//! # keysplit
//!
//! Additive 2-of-2 secret splitting for elliptic-curve private keys.
//!
//! A private scalar `A` over the order `n` of a named curve is split into
//! two shares: `A1` drawn uniformly at random from `[1, n-1]`, and
//! `A2 = (A - A1) mod n`. Recombination is `(A1 + A2) mod n`, and the
//! reconstruction is verified both at the scalar level and by comparing the
//! public keys derived from the original and restored scalars.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! keysplit = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`keysplit-api`]: Error taxonomy and collaborator traits
//! - [`keysplit-common`]: Zeroizing secret buffers
//! - [`keysplit-params`]: Published curve-order constants
//! - [`keysplit-algorithms`]: Scalar arithmetic modulo an explicit curve order
//! - [`keysplit-keys`]: Public-key derivation and SEC1 point serialization
//! - [`keysplit-share`]: The split / restore / verify operations

#![cfg_attr(not(feature = "std"), no_std)]

pub use keysplit_api as api;
pub use keysplit_common as common;
pub use keysplit_params as params;

pub use keysplit_algorithms as algorithms;
pub use keysplit_keys as keys;
pub use keysplit_share as share;

/// Common imports for keysplit users
pub mod prelude {
    pub use keysplit_api::{
        Error, PointFormat, PointSerialize, PublicKeyDerivation, Result,
    };
    pub use keysplit_algorithms::{CurveOrder, Scalar, SCALAR_SIZE};
    pub use keysplit_keys::nistp256::{P256KeyDerivation, P256KeyPair};
    pub use keysplit_keys::secp256k1::{K256KeyDerivation, K256KeyPair};
    pub use keysplit_share::{KeyShares, ScalarRestorer, ScalarSplitter, VerificationReport};
}
