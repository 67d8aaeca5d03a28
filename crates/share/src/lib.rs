//! Additive 2-of-2 secret splitting of elliptic-curve private scalars
//!
//! A private scalar `A` over a curve order `n` is split into `share1`,
//! drawn uniformly at random from `[1, n-1]`, and
//! `share2 = (A - share1) mod n`. Neither share alone carries any usable
//! information about `A`; their modular sum restores it exactly.
//!
//! Restoration is verified on two levels: the restored scalar must equal
//! the original, and the public keys derived from both must serialize to
//! identical compressed encodings. The second check guards against defects
//! in the external derivation collaborator and is surfaced as its own
//! error kind.
//!
//! All operations are single-shot pure computations over their arguments;
//! the curve order and the random source are explicit parameters.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

mod restorer;
mod splitter;

pub use restorer::{ScalarRestorer, VerificationReport};
pub use splitter::{KeyShares, ScalarSplitter};

#[cfg(test)]
mod tests;
