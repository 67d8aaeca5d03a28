//! Public API traits and types for the keysplit library
//!
//! This crate provides the public API surface for the keysplit workspace:
//! the error taxonomy, parameter-validation helpers, and the collaborator
//! traits through which the core borrows curve-point arithmetic from an
//! external implementation.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::PointFormat;

pub use traits::{PointSerialize, PublicKeyDerivation};
