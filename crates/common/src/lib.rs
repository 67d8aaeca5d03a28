//! Common security primitives for the keysplit library
//!
//! Provides the zeroizing buffer types the rest of the workspace stores
//! secret scalar material in.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::{SecretBuffer, SecureZeroingType};
