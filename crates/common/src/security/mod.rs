//! Security-related types and utilities

mod secret;

pub use secret::{SecretBuffer, SecureZeroingType};
