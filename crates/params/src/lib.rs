//! Published constants for the curves supported by keysplit
//!
//! Pure data, no dependencies. The values here are transcriptions of
//! published standards; anyone deploying against a different curve must
//! verify the order constant against that curve's specification, because
//! splitting against the wrong modulus silently produces shares that fail
//! restoration.

#![no_std]

pub mod curves;

pub use curves::{ScalarField, NIST_P256, SECP256K1};
