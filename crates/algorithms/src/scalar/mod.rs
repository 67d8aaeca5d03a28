//! Fixed-width scalars and modular arithmetic over an explicit curve order

mod order;

pub use order::CurveOrder;

use keysplit_api::error::validate;
use keysplit_api::{Error, Result};
use keysplit_common::security::SecretBuffer;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Size of a scalar in bytes (32 bytes = 256 bits)
pub const SCALAR_SIZE: usize = 32;

/// Length of the hex representation of a scalar
pub const SCALAR_HEX_LEN: usize = 2 * SCALAR_SIZE;

/// An unsigned integer in `[0, n-1]` for a curve order `n`
///
/// Represents a private key or a key share in big-endian byte form.
/// Construction validates the range by explicit rejection: a value at or
/// above the supplied order is an error, never silently reduced. Zero is
/// representable because key shares and restored values may legitimately
/// be zero; operations that require a private key reject zero themselves.
///
/// The value is held in a [`SecretBuffer`] and zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes, rejecting values `>= n`
    pub fn from_bytes(bytes: [u8; SCALAR_SIZE], order: &CurveOrder) -> Result<Self> {
        if !order.contains(&bytes) {
            return Err(Error::invalid_scalar(
                "Scalar::from_bytes",
                "value is not below the curve order",
            ));
        }
        Ok(Scalar(SecretBuffer::new(bytes)))
    }

    /// Parse a scalar from its fixed-width hex representation
    ///
    /// Exactly 64 characters for a 256-bit curve. Input case is accepted
    /// either way; output from [`Scalar::to_hex`] is always lowercase.
    pub fn from_hex(hex_str: &str, order: &CurveOrder) -> Result<Self> {
        validate::length("scalar hex string", hex_str.len(), SCALAR_HEX_LEN)?;

        let mut bytes = [0u8; SCALAR_SIZE];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| Error::InvalidEncoding {
            context: "Scalar::from_hex",
            reason: "input contains non-hex characters",
        })?;

        Self::from_bytes(bytes, order)
    }

    /// Internal constructor for arithmetic results, which are reduced by
    /// construction
    fn from_raw(bytes: [u8; SCALAR_SIZE]) -> Self {
        Scalar(SecretBuffer::new(bytes))
    }

    /// Sample a scalar uniformly from `[1, n-1]`
    ///
    /// Uses rejection sampling: fresh 32-byte draws are discarded until one
    /// lands in range. Reducing an out-of-range draw modulo `n` instead
    /// would bias the distribution near the boundary, so a draw is never
    /// reused in any form. The random source is an injected capability;
    /// tests substitute a fixed-sequence generator.
    pub fn random<R: CryptoRng + RngCore>(order: &CurveOrder, rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; SCALAR_SIZE];

        loop {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|_| Error::InsufficientEntropy {
                    context: "Scalar::random",
                })?;

            if Self::bytes_are_zero(&bytes) {
                continue;
            }
            if order.contains(&bytes) {
                return Ok(Scalar(SecretBuffer::new(bytes)));
            }
        }
    }

    /// Serialize the scalar to big-endian bytes
    pub fn to_bytes(&self) -> [u8; SCALAR_SIZE] {
        let mut result = [0u8; SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Lowercase fixed-width hex representation
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_ref())
    }

    /// Check if the scalar is the additive identity
    pub fn is_zero(&self) -> bool {
        Self::bytes_are_zero(self.0.as_ref())
    }

    /// Constant-time equality against another scalar
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }

    /// Add two scalars modulo the curve order
    ///
    /// Both inputs are below `n` by construction, so a single conditional
    /// subtraction normalizes the sum. Pure modular addition never fails.
    pub fn add_mod(&self, other: &Self, order: &CurveOrder) -> Self {
        let a = Self::to_le_limbs(&self.to_bytes());
        let b = Self::to_le_limbs(&other.to_bytes());

        let mut r = [0u32; 8];
        let mut carry = 0u64;

        // Plain 256-bit add
        #[allow(clippy::needless_range_loop)] // Index used for multiple arrays
        for i in 0..8 {
            let tmp = a[i] as u64 + b[i] as u64 + carry;
            r[i] = tmp as u32;
            carry = tmp >> 32;
        }

        // If we overflowed OR r >= n, subtract n once
        if carry == 1 || Self::geq(&r, order.limbs()) {
            Self::sub_in_place(&mut r, order.limbs());
        }

        Self::from_raw(Self::limbs_to_be(&r))
    }

    /// Subtract two scalars modulo the curve order
    ///
    /// The result is normalized into `[0, n-1]`; a negative intermediate
    /// gets the order added back.
    pub fn sub_mod(&self, other: &Self, order: &CurveOrder) -> Self {
        let a = Self::to_le_limbs(&self.to_bytes());
        let b = Self::to_le_limbs(&other.to_bytes());

        let mut r = [0u32; 8];
        let mut borrow = 0i64;

        #[allow(clippy::needless_range_loop)] // Index used for multiple arrays
        for i in 0..8 {
            let tmp = a[i] as i64 - b[i] as i64 - borrow;
            if tmp < 0 {
                r[i] = (tmp + (1i64 << 32)) as u32;
                borrow = 1;
            } else {
                r[i] = tmp as u32;
                borrow = 0;
            }
        }

        if borrow == 1 {
            // Result was negative, add n back
            let n_limbs = order.limbs();
            let mut c = 0u64;
            #[allow(clippy::needless_range_loop)] // Index used for multiple arrays
            for i in 0..8 {
                let tmp = r[i] as u64 + n_limbs[i] as u64 + c;
                r[i] = tmp as u32;
                c = tmp >> 32;
            }
        }

        Self::from_raw(Self::limbs_to_be(&r))
    }

    // Private helper methods

    #[inline(always)]
    fn bytes_are_zero(bytes: &[u8]) -> bool {
        bytes.iter().all(|&b| b == 0)
    }

    /// Convert big-endian bytes to little-endian limbs
    #[inline(always)]
    fn to_le_limbs(bytes_be: &[u8; SCALAR_SIZE]) -> [u32; 8] {
        let mut limbs = [0u32; 8];

        // limb 0 must hold the 4 least-significant bytes, limb 7 the 4 most-significant
        #[allow(clippy::needless_range_loop)] // Index used for offset calculation
        for i in 0..8 {
            let start = SCALAR_SIZE - 4 - i * 4;
            limbs[i] = u32::from_be_bytes([
                bytes_be[start],
                bytes_be[start + 1],
                bytes_be[start + 2],
                bytes_be[start + 3],
            ]);
        }
        limbs
    }

    /// Convert little-endian limbs to big-endian bytes
    /// The inverse of to_le_limbs
    #[inline(always)]
    fn limbs_to_be(limbs: &[u32; 8]) -> [u8; SCALAR_SIZE] {
        let mut out = [0u8; SCALAR_SIZE];
        for (i, &w) in limbs.iter().enumerate() {
            let start = SCALAR_SIZE - 4 - i * 4;
            out[start..start + 4].copy_from_slice(&w.to_be_bytes());
        }
        out
    }

    /// Compare two limb arrays for greater-than-or-equal
    #[inline(always)]
    fn geq(a: &[u32; 8], b: &[u32; 8]) -> bool {
        for i in (0..8).rev() {
            if a[i] > b[i] {
                return true;
            }
            if a[i] < b[i] {
                return false;
            }
        }
        true // equal
    }

    /// Subtract b from a in-place
    #[inline(always)]
    fn sub_in_place(a: &mut [u32; 8], b: &[u32; 8]) {
        let mut borrow = 0u64;
        #[allow(clippy::needless_range_loop)] // Index used for multiple arrays
        for i in 0..8 {
            let tmp = (a[i] as u64).wrapping_sub(b[i] as u64).wrapping_sub(borrow);
            a[i] = tmp as u32;
            borrow = (tmp >> 63) & 1; // 1 if we wrapped
        }
    }
}
