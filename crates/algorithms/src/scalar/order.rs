//! Curve-order values for scalar arithmetic

use crate::scalar::SCALAR_SIZE;
use keysplit_params::{NIST_P256, SECP256K1};

/// The group order of a named elliptic curve, carried as an explicit value
///
/// Every modular operation in this crate takes the order as a parameter;
/// there is no process-wide default modulus. The little-endian limb
/// decomposition is precomputed once at construction so the arithmetic
/// loops never re-derive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveOrder {
    name: &'static str,
    n: [u8; SCALAR_SIZE],
    limbs: [u32; 8],
}

impl CurveOrder {
    /// Build an order value from its big-endian byte representation
    ///
    /// The caller is responsible for supplying the published order of the
    /// intended curve; this constructor cannot detect a transcription of
    /// the wrong constant.
    pub const fn from_be_bytes(name: &'static str, n: [u8; SCALAR_SIZE]) -> Self {
        let mut limbs = [0u32; 8];
        let mut i = 0;
        // limb 0 holds the 4 least-significant bytes, limb 7 the 4 most-significant
        while i < 8 {
            let start = SCALAR_SIZE - 4 - i * 4;
            limbs[i] = u32::from_be_bytes([n[start], n[start + 1], n[start + 2], n[start + 3]]);
            i += 1;
        }
        CurveOrder { name, n, limbs }
    }

    /// The NIST P-256 (secp256r1) group order
    pub const fn nist_p256() -> Self {
        Self::from_be_bytes(NIST_P256.name, NIST_P256.order)
    }

    /// The secp256k1 group order
    pub const fn secp256k1() -> Self {
        Self::from_be_bytes(SECP256K1.name, SECP256K1.order)
    }

    /// Human-readable name of the curve this order belongs to
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The order in big-endian byte representation
    pub fn to_bytes(&self) -> [u8; SCALAR_SIZE] {
        self.n
    }

    /// Check that a big-endian value lies strictly below the order
    ///
    /// Flag-style byte comparison with no data-dependent early exit.
    pub(crate) fn contains(&self, bytes: &[u8; SCALAR_SIZE]) -> bool {
        let mut gt = 0u8; // set if bytes > n
        let mut lt = 0u8; // set if bytes < n

        for i in 0..SCALAR_SIZE {
            let x = bytes[i];
            let y = self.n[i];
            gt |= ((x > y) as u8) & (!lt);
            lt |= ((x < y) as u8) & (!gt);
        }
        lt == 1
    }

    pub(crate) fn limbs(&self) -> &[u32; 8] {
        &self.limbs
    }
}
