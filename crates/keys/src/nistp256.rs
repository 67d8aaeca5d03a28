// File: crates/keys/src/nistp256.rs

//! NIST P-256 key derivation backed by the `p256` crate

use elliptic_curve::sec1::ToEncodedPoint;
use keysplit_algorithms::{CurveOrder, Scalar, SCALAR_SIZE};
use keysplit_api::{Error, PointFormat, PointSerialize, PublicKeyDerivation, Result};
use p256::{FieldBytes, PublicKey, SecretKey};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Public-key derivation on NIST P-256
///
/// Deterministic: the same scalar always derives the same point. A zero or
/// out-of-range scalar is rejected by the backend before any derivation.
pub struct P256KeyDerivation;

/// A derived P-256 public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct P256PublicKey(PublicKey);

impl P256PublicKey {
    /// The affine x-coordinate, zero-padded to the field byte length
    pub fn x_coordinate_bytes(&self) -> [u8; SCALAR_SIZE] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; SCALAR_SIZE];
        out.copy_from_slice(point.x().expect("derived public key is never the identity"));
        out
    }

    /// The affine y-coordinate, zero-padded to the field byte length
    pub fn y_coordinate_bytes(&self) -> [u8; SCALAR_SIZE] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; SCALAR_SIZE];
        out.copy_from_slice(point.y().expect("derived public key is never the identity"));
        out
    }
}

impl PointSerialize for P256PublicKey {
    fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        let compress = matches!(format, PointFormat::Compressed);
        self.0.to_encoded_point(compress).as_bytes().to_vec()
    }
}

impl PublicKeyDerivation for P256KeyDerivation {
    type PublicKey = P256PublicKey;

    fn derive_public_key(&self, scalar_be: &[u8; SCALAR_SIZE]) -> Result<P256PublicKey> {
        let field_bytes = FieldBytes::from(*scalar_be);
        let secret = SecretKey::from_bytes(&field_bytes).map_err(|_| {
            Error::invalid_scalar(
                "P256KeyDerivation",
                "scalar is zero or not below the curve order",
            )
        })?;
        Ok(P256PublicKey(secret.public_key()))
    }
}

/// A P-256 private scalar paired with its derived public key
///
/// The public component is computed from the scalar at construction and is
/// never stored or settable independently, so the two cannot diverge.
#[derive(Clone)]
pub struct P256KeyPair {
    secret: Scalar,
    public: P256PublicKey,
}

impl P256KeyPair {
    /// Build a keypair from a private scalar
    pub fn from_scalar(secret: Scalar) -> Result<Self> {
        let public = P256KeyDerivation.derive_public_key(&secret.to_bytes())?;
        Ok(P256KeyPair { secret, public })
    }

    /// Build a keypair from a 64-character hex private key
    pub fn from_hex(private_key_hex: &str) -> Result<Self> {
        let order = CurveOrder::nist_p256();
        let secret = Scalar::from_hex(private_key_hex, &order)?;
        Self::from_scalar(secret)
    }

    /// The private scalar
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The derived public key
    pub fn public(&self) -> &P256PublicKey {
        &self.public
    }
}
