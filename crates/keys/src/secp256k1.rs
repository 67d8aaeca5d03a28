// File: crates/keys/src/secp256k1.rs

//! secp256k1 key derivation backed by the `k256` crate

use elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, PublicKey, SecretKey};
use keysplit_algorithms::{CurveOrder, Scalar, SCALAR_SIZE};
use keysplit_api::{Error, PointFormat, PointSerialize, PublicKeyDerivation, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Public-key derivation on secp256k1
pub struct K256KeyDerivation;

/// A derived secp256k1 public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct K256PublicKey(PublicKey);

impl K256PublicKey {
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

impl PointSerialize for K256PublicKey {
    fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        let compress = matches!(format, PointFormat::Compressed);
        self.0.to_encoded_point(compress).as_bytes().to_vec()
    }
}

impl PublicKeyDerivation for K256KeyDerivation {
    type PublicKey = K256PublicKey;

    fn derive_public_key(&self, scalar_be: &[u8; SCALAR_SIZE]) -> Result<K256PublicKey> {
        let field_bytes = FieldBytes::from(*scalar_be);
        let secret = SecretKey::from_bytes(&field_bytes).map_err(|_| {
            Error::invalid_scalar(
                "K256KeyDerivation",
                "scalar is zero or not below the curve order",
            )
        })?;
        Ok(K256PublicKey(secret.public_key()))
    }
}

/// A secp256k1 private scalar paired with its derived public key
#[derive(Clone)]
pub struct K256KeyPair {
    secret: Scalar,
    public: K256PublicKey,
}

impl K256KeyPair {
    /// Build a keypair from a private scalar
    pub fn from_scalar(secret: Scalar) -> Result<Self> {
        let public = K256KeyDerivation.derive_public_key(&secret.to_bytes())?;
        Ok(K256KeyPair { secret, public })
    }

    /// Build a keypair from a 64-character hex private key
    pub fn from_hex(private_key_hex: &str) -> Result<Self> {
        let order = CurveOrder::secp256k1();
        let secret = Scalar::from_hex(private_key_hex, &order)?;
        Self::from_scalar(secret)
    }

    /// The private scalar
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The derived public key
    pub fn public(&self) -> &K256PublicKey {
        &self.public
    }
}
