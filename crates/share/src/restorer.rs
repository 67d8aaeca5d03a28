//! Restoring a scalar from its shares and verifying the reconstruction

use keysplit_algorithms::{CurveOrder, Scalar};
use keysplit_api::{Error, PointFormat, PointSerialize, PublicKeyDerivation, Result};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Composite outcome of a verification run
///
/// Lets a caller distinguish an arithmetic inconsistency (`scalar_match`
/// false) from a divergence in the external key-derivation collaborator
/// (`scalar_match` true but `public_key_match` false). The serialized
/// public keys are compressed SEC1 encodings and are only populated when
/// the scalar-level check passed, since derivation is skipped otherwise.
#[derive(Clone, Debug)]
pub struct VerificationReport {
    /// Whether `(share1 + share2) mod n` equals the original scalar
    pub scalar_match: bool,
    /// Whether both derived public keys serialize identically
    pub public_key_match: bool,
    /// The restored scalar
    pub restored: Scalar,
    /// Compressed encoding of the public key derived from the original
    pub original_public_key: Option<Vec<u8>>,
    /// Compressed encoding of the public key derived from the restored scalar
    pub restored_public_key: Option<Vec<u8>>,
}

impl VerificationReport {
    /// True when both the scalar-level and public-key-level checks passed
    pub fn is_consistent(&self) -> bool {
        self.scalar_match && self.public_key_match
    }
}

/// Recombines two additive shares and verifies the reconstruction
pub struct ScalarRestorer;

impl ScalarRestorer {
    /// Recombine two shares: `(share1 + share2) mod n`
    ///
    /// Pure modular addition; never fails for valid shares and yields the
    /// same scalar on every call.
    pub fn restore(share1: &Scalar, share2: &Scalar, order: &CurveOrder) -> Scalar {
        share1.add_mod(share2, order)
    }

    /// Restore and report both verification levels without judging them
    ///
    /// The scalar comparison is constant-time. Public keys are derived
    /// only when the scalars match; an unrestorable mismatch therefore
    /// never reaches the derivation collaborator. Fails only if the
    /// collaborator itself rejects a scalar (e.g. a restored zero).
    pub fn check<D: PublicKeyDerivation>(
        original: &Scalar,
        share1: &Scalar,
        share2: &Scalar,
        order: &CurveOrder,
        deriver: &D,
    ) -> Result<VerificationReport> {
        let restored = Self::restore(share1, share2, order);

        if !restored.ct_eq(original) {
            return Ok(VerificationReport {
                scalar_match: false,
                public_key_match: false,
                restored,
                original_public_key: None,
                restored_public_key: None,
            });
        }

        let original_public_key = deriver
            .derive_public_key(&original.to_bytes())?
            .to_bytes(PointFormat::Compressed);
        let restored_public_key = deriver
            .derive_public_key(&restored.to_bytes())?
            .to_bytes(PointFormat::Compressed);
        let public_key_match = original_public_key == restored_public_key;

        Ok(VerificationReport {
            scalar_match: true,
            public_key_match,
            restored,
            original_public_key: Some(original_public_key),
            restored_public_key: Some(restored_public_key),
        })
    }

    /// Restore and enforce both verification levels
    ///
    /// A scalar-level mismatch is fatal and reported as
    /// [`Error::ReconstructionMismatch`]. A public-key divergence despite
    /// matching scalars indicates a defect in the derivation collaborator
    /// and is reported as [`Error::KeyDerivationMismatch`]; it is never
    /// downgraded to a warning.
    pub fn verify<D: PublicKeyDerivation>(
        original: &Scalar,
        share1: &Scalar,
        share2: &Scalar,
        order: &CurveOrder,
        deriver: &D,
    ) -> Result<VerificationReport> {
        let report = Self::check(original, share1, share2, order, deriver)?;

        if !report.scalar_match {
            return Err(Error::ReconstructionMismatch {
                context: "ScalarRestorer::verify",
            });
        }
        if !report.public_key_match {
            return Err(Error::KeyDerivationMismatch {
                context: "ScalarRestorer::verify",
            });
        }

        Ok(report)
    }
}
