//! Splitting a private scalar into two additive shares

use keysplit_algorithms::{CurveOrder, Scalar};
use keysplit_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The two additive shares produced by a split
///
/// `share1` is uniformly random in `[1, n-1]`; `share2` is its modular
/// complement in `[0, n-1]` and carries no entropy of its own. Both are
/// exactly as sensitive as the key they reconstruct and zeroize on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyShares {
    share1: Scalar,
    share2: Scalar,
}

impl KeyShares {
    /// The independently random share
    pub fn share1(&self) -> &Scalar {
        &self.share1
    }

    /// The computed complement share
    pub fn share2(&self) -> &Scalar {
        &self.share2
    }
}

/// Splits one private scalar into two additive shares modulo a curve order
pub struct ScalarSplitter;

impl ScalarSplitter {
    /// Split `original` into shares satisfying
    /// `(share1 + share2) mod n == original`
    ///
    /// `share1` is sampled by rejection from `[1, n-1]`, so it is never
    /// zero and never reduced into range. `original` must be a valid
    /// private key: the `Scalar` type already guarantees it is below the
    /// order, and zero is rejected here.
    pub fn split<R: CryptoRng + RngCore>(
        original: &Scalar,
        order: &CurveOrder,
        rng: &mut R,
    ) -> Result<KeyShares> {
        if original.is_zero() {
            return Err(Error::invalid_scalar(
                "ScalarSplitter::split",
                "zero is not a valid private key",
            ));
        }

        let share1 = Scalar::random(order, rng)?;
        let share2 = original.sub_mod(&share1, order);

        Ok(KeyShares { share1, share2 })
    }
}
