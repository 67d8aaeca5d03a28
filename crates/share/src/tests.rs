use crate::{KeyShares, ScalarRestorer, ScalarSplitter};
use core::cell::Cell;
use keysplit_algorithms::{CurveOrder, Scalar, SCALAR_SIZE};
use keysplit_api::{Error, PointFormat, PointSerialize, PublicKeyDerivation, Result};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Fake collaborator: "derives" a point by echoing the scalar bytes.
/// Deterministic, and rejects zero like a real backend.
struct MirrorDerivation;

struct MirrorPoint([u8; SCALAR_SIZE]);

impl PointSerialize for MirrorPoint {
    fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        let mut out = Vec::new();
        match format {
            PointFormat::Compressed => {
                out.push(0x02);
                out.extend_from_slice(&self.0);
            }
            PointFormat::Uncompressed => {
                out.push(0x04);
                out.extend_from_slice(&self.0);
                out.extend_from_slice(&self.0);
            }
        }
        out
    }
}

impl PublicKeyDerivation for MirrorDerivation {
    type PublicKey = MirrorPoint;

    fn derive_public_key(&self, scalar_be: &[u8; SCALAR_SIZE]) -> Result<MirrorPoint> {
        if scalar_be.iter().all(|&b| b == 0) {
            return Err(Error::invalid_scalar(
                "MirrorDerivation",
                "scalar is zero or not below the curve order",
            ));
        }
        Ok(MirrorPoint(*scalar_be))
    }
}

/// Defective collaborator: produces a different point on every call,
/// violating the determinism the verify flow relies on.
struct FlakyDerivation {
    calls: Cell<u8>,
}

impl FlakyDerivation {
    fn new() -> Self {
        FlakyDerivation {
            calls: Cell::new(0),
        }
    }
}

impl PublicKeyDerivation for FlakyDerivation {
    type PublicKey = MirrorPoint;

    fn derive_public_key(&self, scalar_be: &[u8; SCALAR_SIZE]) -> Result<MirrorPoint> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        let mut bytes = *scalar_be;
        bytes[0] ^= call;
        Ok(MirrorPoint(bytes))
    }
}

/// Serves scripted 32-byte blocks, one per fill request.
struct SequenceRng {
    blocks: Vec<[u8; SCALAR_SIZE]>,
    next: usize,
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        if self.next >= self.blocks.len() {
            return Err(rand::Error::new("scripted sequence exhausted"));
        }
        dest.copy_from_slice(&self.blocks[self.next]);
        self.next += 1;
        Ok(())
    }
}

impl CryptoRng for SequenceRng {}

/// A random source that never produces bytes.
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!()
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!()
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!()
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for FailingRng {}

fn scalar_from_u64(v: u64, order: &CurveOrder) -> Scalar {
    let mut bytes = [0u8; SCALAR_SIZE];
    bytes[SCALAR_SIZE - 8..].copy_from_slice(&v.to_be_bytes());
    Scalar::from_bytes(bytes, order).unwrap()
}

fn split_fixture(order: &CurveOrder) -> (Scalar, KeyShares) {
    let original = Scalar::from_hex(
        "2f4b6e8c5d9a3f7b1e0d8c9a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6c",
        order,
    )
    .unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let shares = ScalarSplitter::split(&original, order, &mut rng).unwrap();
    (original, shares)
}

#[test]
fn split_then_restore_round_trips() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    let restored = ScalarRestorer::restore(shares.share1(), shares.share2(), &order);
    assert!(restored.ct_eq(&original));
}

#[test]
fn split_rejects_zero_private_key() {
    let order = CurveOrder::nist_p256();
    let zero = Scalar::from_bytes([0u8; SCALAR_SIZE], &order).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let result = ScalarSplitter::split(&zero, &order, &mut rng);
    assert!(matches!(result, Err(Error::InvalidScalar { .. })));
}

#[test]
fn split_works_at_the_range_boundaries() {
    let order = CurveOrder::nist_p256();
    let mut rng = ChaCha20Rng::seed_from_u64(11);

    let one = scalar_from_u64(1, &order);
    let shares = ScalarSplitter::split(&one, &order, &mut rng).unwrap();
    assert!(ScalarRestorer::restore(shares.share1(), shares.share2(), &order).ct_eq(&one));

    let max = Scalar::from_hex(
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550",
        &order,
    )
    .unwrap(); // n-1
    let shares = ScalarSplitter::split(&max, &order, &mut rng).unwrap();
    assert!(ScalarRestorer::restore(shares.share1(), shares.share2(), &order).ct_eq(&max));
}

#[test]
fn split_share1_is_never_trivial() {
    let order = CurveOrder::nist_p256();
    let original = scalar_from_u64(0x0123_4567_89AB_CDEF, &order);
    let mut rng = ChaCha20Rng::seed_from_u64(13);

    for _ in 0..32 {
        let shares = ScalarSplitter::split(&original, &order, &mut rng).unwrap();
        assert!(!shares.share1().is_zero());
    }
}

#[test]
fn split_computes_the_exact_modular_complement() {
    let order = CurveOrder::nist_p256();
    let original = scalar_from_u64(5, &order);

    // Script share1 = 9; the complement must wrap: (5 - 9) mod n = n - 4
    let mut share1_bytes = [0u8; SCALAR_SIZE];
    share1_bytes[SCALAR_SIZE - 1] = 9;
    let mut rng = SequenceRng {
        blocks: vec![share1_bytes],
        next: 0,
    };

    let shares = ScalarSplitter::split(&original, &order, &mut rng).unwrap();
    assert_eq!(shares.share1().to_bytes(), share1_bytes);

    // n - 4 for the P-256 order
    assert_eq!(
        shares.share2().to_hex(),
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc63254d"
    );
    assert!(ScalarRestorer::restore(shares.share1(), shares.share2(), &order).ct_eq(&original));
}

#[test]
fn split_surfaces_entropy_failure() {
    let order = CurveOrder::nist_p256();
    let original = scalar_from_u64(42, &order);

    let result = ScalarSplitter::split(&original, &order, &mut FailingRng);
    assert!(matches!(result, Err(Error::InsufficientEntropy { .. })));
}

#[test]
fn restore_is_idempotent() {
    let order = CurveOrder::nist_p256();
    let (_, shares) = split_fixture(&order);

    let first = ScalarRestorer::restore(shares.share1(), shares.share2(), &order);
    let second = ScalarRestorer::restore(shares.share1(), shares.share2(), &order);
    assert_eq!(first.to_bytes(), second.to_bytes());
}

#[test]
fn shares_summing_to_the_order_restore_to_zero() {
    let order = CurveOrder::nist_p256();
    let one = scalar_from_u64(1, &order);
    let n_minus_one = Scalar::from_hex(
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550",
        &order,
    )
    .unwrap();

    let restored = ScalarRestorer::restore(&one, &n_minus_one, &order);
    assert!(restored.is_zero());

    // A restored zero is not a usable private key; derivation must refuse it
    let result = MirrorDerivation.derive_public_key(&restored.to_bytes());
    assert!(matches!(result, Err(Error::InvalidScalar { .. })));
}

#[test]
fn check_reports_the_composite_outcome() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    let report = ScalarRestorer::check(
        &original,
        shares.share1(),
        shares.share2(),
        &order,
        &MirrorDerivation,
    )
    .unwrap();

    assert!(report.scalar_match);
    assert!(report.public_key_match);
    assert!(report.is_consistent());
    assert!(report.restored.ct_eq(&original));
    assert_eq!(report.original_public_key, report.restored_public_key);
    assert!(report.original_public_key.is_some());
}

#[test]
fn check_does_not_derive_keys_on_scalar_mismatch() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    // Perturb share2; the reconstruction can no longer match
    let corrupted = shares.share2().add_mod(&scalar_from_u64(1, &order), &order);

    let report =
        ScalarRestorer::check(&original, shares.share1(), &corrupted, &order, &MirrorDerivation)
            .unwrap();

    assert!(!report.scalar_match);
    assert!(!report.public_key_match);
    assert!(report.original_public_key.is_none());
    assert!(report.restored_public_key.is_none());
}

#[test]
fn verify_succeeds_for_a_faithful_split() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    let report = ScalarRestorer::verify(
        &original,
        shares.share1(),
        shares.share2(),
        &order,
        &MirrorDerivation,
    )
    .unwrap();
    assert!(report.is_consistent());
}

#[test]
fn verify_flags_reconstruction_mismatch() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    let corrupted = shares.share2().add_mod(&scalar_from_u64(1, &order), &order);

    let result = ScalarRestorer::verify(
        &original,
        shares.share1(),
        &corrupted,
        &order,
        &MirrorDerivation,
    );
    assert!(matches!(
        result,
        Err(Error::ReconstructionMismatch { .. })
    ));
}

#[test]
fn verify_flags_a_defective_deriver() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    // Scalars match, but the collaborator derives inconsistently
    let result = ScalarRestorer::verify(
        &original,
        shares.share1(),
        shares.share2(),
        &order,
        &FlakyDerivation::new(),
    );
    assert!(matches!(result, Err(Error::KeyDerivationMismatch { .. })));
}

#[test]
fn verify_with_the_p256_backend() {
    use keysplit_keys::P256KeyDerivation;

    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    let report = ScalarRestorer::verify(
        &original,
        shares.share1(),
        shares.share2(),
        &order,
        &P256KeyDerivation,
    )
    .unwrap();

    assert!(report.is_consistent());
    // Compressed SEC1: one tag byte plus the x-coordinate
    assert_eq!(report.original_public_key.unwrap().len(), 33);
}

#[test]
fn shares_survive_the_hex_boundary() {
    let order = CurveOrder::nist_p256();
    let (original, shares) = split_fixture(&order);

    // Persist both shares as hex and reload them, as a caller would
    let share1 = Scalar::from_hex(&shares.share1().to_hex(), &order).unwrap();
    let share2 = Scalar::from_hex(&shares.share2().to_hex(), &order).unwrap();

    let restored = ScalarRestorer::restore(&share1, &share2, &order);
    assert!(restored.ct_eq(&original));
}
