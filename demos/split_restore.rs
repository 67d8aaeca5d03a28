//! End-to-end demo: split a P-256 private key into two shares, restore it,
//! and verify the reconstruction against the derived public keys.
//!
//! Run with: `cargo run --example split_restore`

use keysplit::prelude::*;
use rand::rngs::OsRng;

fn main() -> Result<()> {
    let order = CurveOrder::nist_p256();

    // A 32-byte private key as 64 hex characters
    let private_key_hex = "2f4b6e8c5d9a3f7b1e0d8c9a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6c";
    let original = Scalar::from_hex(private_key_hex, &order)?;
    println!("curve:                 {}", order.name());
    println!("original private key:  {}", private_key_hex);

    // Split: share1 is uniformly random, share2 its modular complement
    let shares = ScalarSplitter::split(&original, &order, &mut OsRng)?;
    println!("share A1 (random):     {}", shares.share1().to_hex());
    println!("share A2 (computed):   {}", shares.share2().to_hex());

    // Restore and verify on both the scalar and public-key level
    let report = ScalarRestorer::verify(
        &original,
        shares.share1(),
        shares.share2(),
        &order,
        &P256KeyDerivation,
    )?;
    println!("restored private key:  {}", report.restored.to_hex());
    println!("scalar match:          {}", report.scalar_match);
    println!("public key match:      {}", report.public_key_match);

    if let Some(public_key) = &report.original_public_key {
        println!("compressed public key: {}", hex::encode(public_key));
    }

    // The same keypair, derived directly from the private key
    let pair = P256KeyPair::from_hex(private_key_hex)?;
    println!(
        "uncompressed:          {}",
        hex::encode(pair.public().to_bytes(PointFormat::Uncompressed))
    );

    Ok(())
}
