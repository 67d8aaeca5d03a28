//! Scalar-field parameters for supported elliptic curves

/// Size of a scalar for a 256-bit curve in bytes
pub const SCALAR_FIELD_SIZE: usize = 32;

/// The scalar field of a named elliptic curve
///
/// `order` is the number of points in the curve's cyclic group, big-endian.
/// All private-key arithmetic is performed modulo this value.
pub struct ScalarField {
    /// Human-readable curve name
    pub name: &'static str,
    /// Group order n, big-endian
    pub order: [u8; SCALAR_FIELD_SIZE],
}

/// NIST P-256 (secp256r1) scalar field
///
/// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
/// per FIPS 186-4, D.1.2.3.
pub const NIST_P256: ScalarField = ScalarField {
    name: "NIST P-256",
    order: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
};

/// secp256k1 scalar field
///
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
/// per SEC 2 v2.0, 2.4.1.
pub const SECP256K1: ScalarField = ScalarField {
    name: "secp256k1",
    order: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
};
