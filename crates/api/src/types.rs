//! Common types used throughout the keysplit workspace

/// Serialized form of an elliptic curve public point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 (parity of y) || x
    Compressed,
}
