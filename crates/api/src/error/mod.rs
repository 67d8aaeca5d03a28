//! Error handling for key-splitting operations

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for key-splitting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar is malformed: zero where a private key is required, or a
    /// value at or above the curve order. Out-of-range values are rejected
    /// outright, never silently reduced.
    InvalidScalar {
        /// Operation or type that rejected the scalar
        context: &'static str,
        /// Reason why the scalar is invalid
        reason: &'static str,
    },

    /// Length validation error
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Input bytes are not valid in the expected encoding (e.g. non-hex
    /// characters in a scalar string)
    InvalidEncoding {
        /// Context where the decoding failed
        context: &'static str,
        /// Reason why the input could not be decoded
        reason: &'static str,
    },

    /// The secure random source could not supply bytes. Fatal at this
    /// layer; a caller may retry at a higher level.
    InsufficientEntropy {
        /// Operation that drew from the random source
        context: &'static str,
    },

    /// `(share1 + share2) mod n` did not match the original scalar.
    /// Always fatal to the verify flow.
    ReconstructionMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
    },

    /// The scalars matched but the derived public keys did not. Indicates a
    /// defect in the external key-derivation collaborator and is surfaced
    /// distinctly from a normal split/restore failure.
    KeyDerivationMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create an `InvalidScalar` error
    pub fn invalid_scalar(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidScalar { context, reason }
    }
}

/// Result type for key-splitting operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar { context, reason } => {
                write!(f, "Invalid scalar in {}: {}", context, reason)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidEncoding { context, reason } => {
                write!(f, "Invalid encoding in {}: {}", context, reason)
            }
            Error::InsufficientEntropy { context } => {
                write!(f, "Random source failed in {}", context)
            }
            Error::ReconstructionMismatch { context } => {
                write!(f, "Share reconstruction mismatch in {}", context)
            }
            Error::KeyDerivationMismatch { context } => {
                write!(
                    f,
                    "Derived public keys diverged in {} despite matching scalars",
                    context
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
