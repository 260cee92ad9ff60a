//! Error type shared by the chain, the header codec and the display helpers.

use thiserror::Error;

/// Errors surfaced by the X11 core.
///
/// The chain itself has exactly one failure mode, [`X11Error::InvalidInputLength`];
/// the remaining variants belong to the header and hex helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum X11Error {
    /// The buffer holds fewer bytes than the caller declared.
    #[error("invalid input length: declared {declared} bytes, buffer holds {actual}")]
    InvalidInputLength {
        /// Number of bytes the caller asked to hash.
        declared: usize,
        /// Number of bytes actually available.
        actual: usize,
    },
    /// A block header must be exactly 80 bytes.
    #[error("block header must be 80 bytes, got {0}")]
    InvalidHeaderLength(usize),
    /// A display-order hash string was not valid hex.
    #[error("invalid hash hex")]
    InvalidHex,
    /// A decoded hash was not 32 bytes.
    #[error("hash must be 32 bytes, got {0}")]
    InvalidHashLength(usize),
}
