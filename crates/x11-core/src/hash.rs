//! X11 entry points and the byte-order helpers used to display hashes.

use crate::chain::{HashChain, DIGEST_LEN, HEADER_LEN};
use crate::error::X11Error;

/// X11 over the whole of `data`.
#[inline]
pub fn x11(data: &[u8]) -> [u8; DIGEST_LEN] {
    HashChain::X11.digest_message(data)
}

/// X11 with an optional declared length.
///
/// `Some(n)` hashes the first `n` bytes of `input`; `None` hashes a fixed
/// 80-byte header. Fails with [`X11Error::InvalidInputLength`] when `input`
/// is shorter than that.
pub fn digest(input: &[u8], input_len: Option<usize>) -> Result<[u8; DIGEST_LEN], X11Error> {
    HashChain::for_length(input_len).digest(input, input_len)
}

/// X11 of a serialized block header.
#[inline]
pub fn digest_header(header: &[u8; HEADER_LEN]) -> [u8; DIGEST_LEN] {
    x11(header)
}

/// Reverse the byte order of a 32-byte hash.
///
/// Hashes are stored little-endian but displayed most significant byte first.
#[inline]
pub fn reverse_bytes(bytes: &[u8; 32]) -> [u8; 32] {
    let mut reversed = *bytes;
    reversed.reverse();
    reversed
}

/// Convert a hash to its display format (reversed hex).
pub fn hash_to_display_hex(hash: &[u8; 32]) -> alloc::string::String {
    hex::encode(reverse_bytes(hash))
}

/// Parse a display-format hash back into internal byte order.
pub fn hash_from_display_hex(display: &str) -> Result<[u8; 32], X11Error> {
    let bytes = hex::decode(display).map_err(|_| X11Error::InvalidHex)?;
    let hash: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| X11Error::InvalidHashLength(bytes.len()))?;
    Ok(reverse_bytes(&hash))
}
