//! 80-byte block header serialization and its X11 proof-of-work hash.

use crate::chain::{DIGEST_LEN, HEADER_LEN};
use crate::error::X11Error;
use crate::hash::digest_header;

/// A block header (80 bytes on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version.
    pub version: i32,
    /// Hash of the previous block (internal byte order).
    pub prev_block_hash: [u8; 32],
    /// Merkle root of all transactions (internal byte order).
    pub merkle_root: [u8; 32],
    /// Block timestamp (Unix time).
    pub timestamp: u32,
    /// Difficulty target in compact "bits" format.
    pub bits: u32,
    /// Nonce for proof of work.
    pub nonce: u32,
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn hash32(bytes: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes[..32]);
    hash
}

impl BlockHeader {
    /// Serialize the block header to 80 bytes.
    pub fn serialize(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[..76].copy_from_slice(&self.serialize_without_nonce());
        header[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        header
    }

    /// Serialize the header without the nonce (76 bytes).
    pub fn serialize_without_nonce(&self) -> [u8; 76] {
        let mut header = [0u8; 76];

        header[0..4].copy_from_slice(&self.version.to_le_bytes());
        header[4..36].copy_from_slice(&self.prev_block_hash);
        header[36..68].copy_from_slice(&self.merkle_root);
        header[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        header[72..76].copy_from_slice(&self.bits.to_le_bytes());

        header
    }

    /// Parse a serialized header. Anything but exactly 80 bytes is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, X11Error> {
        if bytes.len() != HEADER_LEN {
            return Err(X11Error::InvalidHeaderLength(bytes.len()));
        }
        Ok(BlockHeader {
            version: le_u32(&bytes[0..4]) as i32,
            prev_block_hash: hash32(&bytes[4..36]),
            merkle_root: hash32(&bytes[36..68]),
            timestamp: le_u32(&bytes[68..72]),
            bits: le_u32(&bytes[72..76]),
            nonce: le_u32(&bytes[76..80]),
        })
    }

    /// A copy of this header with a different nonce.
    pub fn with_nonce(&self, nonce: u32) -> Self {
        BlockHeader {
            nonce,
            ..self.clone()
        }
    }

    /// The block hash: X11 of the serialized header, internal byte order.
    pub fn hash(&self) -> [u8; DIGEST_LEN] {
        digest_header(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hash_from_display_hex, hash_to_display_hex};

    fn genesis() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: [0u8; 32],
            merkle_root: hash_from_display_hex(
                "e0028eb9648db56b1ac77cf090b99048a8007e2bb64b68f092c03c7f56a662c7",
            )
            .unwrap(),
            timestamp: 1390095618,
            bits: 0x1e0ffff0,
            nonce: 28917698,
        }
    }

    #[test]
    fn test_block_header_serialization() {
        let header = BlockHeader {
            version: 0x20000000,
            prev_block_hash: [0x12u8; 32],
            merkle_root: [0x34u8; 32],
            timestamp: 1700000000,
            bits: 0x17034219,
            nonce: 0xDEADBEEF,
        };

        let serialized = header.serialize();

        // Version (0x20000000 in little-endian)
        assert_eq!(&serialized[0..4], &[0x00, 0x00, 0x00, 0x20]);
        assert_eq!(&serialized[4..36], &[0x12u8; 32][..]);
        assert_eq!(&serialized[36..68], &[0x34u8; 32][..]);
        // Nonce (0xDEADBEEF in little-endian)
        assert_eq!(&serialized[76..80], &[0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(&serialized[..76], &header.serialize_without_nonce()[..]);
    }

    #[test]
    fn test_from_bytes_inverts_serialize() {
        let header = genesis();
        assert_eq!(BlockHeader::from_bytes(&header.serialize()), Ok(header));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert_eq!(BlockHeader::from_bytes(&[0u8; 79]), Err(X11Error::InvalidHeaderLength(79)));
        assert_eq!(BlockHeader::from_bytes(&[0u8; 81]), Err(X11Error::InvalidHeaderLength(81)));
    }

    #[test]
    fn test_with_nonce_changes_hash() {
        let header = genesis();
        let other = header.with_nonce(header.nonce + 1);
        assert_eq!(other.merkle_root, header.merkle_root);
        assert_ne!(other.hash(), header.hash());
    }

    #[test]
    fn test_genesis_hash() {
        assert_eq!(
            hash_to_display_hex(&genesis().hash()),
            "00000ffd590b1485b3caadc19b22e6379c733355108f107a430458cdf3407ab6"
        );
    }
}
