//! X11 chained proof-of-work hash.
//!
//! This crate provides pure Rust implementations of:
//! - The eleven 512-bit primitives X11 is built from
//! - The stage tables and the two-buffer HashChain that runs them
//! - Block header serialization and hashing
//! - Display-order hex helpers

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod chain;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod stage;

pub use block::BlockHeader;
pub use chain::{ChainTrace, HashChain, DIGEST_LEN, HEADER_LEN};
pub use error::X11Error;
pub use hash::{digest, digest_header, hash_from_display_hex, hash_to_display_hex, reverse_bytes, x11};
pub use primitives::Primitive;
pub use stage::{Algorithm, Slot, Stage};
