//! The eleven 512-bit hash primitives.
//!
//! Every primitive is reached through [`Primitive`], the three-call lifecycle the
//! chain relies on: `Default::default()` initializes, [`Primitive::update`]
//! absorbs, [`Primitive::finalize_into`] writes the 64-byte digest.
//!
//! BLAKE, BMW, Groestl, Skein, JH and Keccak come from registry crates. The
//! other five live here, each matching sphlib 3.0 bit for bit. `cubehash` on
//! crates.io needs `std`, so CubeHash is among them.

use digest::consts::U64;

mod aes;
pub mod cubehash;
pub mod echo;
pub mod luffa;
pub mod shavite;
pub mod simd;

pub use cubehash::CubeHash512;
pub use echo::Echo512;
pub use luffa::Luffa512;
pub use shavite::Shavite512;
pub use simd::Simd512;

/// Output width of every primitive, in bytes.
pub const OUTPUT_LEN: usize = 64;

/// A 512-bit hash primitive with an init/update/finalize lifecycle.
pub trait Primitive: Default {
    /// Human-readable algorithm name.
    const NAME: &'static str;

    /// Absorb more input. Split calls are equivalent to one call over the
    /// concatenation.
    fn update(&mut self, data: &[u8]);

    /// Finish the computation and write all 64 output bytes.
    fn finalize_into(self, out: &mut [u8; OUTPUT_LEN]);

    /// One-shot digest of `data`.
    #[inline]
    fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
        let mut state = Self::default();
        state.update(data);
        let mut out = [0u8; OUTPUT_LEN];
        state.finalize_into(&mut out);
        out
    }
}

macro_rules! rustcrypto_primitive {
    ($(#[$doc:meta])* $name:ident, $inner:ty, $label:literal) => {
        rustcrypto_primitive!($(#[$doc])* $name, $inner, $label, digest::Digest);
    };
    ($(#[$doc:meta])* $name:ident, $inner:ty, $label:literal, $api:path) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name($inner);

        impl Primitive for $name {
            const NAME: &'static str = $label;

            #[inline]
            fn update(&mut self, data: &[u8]) {
                <$inner as $api>::update(&mut self.0, data);
            }

            #[inline]
            fn finalize_into(self, out: &mut [u8; OUTPUT_LEN]) {
                out.copy_from_slice(&<$inner as $api>::finalize(self.0));
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }
    };
}

rustcrypto_primitive!(
    /// BLAKE-512, backed by `blake-hash`, which still speaks `digest` 0.9.
    Blake512,
    blake_hash::Blake512,
    "BLAKE-512",
    digest09::Digest
);

rustcrypto_primitive!(
    /// BMW-512, backed by the `bmw-hash` crate.
    Bmw512,
    bmw_hash::Bmw512,
    "BMW-512"
);

rustcrypto_primitive!(
    /// Groestl-512, backed by the `groestl` crate.
    Groestl512,
    groestl::Groestl512,
    "Groestl-512"
);

rustcrypto_primitive!(
    /// Skein-512-512, backed by the `skein` crate.
    Skein512,
    skein::Skein512<U64>,
    "Skein-512"
);

rustcrypto_primitive!(
    /// JH-512, backed by the `jh` crate.
    Jh512,
    jh::Jh512,
    "JH-512"
);

rustcrypto_primitive!(
    /// Keccak-512 with the original (pre-FIPS 202) padding, backed by `sha3`.
    Keccak512,
    sha3::Keccak512,
    "Keccak-512"
);

/// Read the `i`-th little-endian 32-bit word of `bytes`.
#[inline(always)]
pub(crate) fn le32(bytes: &[u8], i: usize) -> u32 {
    u32::from_le_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
}

/// Read the `i`-th big-endian 32-bit word of `bytes`.
#[inline(always)]
pub(crate) fn be32(bytes: &[u8], i: usize) -> u32 {
    u32::from_be_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
}
