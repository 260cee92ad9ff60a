//! A single AES encryption round, shared by ECHO and SHAvite-3.
//!
//! State bytes are in FIPS-197 order: byte `4 * c + r` is row `r` of column `c`.
//! Neither caller needs a key schedule, only the round function.

const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    p
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        // x^254 is the multiplicative inverse, with 0 mapping to 0.
        let mut inv = 1u8;
        let mut base = x as u8;
        let mut e = 254u32;
        while e > 0 {
            if e & 1 != 0 {
                inv = gf_mul(inv, base);
            }
            base = gf_mul(base, base);
            e >>= 1;
        }
        sbox[x] = inv
            ^ inv.rotate_left(1)
            ^ inv.rotate_left(2)
            ^ inv.rotate_left(3)
            ^ inv.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    sbox
}

static SBOX: [u8; 256] = build_sbox();

/// Multiplication by 2 in GF(2^8).
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * 0x1b)
}

/// AES MixColumns on one column.
#[inline(always)]
pub(crate) fn mix_column(a0: u8, a1: u8, a2: u8, a3: u8) -> [u8; 4] {
    let (d0, d1, d2, d3) = (xtime(a0), xtime(a1), xtime(a2), xtime(a3));
    [
        d0 ^ d1 ^ a1 ^ a2 ^ a3,
        a0 ^ d1 ^ d2 ^ a2 ^ a3,
        a0 ^ a1 ^ d2 ^ d3 ^ a3,
        d0 ^ a0 ^ a1 ^ a2 ^ d3,
    ]
}

/// SubBytes, ShiftRows, MixColumns, then AddRoundKey with `key`.
#[inline]
pub(crate) fn round(state: &mut [u8; 16], key: &[u8; 16]) {
    let mut t = [0u8; 16];
    for c in 0..4 {
        for r in 0..4 {
            t[4 * c + r] = SBOX[state[4 * ((c + r) % 4) + r] as usize];
        }
    }
    for c in 0..4 {
        let col = mix_column(t[4 * c], t[4 * c + 1], t[4 * c + 2], t[4 * c + 3]);
        for r in 0..4 {
            state[4 * c + r] = col[r] ^ key[4 * c + r];
        }
    }
}

/// An AES round with an all-zero round key.
#[inline]
pub(crate) fn round_nokey(state: &mut [u8; 16]) {
    round(state, &[0u8; 16]);
}

/// An unkeyed AES round over four little-endian column words.
#[inline]
pub(crate) fn round_nokey_words(x: &mut [u32; 4]) {
    let mut bytes = [0u8; 16];
    for (chunk, w) in bytes.chunks_exact_mut(4).zip(x.iter()) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
    round_nokey(&mut bytes);
    for (w, chunk) in x.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox_known_entries() {
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x01], 0x7c);
        assert_eq!(SBOX[0x53], 0xed);
        assert_eq!(SBOX[0xff], 0x16);
    }

    #[test]
    fn test_sbox_is_permutation() {
        let mut seen = [false; 256];
        for &s in SBOX.iter() {
            assert!(!seen[s as usize]);
            seen[s as usize] = true;
        }
    }

    #[test]
    fn test_round_fips197_round_one() {
        // FIPS-197 appendix B: start of round 1 -> start of round 2.
        let mut state: [u8; 16] = hex::decode("193de3bea0f4e22b9ac68d2ae9f84808")
            .unwrap()
            .try_into()
            .unwrap();
        let key: [u8; 16] = hex::decode("a0fafe1788542cb123a339392a6c7605")
            .unwrap()
            .try_into()
            .unwrap();
        round(&mut state, &key);
        assert_eq!(hex::encode(state), "a49c7ff2689f352b6b5bea43026a5049");
    }

    #[test]
    fn test_word_round_matches_byte_round() {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37);
        }
        let mut words = [0u32; 4];
        for (i, w) in words.iter_mut().enumerate() {
            *w = u32::from_le_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]]);
        }
        round_nokey(&mut bytes);
        round_nokey_words(&mut words);
        for i in 0..4 {
            assert_eq!(words[i].to_le_bytes(), bytes[4 * i..4 * i + 4]);
        }
    }
}
