//! ECHO-512: AES rounds applied to a 4x4 matrix of 128-bit words.

use super::aes::{mix_column, round, round_nokey};
use super::{Primitive, OUTPUT_LEN};

const BLOCK_LEN: usize = 128;
const ROUNDS: usize = 10;

type Word = [u8; 16];

fn compress(v: &mut [Word; 8], msg: &[u8; BLOCK_LEN], counter: u128) {
    let mut w = [[0u8; 16]; 16];
    w[..8].copy_from_slice(v);
    for (word, chunk) in w[8..].iter_mut().zip(msg.chunks_exact(16)) {
        word.copy_from_slice(chunk);
    }

    let mut k = counter;
    for _ in 0..ROUNDS {
        // BIG.SubWords: two AES rounds per word, the first keyed by the counter.
        for word in w.iter_mut() {
            round(word, &k.to_le_bytes());
            round_nokey(word);
            k = k.wrapping_add(1);
        }

        // BIG.ShiftRows over word positions `row + 4 * column`.
        let old = w;
        for r in 1..4 {
            for c in 0..4 {
                w[r + 4 * c] = old[r + 4 * ((c + r) % 4)];
            }
        }

        // BIG.MixColumns, byte-sliced.
        for c in 0..4 {
            for b in 0..16 {
                let col = mix_column(w[4 * c][b], w[4 * c + 1][b], w[4 * c + 2][b], w[4 * c + 3][b]);
                for (r, &x) in col.iter().enumerate() {
                    w[4 * c + r][b] = x;
                }
            }
        }
    }

    for (i, word) in v.iter_mut().enumerate() {
        for b in 0..16 {
            word[b] ^= msg[16 * i + b] ^ w[i][b] ^ w[i + 8][b];
        }
    }
}

/// ECHO-512 hasher state.
#[derive(Clone)]
pub struct Echo512 {
    v: [Word; 8],
    buf: [u8; BLOCK_LEN],
    ptr: usize,
    /// Message bits absorbed so far.
    counter: u128,
}

impl Default for Echo512 {
    fn default() -> Self {
        let iv = ((OUTPUT_LEN * 8) as u128).to_le_bytes();
        Echo512 {
            v: [iv; 8],
            buf: [0u8; BLOCK_LEN],
            ptr: 0,
            counter: 0,
        }
    }
}

impl core::fmt::Debug for Echo512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Echo512 { ... }")
    }
}

impl Primitive for Echo512 {
    const NAME: &'static str = "ECHO-512";

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.ptr).min(data.len());
            self.buf[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            self.ptr += take;
            data = &data[take..];
            if self.ptr == BLOCK_LEN {
                self.counter = self.counter.wrapping_add(1024);
                compress(&mut self.v, &self.buf, self.counter);
                self.ptr = 0;
            }
        }
    }

    fn finalize_into(mut self, out: &mut [u8; OUTPUT_LEN]) {
        let ptr = self.ptr;
        let total = self.counter.wrapping_add((ptr as u128) * 8);
        // A final block without message bits is processed with counter 0.
        let mut k = if ptr == 0 { 0 } else { total };

        let mut block = [0u8; BLOCK_LEN];
        block[..ptr].copy_from_slice(&self.buf[..ptr]);
        block[ptr] = 0x80;
        if ptr + 1 > BLOCK_LEN - 18 {
            compress(&mut self.v, &block, k);
            block = [0u8; BLOCK_LEN];
            k = 0;
        }
        block[BLOCK_LEN - 18..BLOCK_LEN - 16].copy_from_slice(&((OUTPUT_LEN * 8) as u16).to_le_bytes());
        block[BLOCK_LEN - 16..].copy_from_slice(&total.to_le_bytes());
        compress(&mut self.v, &block, k);

        for (chunk, word) in out.chunks_exact_mut(16).zip(self.v.iter()) {
            chunk.copy_from_slice(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::tests::{assert_known_answers, assert_streaming_matches, sample};

    #[test]
    fn test_echo512_iv() {
        let state = Echo512::default();
        let mut expected = [0u8; 16];
        expected[..2].copy_from_slice(&512u16.to_le_bytes());
        assert!(state.v.iter().all(|w| *w == expected));
    }

    #[test]
    fn test_echo512_streaming() {
        for len in [0, 1, 80, 109, 110, 127, 128, 129, 300] {
            assert_streaming_matches::<Echo512>(&sample(len));
        }
    }

    #[test]
    fn test_compress_depends_on_counter() {
        let msg = [0u8; BLOCK_LEN];
        let mut a = Echo512::default().v;
        let mut b = a;
        compress(&mut a, &msg, 0);
        compress(&mut b, &msg, 1024);
        assert_ne!(a, b);
    }

    #[test]
    fn test_echo512_known_answers() {
        assert_known_answers::<Echo512>(&[
            (
                0,
                "158f58cc79d300a9aa292515049275d051a28ab931726d0ec44bdd9faef4a702\
                 c36db9e7922fff077402236465833c5cc76af4efc352b4b44c7fa15aa0ef234e",
            ),
            (
                64,
                "0dfe7c6691b468b40ddc9034ecc75bf498206bb4119925dd527c29bef56bf73b\
                 f5a11cede98fbdbfec0d3e5fa9d4267b5a2e736bfce7bc6a43b4729e954e97a4",
            ),
            (
                80,
                "68fb38d1dc0c6ac21e580611464aec42718d832a7a348874c42ef3af83939b6f\
                 a6d479f5cd2c1b814b11c745506bd6e1d51db801d8019356531d9b09d2c30baf",
            ),
            (
                127,
                "92da28c4ed9f588f26b292eaca144969253df1458b82eaea650b3433239b11ff\
                 f58701775ca6d6d29bb8671cb58d4d845f3f091c9f1698fdf692a6b85c21a9f8",
            ),
            (
                128,
                "0c1d6abfcd128a3d83fbc810ab8c8c3bd222e0c3fc712604c913b7f06a76b9af\
                 bd7f9d3ce8f7be9a36acb48e9049e6a1eca68e4ee1a359760e77730b1118b382",
            ),
            (
                129,
                "58339b90d0b1cda5a428ab7e7c640c90561eefb8e373d66b681a6860657f09d9\
                 d19cd35158ba53b9910d33126ca88000e0fa7f542ed2cd98252f8ea2d5a3618b",
            ),
            (
                1000,
                "f1a07835b234b257a3a32638292b18c27be0093c670fdf1b8966a8058d214f6f\
                 56813655fba13bee0dfd36a1f991e0ca27e614899fb941f1f35e24f3e1ac0abd",
            ),
        ]);
    }
}
