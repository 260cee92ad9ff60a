//! CubeHash16/32-512.

use super::{le32, Primitive, OUTPUT_LEN};

/// Rounds per message block.
const ROUNDS: usize = 16;
/// Bytes per message block.
const BLOCK_LEN: usize = 32;

fn round(x: &mut [u32; 32]) {
    for i in 0..16 {
        x[16 + i] = x[16 + i].wrapping_add(x[i]);
    }
    for v in x[..16].iter_mut() {
        *v = v.rotate_left(7);
    }
    for i in 0..8 {
        x.swap(i, i + 8);
    }
    for i in 0..16 {
        x[i] ^= x[16 + i];
    }
    for i in (16..32).filter(|i| i & 2 == 0) {
        x.swap(i, i + 2);
    }
    for i in 0..16 {
        x[16 + i] = x[16 + i].wrapping_add(x[i]);
    }
    for v in x[..16].iter_mut() {
        *v = v.rotate_left(11);
    }
    for i in (0..16).filter(|i| i & 4 == 0) {
        x.swap(i, i + 4);
    }
    for i in 0..16 {
        x[i] ^= x[16 + i];
    }
    for i in (16..32).filter(|i| i & 1 == 0) {
        x.swap(i, i + 1);
    }
}

fn rounds(x: &mut [u32; 32], n: usize) {
    for _ in 0..n {
        round(x);
    }
}

fn absorb(x: &mut [u32; 32], block: &[u8; BLOCK_LEN]) {
    for (i, v) in x[..8].iter_mut().enumerate() {
        *v ^= le32(block, i);
    }
    rounds(x, ROUNDS);
}

/// CubeHash-512 hasher state.
#[derive(Clone)]
pub struct CubeHash512 {
    x: [u32; 32],
    buf: [u8; BLOCK_LEN],
    ptr: usize,
}

impl Default for CubeHash512 {
    fn default() -> Self {
        // IV: (h/8, b, r) in the first three words, then 10r rounds.
        let mut x = [0u32; 32];
        x[0] = (OUTPUT_LEN) as u32;
        x[1] = BLOCK_LEN as u32;
        x[2] = ROUNDS as u32;
        rounds(&mut x, 10 * ROUNDS);
        CubeHash512 {
            x,
            buf: [0u8; BLOCK_LEN],
            ptr: 0,
        }
    }
}

impl core::fmt::Debug for CubeHash512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CubeHash512 { ... }")
    }
}

impl Primitive for CubeHash512 {
    const NAME: &'static str = "CubeHash-512";

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.ptr).min(data.len());
            self.buf[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            self.ptr += take;
            data = &data[take..];
            if self.ptr == BLOCK_LEN {
                absorb(&mut self.x, &self.buf);
                self.ptr = 0;
            }
        }
    }

    fn finalize_into(mut self, out: &mut [u8; OUTPUT_LEN]) {
        let mut block = [0u8; BLOCK_LEN];
        block[..self.ptr].copy_from_slice(&self.buf[..self.ptr]);
        block[self.ptr] = 0x80;
        absorb(&mut self.x, &block);
        self.x[31] ^= 1;
        rounds(&mut self.x, 10 * ROUNDS);

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.x.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::tests::{assert_known_answers, assert_streaming_matches, sample};

    #[test]
    fn test_cubehash512_streaming() {
        for len in [0, 1, 31, 32, 33, 64, 100] {
            assert_streaming_matches::<CubeHash512>(&sample(len));
        }
    }

    #[test]
    fn test_derived_iv_matches_published_table() {
        let state = CubeHash512::default();
        assert_eq!(state.x[0], 0x2AEA2A61);
        assert_eq!(state.x[1], 0x50F494D4);
        assert_eq!(state.x[31], 0xD43E3B44);
    }

    #[test]
    fn test_cubehash512_known_answers() {
        assert_known_answers::<CubeHash512>(&[
            (
                0,
                "4a1d00bbcfcb5a9562fb981e7f7db3350fe2658639d948b9d57452c22328bb32\
                 f468b072208450bad5ee178271408be0b16e5633ac8a1e3cf9864cfbfc8e043a",
            ),
            (
                64,
                "c0111837ee67d11dc27a161d2f8d71dc636a99ccbd307c1d37111daa093a230b\
                 6ba139e56e049a1959b068143c010975b63fb6ef9904e65c36cacc9a640bcd86",
            ),
            (
                80,
                "f20ef065e1be517d04f74425bc464f201ac3a1919238556d0eefb48f616929f5\
                 afaf0c287779f4683a0556d3e615cfe520af902a0dc23822d4d9e52967dbb33e",
            ),
            (
                127,
                "a5a8d9591da4e239c6dbdf83116b6342d34c238da3fbc061766ee60f31ee9232\
                 3e7162f79bbbbd343f189f94250ccb8688fe388ab26d37056ed505462f7b0f83",
            ),
            (
                128,
                "677fe1a7a3de2d3995ad655bd4c560a2c856fbb8da03053b02106e214e8ff174\
                 c706c3b6dbf80fe175bae50105c67d11af8ee16990ec319cf013baed601b5c75",
            ),
            (
                129,
                "0fb97f9dec15aaedfd4cc14a3553bfcaa12738af435ddf0fafd74cee340d7e52\
                 1b3b55fe0bd8721be1acb9994de028dd7fece0305dfd6866d6e012cb2f52b698",
            ),
            (
                1000,
                "59ea77127b084949345412b57fd3b60be5424a585586b5217232e01b9fa10f31\
                 1f25b301446d46693e860ce2126700803361388e40c024ece990bf8bb81a8399",
            ),
        ]);
    }
}
