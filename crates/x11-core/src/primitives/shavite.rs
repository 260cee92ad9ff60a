//! SHAvite-3-512.
//!
//! A 14-round Feistel construction over four 128-bit branches, keyed by a
//! message expansion that mixes in the bit counter at four fixed points.

use super::aes::round_nokey_words;
use super::{le32, Primitive, OUTPUT_LEN};

const BLOCK_LEN: usize = 128;
const ROUNDS: usize = 14;
/// Round-key words: 32 per round, including round 0 which uses the message.
const RK_LEN: usize = 32 * ROUNDS;

const IV: [u32; 16] = [
    0x72FCCDD8, 0x79CA4727, 0x128A077B, 0x40D55AEC, 0xD1901A06, 0x430AE307, 0xB29F5CD1, 0xDF07FBFC,
    0x8E45D73D, 0x681AB538, 0xBDE86578, 0xDD577E47, 0xE275EADE, 0x502D9FCD, 0xB9357178, 0x022A4B9A,
];

/// Counter word order and position for each of the four injections.
const COUNTER_MIX: [(usize, [usize; 4]); 4] = [
    (32, [0, 1, 2, 3]),
    (164, [3, 2, 1, 0]),
    (316, [2, 3, 0, 1]),
    (440, [1, 0, 3, 2]),
];

fn expand_key(msg: &[u8; BLOCK_LEN], count: &[u32; 4]) -> [u32; RK_LEN] {
    let mut rk = [0u32; RK_LEN];
    for (i, w) in rk[..32].iter_mut().enumerate() {
        *w = le32(msg, i);
    }

    let mut u = 32;
    while u < RK_LEN {
        // Nonlinear expansion: one round's worth of keys.
        for _ in 0..8 {
            let mut x = [rk[u - 31], rk[u - 30], rk[u - 29], rk[u - 32]];
            round_nokey_words(&mut x);
            for i in 0..4 {
                rk[u + i] = x[i] ^ rk[u - 4 + i];
            }
            if let Some((_, order)) = COUNTER_MIX.iter().find(|(at, _)| *at == u) {
                rk[u] ^= count[order[0]];
                rk[u + 1] ^= count[order[1]];
                rk[u + 2] ^= count[order[2]];
                rk[u + 3] ^= !count[order[3]];
            }
            u += 4;
        }
        if u == RK_LEN {
            break;
        }
        // Linear expansion.
        for _ in 0..32 {
            rk[u] = rk[u - 32] ^ rk[u - 7];
            u += 1;
        }
    }
    rk
}

/// Round function: four unkeyed AES rounds, each preceded by a round-key XOR.
fn f(r: &[u32; 4], rk: &[u32]) -> [u32; 4] {
    let mut x = *r;
    for keys in rk.chunks_exact(4) {
        for i in 0..4 {
            x[i] ^= keys[i];
        }
        round_nokey_words(&mut x);
    }
    x
}

fn compress(h: &mut [u32; 16], msg: &[u8; BLOCK_LEN], count: &[u32; 4]) {
    let rk = expand_key(msg, count);
    let mut p = [[0u32; 4]; 4];
    for (i, branch) in p.iter_mut().enumerate() {
        branch.copy_from_slice(&h[4 * i..4 * i + 4]);
    }

    for keys in rk.chunks_exact(32) {
        let fl = f(&p[1], &keys[..16]);
        let fr = f(&p[3], &keys[16..]);
        for i in 0..4 {
            p[0][i] ^= fl[i];
            p[2][i] ^= fr[i];
        }
        p.rotate_right(1);
    }

    for (i, branch) in p.iter().enumerate() {
        for j in 0..4 {
            h[4 * i + j] ^= branch[j];
        }
    }
}

/// 128-bit bit counter as four little-endian words.
fn counter_words(bits: u128) -> [u32; 4] {
    [
        bits as u32,
        (bits >> 32) as u32,
        (bits >> 64) as u32,
        (bits >> 96) as u32,
    ]
}

/// SHAvite-3-512 hasher state.
#[derive(Clone)]
pub struct Shavite512 {
    h: [u32; 16],
    buf: [u8; BLOCK_LEN],
    ptr: usize,
    bit_len: u128,
}

impl Default for Shavite512 {
    fn default() -> Self {
        Shavite512 {
            h: IV,
            buf: [0u8; BLOCK_LEN],
            ptr: 0,
            bit_len: 0,
        }
    }
}

impl core::fmt::Debug for Shavite512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Shavite512 { ... }")
    }
}

impl Primitive for Shavite512 {
    const NAME: &'static str = "SHAvite-512";

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.ptr).min(data.len());
            self.buf[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            self.ptr += take;
            data = &data[take..];
            if self.ptr == BLOCK_LEN {
                self.bit_len = self.bit_len.wrapping_add(1024);
                compress(&mut self.h, &self.buf, &counter_words(self.bit_len));
                self.ptr = 0;
            }
        }
    }

    fn finalize_into(mut self, out: &mut [u8; OUTPUT_LEN]) {
        let ptr = self.ptr;
        let total = self.bit_len.wrapping_add((ptr as u128) * 8);
        let mut block = [0u8; BLOCK_LEN];
        block[..ptr].copy_from_slice(&self.buf[..ptr]);
        block[ptr] = 0x80;

        // The block that carries the length field is keyed with a zero
        // counter unless it also carries message bits.
        let mut count = counter_words(total);
        if ptr == 0 {
            count = [0; 4];
        } else if ptr >= 110 {
            compress(&mut self.h, &block, &count);
            block = [0u8; BLOCK_LEN];
            count = [0; 4];
        }

        for (i, w) in counter_words(total).iter().enumerate() {
            block[110 + 4 * i..114 + 4 * i].copy_from_slice(&w.to_le_bytes());
        }
        block[126..].copy_from_slice(&((OUTPUT_LEN as u16) * 8).to_le_bytes());
        compress(&mut self.h, &block, &count);

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
    }
}
