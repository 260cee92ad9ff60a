//! SIMD-512.
//!
//! Message expansion is a number-theoretic transform over Z/257 of the
//! 128-byte block, evaluated at the powers of 41. The expanded words then
//! drive four parallel Feistel-like lanes for 32 steps.

use super::{le32, Primitive, OUTPUT_LEN};

const BLOCK_LEN: usize = 128;
const P: i32 = 257;
/// Primitive 256th root of unity mod 257.
const ALPHA: i32 = 41;
/// `ALPHA^-1 mod 257`.
const ALPHA_INV: i32 = 163;

const IV: [u32; 32] = [
    0x0BA16B95, 0x72F999AD, 0x9FECC2AE, 0xBA3264FC, 0x5E894929, 0x8E9F30E5, 0x2F1DAA37, 0xF0F2C558,
    0xAC506643, 0xA90635A5, 0xE25B878B, 0xAAB7878F, 0x88817F7A, 0x0A02892B, 0x559A7550, 0x598F657E,
    0x7EEF60A1, 0x6B70E3E8, 0x9C1714D1, 0xB958E2A8, 0xAB02675E, 0xED1C014F, 0xCD8D65BB, 0xFDB7A257,
    0x09254899, 0xD699C7BC, 0x9019B6DC, 0x2B9022E4, 0x8FA14956, 0x21BF9BD3, 0xB94D0943, 0x6FFDDC22,
];

/// Expanded-word selection per round: the eight `q` sub-blocks, the two
/// index offsets and the multiplier.
const EXPANSION: [([usize; 8], isize, isize, i32); 4] = [
    ([4, 6, 0, 2, 7, 5, 3, 1], 0, 1, 185),
    ([15, 11, 12, 8, 9, 13, 10, 14], 0, 1, 185),
    ([17, 18, 23, 20, 22, 21, 16, 19], -256, -128, 233),
    ([30, 24, 25, 31, 27, 29, 28, 26], -383, -255, 233),
];

/// Rotation amounts for each round.
const ROTATIONS: [[u32; 4]; 4] = [[3, 23, 17, 27], [28, 19, 22, 7], [29, 9, 15, 5], [4, 13, 10, 25]];

/// Lane permutations, as an XOR mask on the lane index.
const PP8: [usize; 7] = [1, 6, 2, 3, 5, 7, 4];

const fn pow_mod(base: i32, exp: usize) -> i32 {
    let mut r = 1i32;
    let mut b = base % P;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            r = r * b % P;
        }
        b = b * b % P;
        e >>= 1;
    }
    r
}

const fn build_powers() -> [i32; 256] {
    let mut t = [0i32; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = pow_mod(ALPHA, i);
        i += 1;
    }
    t
}

/// Offsets added after the transform. The final block uses a second term
/// so that it cannot collide with an ordinary block.
const fn build_offsets(last: bool) -> [i32; 256] {
    let mut t = [0i32; 256];
    let mut i = 0;
    while i < 256 {
        let mut v = pow_mod(ALPHA_INV, i);
        if last {
            v = (v + pow_mod(ALPHA_INV, 3 * i)) % P;
        }
        t[i] = v;
        i += 1;
    }
    t
}

static POWERS: [i32; 256] = build_powers();
static OFFSETS_NORMAL: [i32; 256] = build_offsets(false);
static OFFSETS_FINAL: [i32; 256] = build_offsets(true);

/// The 256-point transform of the block, lifted to `[-128, 128]`.
fn expand(block: &[u8; BLOCK_LEN], last: bool) -> [i32; 256] {
    let offsets = if last { &OFFSETS_FINAL } else { &OFFSETS_NORMAL };
    let mut q = [0i32; 256];
    for (i, qi) in q.iter_mut().enumerate() {
        let mut acc = 0i32;
        for (j, &x) in block.iter().enumerate() {
            acc = (acc + x as i32 * POWERS[(i * j) % 256]) % P;
        }
        let v = (acc + offsets[i]) % P;
        *qi = if v <= 128 { v } else { v - P };
    }
    q
}

fn expanded_words(q: &[i32; 256], sb: usize, o1: isize, o2: isize, mm: i32) -> [u32; 8] {
    let mut w = [0u32; 8];
    for (n, wn) in w.iter_mut().enumerate() {
        let base = (16 * sb + 2 * n) as isize;
        let lo = q[(base + o1) as usize].wrapping_mul(mm) as u32 & 0xFFFF;
        let hi = (q[(base + o2) as usize].wrapping_mul(mm) as u32) << 16;
        *wn = lo.wrapping_add(hi);
    }
    w
}

#[inline(always)]
fn if_fn(x: u32, y: u32, z: u32) -> u32 {
    ((y ^ z) & x) ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | ((x | y) & z)
}

/// Four lanes of eight words each.
struct Lanes {
    a: [u32; 8],
    b: [u32; 8],
    c: [u32; 8],
    d: [u32; 8],
}

impl Lanes {
    fn step(&mut self, w: &[u32; 8], fun: fn(u32, u32, u32) -> u32, r: u32, s: u32, pp: usize) {
        let mut ta = [0u32; 8];
        for (t, a) in ta.iter_mut().zip(self.a.iter()) {
            *t = a.rotate_left(r);
        }
        for n in 0..8 {
            let tt = self.d[n]
                .wrapping_add(w[n])
                .wrapping_add(fun(self.a[n], self.b[n], self.c[n]));
            self.a[n] = tt.rotate_left(s).wrapping_add(ta[pp ^ n]);
            self.d[n] = self.c[n];
            self.c[n] = self.b[n];
            self.b[n] = ta[n];
        }
    }
}

fn compress(state: &mut [u32; 32], block: &[u8; BLOCK_LEN], last: bool) {
    let q = expand(block, last);
    let saved = *state;

    let mut lanes = Lanes {
        a: [0; 8],
        b: [0; 8],
        c: [0; 8],
        d: [0; 8],
    };
    for i in 0..8 {
        lanes.a[i] = state[i] ^ le32(block, i);
        lanes.b[i] = state[8 + i] ^ le32(block, 8 + i);
        lanes.c[i] = state[16 + i] ^ le32(block, 16 + i);
        lanes.d[i] = state[24 + i] ^ le32(block, 24 + i);
    }

    for (round, &(sbs, o1, o2, mm)) in EXPANSION.iter().enumerate() {
        let p = &ROTATIONS[round];
        for (step, &sb) in sbs.iter().enumerate() {
            let w = expanded_words(&q, sb, o1, o2, mm);
            let fun: fn(u32, u32, u32) -> u32 = if step < 4 { if_fn } else { maj };
            lanes.step(&w, fun, p[step % 4], p[(step + 1) % 4], PP8[(round + step) % 7]);
        }
    }

    // Feed-forward: four more steps keyed by the chaining value.
    let words = |k: usize| -> [u32; 8] {
        let mut w = [0u32; 8];
        w.copy_from_slice(&saved[8 * k..8 * k + 8]);
        w
    };
    lanes.step(&words(0), if_fn, 4, 13, 5);
    lanes.step(&words(1), if_fn, 13, 10, 7);
    lanes.step(&words(2), if_fn, 10, 25, 4);
    lanes.step(&words(3), if_fn, 25, 4, 1);

    state[..8].copy_from_slice(&lanes.a);
    state[8..16].copy_from_slice(&lanes.b);
    state[16..24].copy_from_slice(&lanes.c);
    state[24..].copy_from_slice(&lanes.d);
}

/// SIMD-512 hasher state.
#[derive(Clone)]
pub struct Simd512 {
    state: [u32; 32],
    buf: [u8; BLOCK_LEN],
    ptr: usize,
    blocks: u64,
}

impl Default for Simd512 {
    fn default() -> Self {
        Simd512 {
            state: IV,
            buf: [0u8; BLOCK_LEN],
            ptr: 0,
            blocks: 0,
        }
    }
}

impl core::fmt::Debug for Simd512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Simd512 { ... }")
    }
}

impl Primitive for Simd512 {
    const NAME: &'static str = "SIMD-512";

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.ptr).min(data.len());
            self.buf[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            self.ptr += take;
            data = &data[take..];
            if self.ptr == BLOCK_LEN {
                compress(&mut self.state, &self.buf, false);
                self.blocks = self.blocks.wrapping_add(1);
                self.ptr = 0;
            }
        }
    }

    fn finalize_into(mut self, out: &mut [u8; OUTPUT_LEN]) {
        // Partial data is zero-padded, the length goes in its own block.
        if self.ptr > 0 {
            let mut block = [0u8; BLOCK_LEN];
            block[..self.ptr].copy_from_slice(&self.buf[..self.ptr]);
            compress(&mut self.state, &block, false);
        }

        let bits = (self.blocks << 10).wrapping_add((self.ptr as u64) << 3);
        let mut block = [0u8; BLOCK_LEN];
        block[..8].copy_from_slice(&bits.to_le_bytes());
        compress(&mut self.state, &block, true);

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
    }
}
