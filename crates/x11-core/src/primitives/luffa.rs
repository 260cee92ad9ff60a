//! Luffa-512: five 256-bit sub-states, each permuted by its own `Q_j`.

use super::{be32, Primitive, OUTPUT_LEN};

const BLOCK_LEN: usize = 32;

const IV: [[u32; 8]; 5] = [
    [0x6d251e69, 0x44b051e0, 0x4eaa6fb4, 0xdbf78465, 0x6e292011, 0x90152df4, 0xee058139, 0xdef610bb],
    [0xc3b44b95, 0xd9d2f256, 0x70eee9a0, 0xde099fa3, 0x5d9b0557, 0x8fc944b3, 0xcf1ccf0e, 0x746cd581],
    [0xf7efc89d, 0x5dba5781, 0x04016ce5, 0xad659c05, 0x0306194f, 0x666d1836, 0x24aa230a, 0x8b264ae7],
    [0x858075d5, 0x36d79cce, 0xe571f7d7, 0x204b1f67, 0x35870c6a, 0x57e9e923, 0x14bcb808, 0x7cde72ce],
    [0x6c68e9be, 0x5ec41e22, 0xc825b7c7, 0xaffb4363, 0xf5df3999, 0x0fc688f1, 0xb07224cc, 0x03e86cea],
];

/// Step constants `(c0, c4)` for each sub-permutation `Q_j`, eight steps each.
const RC: [[(u32, u32); 8]; 5] = [
    [
        (0x303994a6, 0xe0337818), (0xc0e65299, 0x441ba90d), (0x6cc33a12, 0x7f34d442), (0xdc56983e, 0x9389217f),
        (0x1e00108f, 0xe5a8bce6), (0x7800423d, 0x5274baf4), (0x8f5b7882, 0x26889ba7), (0x96e1db12, 0x9a226e9d),
    ],
    [
        (0xb6de10ed, 0x01685f3d), (0x70f47aae, 0x05a17cf4), (0x0707a3d4, 0xbd09caca), (0x1c1e8f51, 0xf4272b28),
        (0x707a3d45, 0x144ae5cc), (0xaeb28562, 0xfaa7ae2b), (0xbaca1589, 0x2e48f1c1), (0x40a46f3e, 0xb923c704),
    ],
    [
        (0xfc20d9d2, 0xe25e72c1), (0x34552e25, 0xe623bb72), (0x7ad8818f, 0x5c58a4a4), (0x8438764a, 0x1e38e2e7),
        (0xbb6de032, 0x78e38b9d), (0xedb780c8, 0x27586719), (0xd9847356, 0x36eda57f), (0xa2c78434, 0x703aace7),
    ],
    [
        (0xb213afa5, 0xe028c9bf), (0xc84ebe95, 0x44756f91), (0x4e608a22, 0x7e8fce32), (0x56d858fe, 0x956548be),
        (0x343b138f, 0xfe191be2), (0xd0ec4e3d, 0x3cb226e5), (0x2ceb4882, 0x5944a28e), (0xb3ad2208, 0xa1c4c355),
    ],
    [
        (0xf0d2e9e3, 0x5090d577), (0xac11d7fa, 0x2d1925ab), (0x1bcb66f2, 0xb46496ac), (0x6f2d9bc9, 0xd1925ab0),
        (0x78602649, 0x29131ab6), (0x8edae952, 0x0fc053c3), (0x3b6ba548, 0x3f014f0c), (0xedae9520, 0xfc053c31),
    ],
];

type Word256 = [u32; 8];

/// Multiplication by `x` over GF(2^32)^8 with the reduction `x^8 + x^4 + x^3 + x + 1`.
#[inline(always)]
fn mul2(a: &Word256) -> Word256 {
    let t = a[7];
    [t, a[0] ^ t, a[1], a[2] ^ t, a[3] ^ t, a[4], a[5], a[6]]
}

#[inline(always)]
fn xor(a: &Word256, b: &Word256) -> Word256 {
    let mut r = *a;
    for (x, y) in r.iter_mut().zip(b.iter()) {
        *x ^= y;
    }
    r
}

/// Message injection for five sub-states.
fn inject(v: &mut [Word256; 5], m: &Word256) {
    let mut t = xor(&xor(&v[0], &v[1]), &xor(&v[2], &v[3]));
    t = mul2(&xor(&t, &v[4]));
    for x in v.iter_mut() {
        *x = xor(x, &t);
    }

    let b = xor(&mul2(&v[0]), &v[1]);
    v[1] = xor(&mul2(&v[1]), &v[2]);
    v[2] = xor(&mul2(&v[2]), &v[3]);
    v[3] = xor(&mul2(&v[3]), &v[4]);
    v[4] = xor(&mul2(&v[4]), &v[0]);

    v[0] = xor(&mul2(&b), &v[4]);
    v[4] = xor(&mul2(&v[4]), &v[3]);
    v[3] = xor(&mul2(&v[3]), &v[2]);
    v[2] = xor(&mul2(&v[2]), &v[1]);
    v[1] = xor(&mul2(&v[1]), &b);

    let mut m = *m;
    v[0] = xor(&v[0], &m);
    for x in v[1..].iter_mut() {
        m = mul2(&m);
        *x = xor(x, &m);
    }
}

/// Bitsliced 4-bit S-box over words `(a0, a1, a2, a3)`, `a0` the low bit.
#[inline(always)]
fn sub_crumb(a: &mut Word256, i0: usize, i1: usize, i2: usize, i3: usize) {
    let (mut a0, mut a1, mut a2, mut a3) = (a[i0], a[i1], a[i2], a[i3]);
    let mut tmp = a0;
    a0 |= a1;
    a2 ^= a3;
    a1 = !a1;
    a0 ^= a3;
    a3 &= tmp;
    a1 ^= a3;
    a3 ^= a2;
    a2 &= a0;
    a0 = !a0;
    a2 ^= a1;
    a1 |= a3;
    tmp ^= a1;
    a3 ^= a2;
    a2 &= a1;
    a1 ^= a0;
    a0 = tmp;
    a[i0] = a0;
    a[i1] = a1;
    a[i2] = a2;
    a[i3] = a3;
}

#[inline(always)]
fn mix_word(a: &mut Word256, k: usize) {
    let (mut u, mut v) = (a[k], a[k + 4]);
    v ^= u;
    u = u.rotate_left(2) ^ v;
    v = v.rotate_left(14) ^ u;
    u = u.rotate_left(10) ^ v;
    v = v.rotate_left(1);
    a[k] = u;
    a[k + 4] = v;
}

/// `Q_j`: tweak, then eight SubCrumb/MixWord/AddConstant steps.
fn permute(a: &mut Word256, j: usize) {
    for w in a[4..].iter_mut() {
        *w = w.rotate_left(j as u32);
    }
    for &(c0, c4) in RC[j].iter() {
        sub_crumb(a, 0, 1, 2, 3);
        sub_crumb(a, 5, 6, 7, 4);
        for k in 0..4 {
            mix_word(a, k);
        }
        a[0] ^= c0;
        a[4] ^= c4;
    }
}

fn round(v: &mut [Word256; 5], m: &Word256) {
    inject(v, m);
    for (j, x) in v.iter_mut().enumerate() {
        permute(x, j);
    }
}

fn decode_block(block: &[u8; BLOCK_LEN]) -> Word256 {
    let mut m = [0u32; 8];
    for (i, w) in m.iter_mut().enumerate() {
        *w = be32(block, i);
    }
    m
}

/// XOR of the five sub-states, the 256-bit output of one blank round.
fn fold(v: &[Word256; 5]) -> Word256 {
    v[1..].iter().fold(v[0], |acc, x| xor(&acc, x))
}

/// Luffa-512 hasher state.
#[derive(Clone)]
pub struct Luffa512 {
    v: [Word256; 5],
    buf: [u8; BLOCK_LEN],
    ptr: usize,
}

impl Default for Luffa512 {
    fn default() -> Self {
        Luffa512 {
            v: IV,
            buf: [0u8; BLOCK_LEN],
            ptr: 0,
        }
    }
}

impl core::fmt::Debug for Luffa512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Luffa512 { ... }")
    }
}

impl Primitive for Luffa512 {
    const NAME: &'static str = "Luffa-512";

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.ptr).min(data.len());
            self.buf[self.ptr..self.ptr + take].copy_from_slice(&data[..take]);
            self.ptr += take;
            data = &data[take..];
            if self.ptr == BLOCK_LEN {
                let m = decode_block(&self.buf);
                round(&mut self.v, &m);
                self.ptr = 0;
            }
        }
    }

    fn finalize_into(mut self, out: &mut [u8; OUTPUT_LEN]) {
        let mut block = [0u8; BLOCK_LEN];
        block[..self.ptr].copy_from_slice(&self.buf[..self.ptr]);
        block[self.ptr] = 0x80;
        round(&mut self.v, &decode_block(&block));

        let blank = [0u32; 8];
        for half in out.chunks_exact_mut(32) {
            round(&mut self.v, &blank);
            for (chunk, w) in half.chunks_exact_mut(4).zip(fold(&self.v).iter()) {
                chunk.copy_from_slice(&w.to_be_bytes());
            }
        }
    }
}
