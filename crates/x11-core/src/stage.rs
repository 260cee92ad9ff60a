//! Stage descriptors: which primitive runs at each step and where it reads and writes.

use crate::primitives::{
    Blake512, Bmw512, CubeHash512, Echo512, Groestl512, Jh512, Keccak512, Luffa512, Primitive,
    Shavite512, Simd512, Skein512, OUTPUT_LEN,
};

/// Number of stages in every chain.
pub const STAGE_COUNT: usize = 11;

/// One of the eleven 512-bit primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Blake,
    Bmw,
    Groestl,
    Skein,
    Jh,
    Keccak,
    Luffa,
    CubeHash,
    Shavite,
    Simd,
    Echo,
}

impl Algorithm {
    /// Human-readable name of the primitive.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Blake => Blake512::NAME,
            Algorithm::Bmw => Bmw512::NAME,
            Algorithm::Groestl => Groestl512::NAME,
            Algorithm::Skein => Skein512::NAME,
            Algorithm::Jh => Jh512::NAME,
            Algorithm::Keccak => Keccak512::NAME,
            Algorithm::Luffa => Luffa512::NAME,
            Algorithm::CubeHash => CubeHash512::NAME,
            Algorithm::Shavite => Shavite512::NAME,
            Algorithm::Simd => Simd512::NAME,
            Algorithm::Echo => Echo512::NAME,
        }
    }

    /// Init, absorb `input`, finalize into `out`.
    pub fn hash(self, input: &[u8], out: &mut [u8; OUTPUT_LEN]) {
        fn run<P: Primitive>(input: &[u8], out: &mut [u8; OUTPUT_LEN]) {
            let mut state = P::default();
            state.update(input);
            state.finalize_into(out);
        }

        match self {
            Algorithm::Blake => run::<Blake512>(input, out),
            Algorithm::Bmw => run::<Bmw512>(input, out),
            Algorithm::Groestl => run::<Groestl512>(input, out),
            Algorithm::Skein => run::<Skein512>(input, out),
            Algorithm::Jh => run::<Jh512>(input, out),
            Algorithm::Keccak => run::<Keccak512>(input, out),
            Algorithm::Luffa => run::<Luffa512>(input, out),
            Algorithm::CubeHash => run::<CubeHash512>(input, out),
            Algorithm::Shavite => run::<Shavite512>(input, out),
            Algorithm::Simd => run::<Simd512>(input, out),
            Algorithm::Echo => run::<Echo512>(input, out),
        }
    }
}

/// Buffer role in a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The caller's input, read by the first stage only.
    Input,
    /// Working buffer A.
    A,
    /// Working buffer B.
    B,
}

/// A single step of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub algorithm: Algorithm,
    pub source: Slot,
    pub dest: Slot,
}

impl Stage {
    const fn new(algorithm: Algorithm, source: Slot, dest: Slot) -> Self {
        Stage {
            algorithm,
            source,
            dest,
        }
    }
}

/// Stage order of the explicit-length variant.
pub const X11_STAGES: [Stage; STAGE_COUNT] = [
    Stage::new(Algorithm::Blake, Slot::Input, Slot::A),
    Stage::new(Algorithm::Bmw, Slot::A, Slot::B),
    Stage::new(Algorithm::Groestl, Slot::B, Slot::A),
    Stage::new(Algorithm::Skein, Slot::A, Slot::B),
    Stage::new(Algorithm::Jh, Slot::B, Slot::A),
    Stage::new(Algorithm::Keccak, Slot::A, Slot::B),
    Stage::new(Algorithm::Luffa, Slot::B, Slot::A),
    Stage::new(Algorithm::CubeHash, Slot::A, Slot::B),
    Stage::new(Algorithm::Shavite, Slot::B, Slot::A),
    Stage::new(Algorithm::Simd, Slot::A, Slot::B),
    Stage::new(Algorithm::Echo, Slot::B, Slot::A),
];

/// Stage order of the fixed 80-byte header variant.
///
/// Written out separately from [`X11_STAGES`]; the two must stay identical,
/// which `tests::test_variants_share_stage_order` pins.
pub const XCOIN_STAGES: [Stage; STAGE_COUNT] = [
    Stage::new(Algorithm::Blake, Slot::Input, Slot::A),
    Stage::new(Algorithm::Bmw, Slot::A, Slot::B),
    Stage::new(Algorithm::Groestl, Slot::B, Slot::A),
    Stage::new(Algorithm::Skein, Slot::A, Slot::B),
    Stage::new(Algorithm::Jh, Slot::B, Slot::A),
    Stage::new(Algorithm::Keccak, Slot::A, Slot::B),
    Stage::new(Algorithm::Luffa, Slot::B, Slot::A),
    Stage::new(Algorithm::CubeHash, Slot::A, Slot::B),
    Stage::new(Algorithm::Shavite, Slot::B, Slot::A),
    Stage::new(Algorithm::Simd, Slot::A, Slot::B),
    Stage::new(Algorithm::Echo, Slot::B, Slot::A),
];

const fn slot_eq(a: Slot, b: Slot) -> bool {
    a as u8 == b as u8
}

/// Whether `stages` threads the input through the two working buffers:
/// only the first stage reads `Input`, no stage reads what it writes, each
/// stage reads the previous destination and the last one writes `A`.
pub const fn is_well_formed(stages: &[Stage]) -> bool {
    if stages.is_empty() || !slot_eq(stages[0].source, Slot::Input) {
        return false;
    }
    let mut i = 0;
    while i < stages.len() {
        let stage = stages[i];
        if slot_eq(stage.dest, Slot::Input) || slot_eq(stage.source, stage.dest) {
            return false;
        }
        if i > 0 && !slot_eq(stage.source, stages[i - 1].dest) {
            return false;
        }
        i += 1;
    }
    slot_eq(stages[stages.len() - 1].dest, Slot::A)
}

const _: () = assert!(is_well_formed(&X11_STAGES));
const _: () = assert!(is_well_formed(&XCOIN_STAGES));
