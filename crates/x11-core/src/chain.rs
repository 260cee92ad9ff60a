//! The HashChain: eleven primitives threaded through two 64-byte buffers.

use crate::error::X11Error;
use crate::primitives::OUTPUT_LEN;
use crate::stage::{Slot, Stage, STAGE_COUNT, X11_STAGES, XCOIN_STAGES};

/// Length of the final digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a serialized block header, the fixed input of [`HashChain::XCOIN`].
pub const HEADER_LEN: usize = 80;

/// A named stage sequence plus its input-length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashChain {
    name: &'static str,
    stages: &'static [Stage; STAGE_COUNT],
    /// Input length used when the caller declares none.
    fixed_len: Option<usize>,
}

/// Per-stage outputs of one chain run.
#[derive(Clone, PartialEq, Eq)]
pub struct ChainTrace {
    stages: [[u8; OUTPUT_LEN]; STAGE_COUNT],
}

impl ChainTrace {
    /// Full 64-byte output of stage `k`, counting from 1.
    pub fn stage(&self, k: usize) -> Option<&[u8; OUTPUT_LEN]> {
        k.checked_sub(1).and_then(|i| self.stages.get(i))
    }

    /// The truncated digest, identical to what [`HashChain::digest`] returns.
    pub fn output(&self) -> [u8; DIGEST_LEN] {
        truncate(&self.stages[STAGE_COUNT - 1])
    }
}

impl core::fmt::Debug for ChainTrace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChainTrace")
            .field("output", &hex::encode(self.output()))
            .finish()
    }
}

fn truncate(full: &[u8; OUTPUT_LEN]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&full[..DIGEST_LEN]);
    out
}

impl HashChain {
    /// Explicit-length variant: hashes however many bytes the caller declares.
    pub const X11: HashChain = HashChain {
        name: "x11",
        stages: &X11_STAGES,
        fixed_len: None,
    };

    /// Fixed-length variant: always hashes an 80-byte block header.
    pub const XCOIN: HashChain = HashChain {
        name: "xcoin",
        stages: &XCOIN_STAGES,
        fixed_len: Some(HEADER_LEN),
    };

    /// Short lowercase name, used as the log prefix.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The stage sequence, always one of the checked constant tables.
    pub fn stages(&self) -> &'static [Stage; STAGE_COUNT] {
        self.stages
    }

    /// Input length assumed when the caller declares none.
    pub fn fixed_len(&self) -> Option<usize> {
        self.fixed_len
    }

    /// Pick the variant matching how the caller describes its input.
    pub fn for_length(input_len: Option<usize>) -> HashChain {
        match input_len {
            Some(_) => HashChain::X11,
            None => HashChain::XCOIN,
        }
    }

    /// Resolve the number of bytes to hash and check the buffer holds them.
    fn message<'a>(&self, input: &'a [u8], input_len: Option<usize>) -> Result<&'a [u8], X11Error> {
        let declared = input_len.or(self.fixed_len).unwrap_or(input.len());
        match input.get(..declared) {
            Some(message) => Ok(message),
            None => {
                log::debug!(
                    "{}: rejecting input, declared {} bytes but buffer holds {}",
                    self.name,
                    declared,
                    input.len()
                );
                Err(X11Error::InvalidInputLength {
                    declared,
                    actual: input.len(),
                })
            }
        }
    }

    /// Run every stage, handing each 64-byte result to `visit`.
    fn run(&self, message: &[u8], mut visit: impl FnMut(usize, &[u8; OUTPUT_LEN])) {
        let mut a = [0u8; OUTPUT_LEN];
        let mut b = [0u8; OUTPUT_LEN];

        for (i, stage) in self.stages.iter().enumerate() {
            log::trace!(
                "{} stage {}: {} {:?} -> {:?}",
                self.name,
                i + 1,
                stage.algorithm.name(),
                stage.source,
                stage.dest
            );
            let (src, dst): (&[u8], &mut [u8; OUTPUT_LEN]) = match (stage.source, stage.dest) {
                (Slot::Input, Slot::A) => (message, &mut a),
                (Slot::Input, Slot::B) => (message, &mut b),
                (Slot::A, Slot::B) => (&a[..], &mut b),
                (Slot::B, Slot::A) => (&b[..], &mut a),
                // Excluded by the compile-time check on the stage tables.
                _ => unreachable!("malformed stage {}", i + 1),
            };
            stage.algorithm.hash(src, dst);
            visit(i, dst);
        }
    }

    /// Hash `input` through all eleven stages and return the first 32 bytes
    /// of the last stage's output.
    ///
    /// `input_len` declares how many bytes to read; without it the variant's
    /// fixed length applies, or the whole slice for [`HashChain::X11`]. Bytes
    /// past the declared length are ignored.
    pub fn digest(&self, input: &[u8], input_len: Option<usize>) -> Result<[u8; DIGEST_LEN], X11Error> {
        let message = self.message(input, input_len)?;
        Ok(self.digest_message(message))
    }

    /// Hash all of `message`, whose length is already settled.
    pub(crate) fn digest_message(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        self.run(message, |i, result| {
            if i == STAGE_COUNT - 1 {
                out = truncate(result);
            }
        });
        out
    }

    /// Like [`HashChain::digest`], but keeps every intermediate stage output.
    pub fn trace(&self, input: &[u8], input_len: Option<usize>) -> Result<ChainTrace, X11Error> {
        let message = self.message(input, input_len)?;
        let mut stages = [[0u8; OUTPUT_LEN]; STAGE_COUNT];
        self.run(message, |i, result| stages[i] = *result);
        Ok(ChainTrace { stages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Blake512, Bmw512, Echo512, Primitive};

    #[test]
    fn test_for_length() {
        assert_eq!(HashChain::for_length(None), HashChain::XCOIN);
        assert_eq!(HashChain::for_length(Some(80)), HashChain::X11);
        assert_eq!(HashChain::for_length(Some(0)), HashChain::X11);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let err = HashChain::X11.digest(&[0u8; 10], Some(11)).unwrap_err();
        assert_eq!(err, X11Error::InvalidInputLength { declared: 11, actual: 10 });

        let err = HashChain::XCOIN.digest(&[0u8; 79], None).unwrap_err();
        assert_eq!(err, X11Error::InvalidInputLength { declared: 80, actual: 79 });
    }

    #[test]
    fn test_trace_matches_digest() {
        let input = [0x5au8; 80];
        let trace = HashChain::XCOIN.trace(&input, None).unwrap();
        assert_eq!(trace.output(), HashChain::XCOIN.digest(&input, None).unwrap());
    }

    #[test]
    fn test_first_stage_is_plain_blake512() {
        let trace = HashChain::XCOIN.trace(&[0u8; 80], None).unwrap();
        assert_eq!(
            hex::encode(trace.stage(1).unwrap()),
            "13cee4afd536f7ed6aa3f7fc90e000504bf01dd041a8a3c1f38f0bfa14258308\
             384b6c5c75d2ab528277de92a0968b6650fcb80687a4eab0dcd87216bc522dc6"
        );
        assert_eq!(
            hex::encode(trace.output()),
            "8328846180965bce56f61e015db62af562a611d85e5e721d854c8d97e47a3ea3"
        );
    }

    #[test]
    fn test_each_stage_feeds_the_next() {
        let input = b"stage isolation";
        let trace = HashChain::X11.trace(input, None).unwrap();

        assert_eq!(trace.stage(1), Some(&Blake512::digest(input)));
        assert_eq!(trace.stage(2), Some(&Bmw512::digest(&Blake512::digest(input))));
        let echo_input = trace.stage(10).unwrap();
        assert_eq!(trace.stage(11), Some(&Echo512::digest(echo_input)));

        for k in 2..=STAGE_COUNT {
            let mut expected = [0u8; OUTPUT_LEN];
            let prev = trace.stage(k - 1).unwrap();
            HashChain::X11.stages()[k - 1].algorithm.hash(prev, &mut expected);
            assert_eq!(trace.stage(k), Some(&expected), "stage {}", k);
        }
    }

    #[test]
    fn test_stage_index_bounds() {
        let trace = HashChain::X11.trace(b"", None).unwrap();
        assert!(trace.stage(0).is_none());
        assert!(trace.stage(1).is_some());
        assert!(trace.stage(11).is_some());
        assert!(trace.stage(12).is_none());
    }

    #[test]
    fn test_empty_input_is_valid() {
        let a = HashChain::X11.digest(b"", None).unwrap();
        let b = HashChain::X11.digest(b"ignored", Some(0)).unwrap();
        assert_eq!(a, b);
    }
}
