//! Properties that hold for every input.

use proptest::prelude::*;

use x11_core::primitives::{
    Blake512, Bmw512, CubeHash512, Echo512, Luffa512, Primitive, Shavite512, Simd512,
    OUTPUT_LEN,
};
use x11_core::{digest, x11, HashChain, X11Error};

fn streamed<P: Primitive>(data: &[u8], split: usize) -> [u8; OUTPUT_LEN] {
    let mut state = P::default();
    for chunk in data.chunks(split.max(1)) {
        state.update(chunk);
    }
    let mut out = [0u8; OUTPUT_LEN];
    state.finalize_into(&mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_deterministic(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(x11(&data), x11(&data));
    }

    #[test]
    fn prop_declared_length_reads_prefix(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        extra in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut padded = data.clone();
        padded.extend_from_slice(&extra);
        prop_assert_eq!(digest(&padded, Some(data.len())).unwrap(), x11(&data));
    }

    #[test]
    fn prop_short_buffer_rejected(data in proptest::collection::vec(any::<u8>(), 0..100), more in 1usize..50) {
        let declared = data.len() + more;
        prop_assert_eq!(
            HashChain::X11.digest(&data, Some(declared)),
            Err(X11Error::InvalidInputLength { declared, actual: data.len() })
        );
    }

    #[test]
    fn prop_primitives_stream(data in proptest::collection::vec(any::<u8>(), 0..400), split in 1usize..150) {
        prop_assert_eq!(streamed::<Blake512>(&data, split), Blake512::digest(&data));
        prop_assert_eq!(streamed::<Bmw512>(&data, split), Bmw512::digest(&data));
        prop_assert_eq!(streamed::<Luffa512>(&data, split), Luffa512::digest(&data));
        prop_assert_eq!(streamed::<CubeHash512>(&data, split), CubeHash512::digest(&data));
        prop_assert_eq!(streamed::<Shavite512>(&data, split), Shavite512::digest(&data));
        prop_assert_eq!(streamed::<Simd512>(&data, split), Simd512::digest(&data));
        prop_assert_eq!(streamed::<Echo512>(&data, split), Echo512::digest(&data));
    }
}
