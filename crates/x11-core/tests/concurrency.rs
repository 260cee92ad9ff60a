//! The digest holds no shared state: parallel callers see sequential results.

use std::thread;

use x11_core::{digest, DIGEST_LEN, HEADER_LEN};

const INPUTS: usize = 1000;
const WORKERS: usize = 8;

#[test]
fn test_parallel_digests_match_sequential() {
    let mut inputs = vec![[0u8; HEADER_LEN]; INPUTS];
    for input in inputs.iter_mut() {
        getrandom::getrandom(input).unwrap();
    }

    let sequential: Vec<[u8; DIGEST_LEN]> = inputs
        .iter()
        .map(|input| digest(input, None).unwrap())
        .collect();

    let chunk = INPUTS.div_ceil(WORKERS);
    let parallel: Vec<[u8; DIGEST_LEN]> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .chunks(chunk)
            .map(|part| {
                s.spawn(move || {
                    part.iter()
                        .map(|input| digest(input, None).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(parallel.len(), INPUTS);
    assert_eq!(parallel, sequential);
}
