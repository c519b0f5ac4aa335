//! Fuzz target for the generation/verification round trip
//!
//! # Invariants
//!
//! - Generation NEVER panics, whatever the (count, size, seed) triple
//! - `size == 0` is the only rejected input
//! - Every generated scramble verifies against its own token
//! - Move count always equals the requested count
//! - Depth prefixes only appear for cubes larger than 3

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrambled_core::{ScrambleError, generate_scramble_sync, verify_scramble_sync};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    count: u8,
    size: u8,
    seed: String,
}

fuzz_target!(|input: RoundtripInput| {
    // Bound the work per case, not the input space.
    let count = u32::from(input.count % 64);
    let size = u32::from(input.size % 12);

    match generate_scramble_sync(count, size, Some(&input.seed)) {
        Ok(scramble) => {
            assert_eq!(scramble.move_count(), count as usize);

            if size <= 3 {
                assert!(scramble.moves.iter().all(|m| m.depth.is_none()));
            }

            let verified = verify_scramble_sync(&scramble.token, &scramble.scramble, count, size)
                .unwrap_or(false);
            assert!(verified, "own output failed verification");
        }
        Err(ScrambleError::InvalidCubeSize { .. }) => assert_eq!(size, 0),
        Err(err) => panic!("unexpected error: {err}"),
    }
});
