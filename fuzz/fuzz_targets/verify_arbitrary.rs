//! Fuzz target for verification with arbitrary inputs
//!
//! # Invariants
//!
//! - Verification NEVER panics on arbitrary token/scramble pairs
//! - Verification is deterministic: the same inputs always agree

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrambled_core::verify_scramble_sync;

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    token: String,
    scramble: String,
    count: u8,
    size: u8,
}

fuzz_target!(|input: VerifyInput| {
    let count = u32::from(input.count % 64);
    let size = u32::from(input.size % 12);

    let first = verify_scramble_sync(&input.token, &input.scramble, count, size);
    let second = verify_scramble_sync(&input.token, &input.scramble, count, size);

    assert_eq!(first, second);
});
