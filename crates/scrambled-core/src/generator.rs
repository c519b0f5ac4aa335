//! Seeded scramble generation and verification.
//!
//! Each move consumes a block of three slot indices: the face draw keys on
//! the slot itself, and the sub-decisions (prime, double, depth) key on the
//! slot digits with a decision digit appended. The 3-slot spacing keeps one
//! move's sub-draw keys from colliding with the next move's face key.

use std::future::{Future, ready};

use crate::{
    env::{Environment, SystemEnv},
    error::ScrambleError,
    moves::{FACES, Face, Modifier, Move, RecentFaces},
    scramble::Scramble,
};

/// Conventional cube size when the caller has no other preference.
pub const DEFAULT_CUBE_SIZE: u32 = 3;

/// Generate a scramble, minting a token from OS randomness when unseeded.
///
/// `count` is the number of moves to produce; `size` the cube size
/// ([`DEFAULT_CUBE_SIZE`] for a standard cube); `seed` the optional
/// reproduction token. For a fixed seed the result is byte-identical across
/// calls, processes, and platforms.
///
/// # Errors
///
/// Returns [`ScrambleError::InvalidCubeSize`] if `size` is zero.
pub fn generate_scramble_sync(
    count: u32,
    size: u32,
    seed: Option<&str>,
) -> Result<Scramble, ScrambleError> {
    generate_scramble_sync_with(&SystemEnv::new(), count, size, seed)
}

/// Generate a scramble with an explicit entropy environment.
///
/// Only unseeded calls consult the environment; seeded generation is a pure
/// function of `(count, size, seed)`.
///
/// # Errors
///
/// Returns [`ScrambleError::InvalidCubeSize`] if `size` is zero.
pub fn generate_scramble_sync_with<E: Environment>(
    env: &E,
    count: u32,
    size: u32,
    seed: Option<&str>,
) -> Result<Scramble, ScrambleError> {
    if size == 0 {
        return Err(ScrambleError::InvalidCubeSize { size });
    }

    let token = seed.map_or_else(|| env.seed_token(), str::to_owned);
    let moves = select_moves(&token, count, size)?;
    let scramble = Scramble::new(moves, token, size);

    tracing::debug!(count, size, token = %scramble.token, "generated scramble");

    Ok(scramble)
}

/// Verify that `scramble` is exactly what `token` regenerates.
///
/// Regenerates with `token` as the seed and compares the joined string for
/// byte equality, spacing and modifier characters included. No fuzzy
/// matching.
///
/// # Errors
///
/// Returns [`ScrambleError::InvalidCubeSize`] if `size` is zero.
pub fn verify_scramble_sync(
    token: &str,
    scramble: &str,
    count: u32,
    size: u32,
) -> Result<bool, ScrambleError> {
    let regenerated = generate_scramble_sync(count, size, Some(token))?;

    Ok(regenerated.scramble == scramble)
}

/// Non-blocking form of [`generate_scramble_sync`].
///
/// Completes immediately with the synchronous result and offers no
/// additional concurrency guarantees.
pub fn generate_scramble(
    count: u32,
    size: u32,
    seed: Option<&str>,
) -> impl Future<Output = Result<Scramble, ScrambleError>> {
    ready(generate_scramble_sync(count, size, seed))
}

/// Non-blocking form of [`verify_scramble_sync`].
///
/// Completes immediately with the synchronous result.
pub fn verify_scramble(
    token: &str,
    scramble: &str,
    count: u32,
    size: u32,
) -> impl Future<Output = Result<bool, ScrambleError>> {
    ready(verify_scramble_sync(token, scramble, count, size))
}

/// Run the selection loop for `count` moves.
fn select_moves(token: &str, count: u32, size: u32) -> Result<Vec<Move>, ScrambleError> {
    let mut recent = RecentFaces::new();
    let mut moves = Vec::with_capacity(count as usize);

    for index in 0..u64::from(count) {
        let slot = index * 3;

        let face = select_face(token, slot, recent)?;
        recent.record(face);

        // Prime takes priority; the double draw is only consulted when the
        // prime draw misses, so the three outcomes are non-uniform by
        // construction.
        let modifier = if scrambled_stream::coin(&sub_key(token, slot, 1)) {
            Modifier::Prime
        } else if scrambled_stream::coin(&sub_key(token, slot, 2)) {
            Modifier::Double
        } else {
            Modifier::Quarter
        };

        let depth = if size > 3 {
            let drawn = scrambled_stream::draw_index(&sub_key(token, slot, 3), u64::from(size - 1))?;
            (drawn > 1).then_some(drawn as u32)
        } else {
            None
        };

        moves.push(Move { depth, face, modifier });
    }

    Ok(moves)
}

/// Draw a face for a slot, redrawing while the candidate is in the recent
/// set.
fn select_face(token: &str, slot: u64, recent: RecentFaces) -> Result<Face, ScrambleError> {
    let mut face = face_at(scrambled_stream::draw_index(&slot_key(token, slot), 6)?);
    let mut attempt: u64 = 0;

    while recent.contains(face) {
        attempt += 1;
        tracing::trace!(slot, attempt, rejected = %face, "face redraw");

        let key = format!("{token}{}", retry_number(slot, attempt));
        face = face_at(scrambled_stream::draw_index(&key, 6)?);
    }

    Ok(face)
}

fn face_at(index: u64) -> Face {
    FACES[index as usize % FACES.len()]
}

/// Face-draw key: the seed followed by the slot digits.
fn slot_key(token: &str, slot: u64) -> String {
    format!("{token}{slot}")
}

/// Sub-draw key: the slot digits with a decision digit appended
/// (1 = prime, 2 = double, 3 = depth).
fn sub_key(token: &str, slot: u64, decision: u8) -> String {
    format!("{token}{slot}{decision}")
}

/// Retry number: the digits of `slot` followed by the digits of `attempt`,
/// read back as one decimal value. Attempt 1 at slot 0 keys as `1`, not
/// `01`.
fn retry_number(slot: u64, attempt: u64) -> u128 {
    let mut shift: u128 = 1;
    let mut rest = attempt;

    loop {
        shift *= 10;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    u128::from(slot) * shift + u128::from(attempt)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone)]
    struct FixedEnv;

    impl Environment for FixedEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            for (i, byte) in buffer.iter_mut().enumerate() {
                *byte = i as u8;
            }
        }
    }

    #[test]
    fn five_moves_from_a_fixed_seed() {
        let scramble = generate_scramble_sync(5, 3, Some("test-seed")).unwrap();

        assert_eq!(scramble.scramble, "D L' B' D2 L");
        assert_eq!(scramble.token, "test-seed");
        assert_eq!(scramble.size, 3);
        assert_eq!(scramble.move_count(), 5);
    }

    #[test]
    fn longer_sequences_extend_shorter_ones() {
        let five = generate_scramble_sync(5, 3, Some("test-seed")).unwrap();
        let twelve = generate_scramble_sync(12, 3, Some("test-seed")).unwrap();

        assert_eq!(twelve.scramble, "D L' B' D2 L U2 R' U' F R U' F2");
        assert!(twelve.scramble.starts_with(&five.scramble));
    }

    #[test]
    fn single_move_scramble() {
        let scramble = generate_scramble_sync(1, 3, Some("q")).unwrap();
        assert_eq!(scramble.scramble, "D2");
    }

    #[test]
    fn zero_moves_is_an_empty_scramble() {
        let scramble = generate_scramble_sync(0, 3, Some("anything")).unwrap();

        assert!(scramble.moves.is_empty());
        assert_eq!(scramble.scramble, "");
    }

    #[test]
    fn big_cubes_gain_depth_prefixes() {
        let scramble = generate_scramble_sync(8, 5, Some("big-cube-seed")).unwrap();
        assert_eq!(scramble.scramble, "R2 D' 2U' B R' 3F' U D'");
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_scramble_sync(20, 4, Some("repeat")).unwrap();
        let b = generate_scramble_sync(20, 4, Some("repeat")).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn round_trip_verifies() {
        let scramble = generate_scramble_sync(12, 3, Some("round-trip")).unwrap();

        assert!(verify_scramble_sync(&scramble.token, &scramble.scramble, 12, 3).unwrap());
    }

    #[test]
    fn tampered_scramble_fails_verification() {
        let scramble = generate_scramble_sync(5, 3, Some("test-seed")).unwrap();
        let tampered = scramble.scramble.replacen('D', "U", 1);

        assert_ne!(tampered, scramble.scramble);
        assert!(!verify_scramble_sync(&scramble.token, &tampered, 5, 3).unwrap());
    }

    #[test]
    fn wrong_count_fails_verification() {
        let scramble = generate_scramble_sync(5, 3, Some("test-seed")).unwrap();

        assert!(!verify_scramble_sync(&scramble.token, &scramble.scramble, 6, 3).unwrap());
    }

    #[test]
    fn zero_cube_size_is_rejected() {
        let generated = generate_scramble_sync(5, 0, Some("s"));
        let verified = verify_scramble_sync("s", "R U", 2, 0);

        assert_eq!(generated, Err(ScrambleError::InvalidCubeSize { size: 0 }));
        assert_eq!(verified, Err(ScrambleError::InvalidCubeSize { size: 0 }));
    }

    #[test]
    fn unseeded_generation_mints_a_hex_token() {
        let scramble = generate_scramble_sync_with(&FixedEnv, 3, 3, None).unwrap();

        assert_eq!(
            scramble.token,
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        );
        assert_eq!(scramble.scramble, "U' L' F");
        assert!(verify_scramble_sync(&scramble.token, &scramble.scramble, 3, 3).unwrap());
    }

    #[test]
    fn retry_numbers_concatenate_digits() {
        assert_eq!(retry_number(0, 1), 1);
        assert_eq!(retry_number(0, 10), 10);
        assert_eq!(retry_number(3, 1), 31);
        assert_eq!(retry_number(9, 12), 912);
        assert_eq!(retry_number(12, 10), 1210);
    }

    #[test]
    fn sub_keys_append_the_decision_digit() {
        assert_eq!(sub_key("seed", 0, 1), "seed01");
        assert_eq!(sub_key("seed", 3, 2), "seed32");
        assert_eq!(slot_key("seed", 3), "seed3");
    }

    proptest! {
        #[test]
        fn sequences_are_prefix_stable(seed in "[a-z0-9]{1,16}", count in 0u32..20) {
            // Later moves never influence earlier ones, so extending a
            // scramble only appends.
            let shorter = generate_scramble_sync(count, 3, Some(&seed)).unwrap();
            let longer = generate_scramble_sync(count + 1, 3, Some(&seed)).unwrap();

            prop_assert_eq!(&longer.moves[..count as usize], &shorter.moves[..]);
        }
    }

    #[tokio::test]
    async fn async_generate_matches_sync() {
        let sync = generate_scramble_sync(7, 3, Some("async-seed")).unwrap();
        let wrapped = generate_scramble(7, 3, Some("async-seed")).await.unwrap();

        assert_eq!(sync, wrapped);
    }

    #[tokio::test]
    async fn async_verify_round_trips() {
        let scramble = generate_scramble(6, 4, Some("async-verify")).await.unwrap();

        assert!(verify_scramble(&scramble.token, &scramble.scramble, 6, 4).await.unwrap());
    }
}
