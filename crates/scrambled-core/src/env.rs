//! Entropy seam for seed-token creation.
//!
//! The `Environment` trait decouples unseeded generation from the OS entropy
//! source. Production code uses [`SystemEnv`]; tests substitute deterministic
//! implementations so token creation is reproducible.
//!
//! # Invariants
//!
//! - Unpredictability in production: `random_bytes()` draws from a
//!   cryptographically secure source
//! - Isolation: implementations must not share mutable state across calls

/// Number of random bytes behind an auto-created seed token.
pub const SEED_TOKEN_BYTES: usize = 32;

/// Abstract source of randomness for unseeded generation.
///
/// Seeded generation and verification never consult the environment; it
/// exists only to mint fresh tokens.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Creates a fresh seed token: 32 random bytes as 64 hex characters.
    fn seed_token(&self) -> String {
        let mut bytes = [0u8; SEED_TOKEN_BYTES];
        self.random_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

/// Production environment backed by the OS entropy pool.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).unwrap_or_else(|e| {
            // Entropy exhaustion should not happen on supported platforms.
            // Log and zero-fill; the caller still receives a syntactically
            // valid token.
            tracing::error!("getrandom failed: {}", e);
            buffer.fill(0);
        });
    }
}
