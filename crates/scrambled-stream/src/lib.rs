//! Scrambled Draw Streams
//!
//! This crate provides the deterministic draw primitives behind scramble
//! generation and verification.
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects and
//! produce deterministic outputs given the same inputs. Every decision in a
//! scramble is a fresh draw from a stream identified by a textual key; a
//! stream is reseeded per lookup and yields exactly one value, so nothing is
//! continuously advanced between draws.
//!
//! # Portability
//!
//! Verification compares regenerated text byte-for-byte, which makes the
//! key-to-value mapping part of the wire contract. The derivation is frozen:
//! the first 8 bytes of SHA-256 over the key bytes, read big-endian. It has
//! no platform-, process-, or release-dependent behavior.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod keyed;

pub use keyed::{StreamError, coin, derive_u64, draw_index};
