//! Testing harness for scramble generation.
//!
//! # Model-Based Testing
//!
//! The `model` module replays the face-group rule independently of the
//! generator and serves as the oracle for the no-repeat-axis property:
//! generated sequences are fed through the model, which flags any move whose
//! face was still in the recent set when it was chosen.
//!
//! The `fault` module corrupts scramble strings reproducibly from a seed for
//! tamper-rejection tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fault;
pub mod model;

pub use fault::Corruptor;
pub use model::{FaceLog, first_conflict};
