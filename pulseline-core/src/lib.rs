//! # Pulseline Core
//!
//! A line-coding engine: deterministic, stateful transformation of binary
//! symbol streams (or analog sample vectors digitized into them) into
//! ternary pulse trains under strict per-scheme invariants.
//!
//! ## Modules
//!
//! - `constants`: Scheme constants (initial polarities, run lengths, delta step)
//! - `types`: Core types (Symbol, PulseLevel, PulseTrain)
//! - `encoder`: Line coding (NRZ-L, NRZ-I, Manchester, Differential Manchester, AMI)
//! - `scrambler`: Zero-run substitution over AMI trains (B8ZS, HDB3)
//! - `modulator`: Analog-to-digital pre-modulation (PCM, Delta Modulation)
//! - `analyzer`: Read-only sequence analytics (palindrome search, zero-run search)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod analyzer;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod modulator;
pub mod scrambler;
pub mod types;

// Re-export commonly used types
pub use error::SignalError;
pub use types::{PulseLevel, PulseTrain, Symbol};

/// Result type alias for Pulseline operations
pub type Result<T> = core::result::Result<T, SignalError>;
