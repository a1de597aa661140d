//! Line coding: mapping binary symbols to ternary pulse levels
//!
//! Five schemes are supported. NRZ-L is stateless; the rest carry a small
//! amount of running state (a current level or an alternation polarity)
//! that lives only for the duration of one encode pass.

use crate::constants::{AMI_INITIAL_POLARITY, DIFF_MANCHESTER_INITIAL_LEVEL, NRZI_INITIAL_LEVEL};
use crate::error::SignalError;
use crate::types::{PulseLevel, PulseTrain, Symbol};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Line coding scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCode {
    /// Non-return-to-zero level: HIGH for ONE, LOW for ZERO
    NrzL,
    /// Non-return-to-zero inverted: toggle on ONE, hold on ZERO
    NrzI,
    /// Manchester: mid-bit transition encodes the symbol value
    Manchester,
    /// Differential Manchester: start-of-bit transition encodes ZERO
    DiffManchester,
    /// Alternate mark inversion: bipolar marks, neutral spaces
    Ami,
}

impl LineCode {
    /// Number of pulse slots produced for `n` input symbols
    ///
    /// The Manchester variants emit two half-bit slots per symbol; every
    /// other scheme emits exactly one.
    pub const fn output_len(&self, n: usize) -> usize {
        match self {
            LineCode::Manchester | LineCode::DiffManchester => 2 * n,
            _ => n,
        }
    }

    /// Whether the scheme doubles each symbol into two half-bit slots
    pub const fn is_transition_coded(&self) -> bool {
        matches!(self, LineCode::Manchester | LineCode::DiffManchester)
    }

    /// Human-readable scheme name
    pub const fn name(&self) -> &'static str {
        match self {
            LineCode::NrzL => "NRZ-L",
            LineCode::NrzI => "NRZ-I",
            LineCode::Manchester => "Manchester",
            LineCode::DiffManchester => "Differential Manchester",
            LineCode::Ami => "AMI",
        }
    }
}

/// Encode a symbol sequence into a freshly allocated pulse train
///
/// Fails with [`SignalError::EmptyInput`] for an empty sequence; no partial
/// output is returned. The output buffer is sized exactly to
/// `code.output_len(symbols.len())`.
pub fn encode(code: LineCode, symbols: &[Symbol]) -> Result<PulseTrain, SignalError> {
    if symbols.is_empty() {
        return Err(SignalError::EmptyInput);
    }

    #[cfg(feature = "logging")]
    debug!(
        "Encoding {} symbols with {} ({} output slots)",
        symbols.len(),
        code.name(),
        code.output_len(symbols.len())
    );

    let levels = match code {
        LineCode::NrzL => encode_nrz_l(symbols),
        LineCode::NrzI => encode_nrz_i(symbols),
        LineCode::Manchester => encode_manchester(symbols),
        LineCode::DiffManchester => encode_diff_manchester(symbols),
        LineCode::Ami => encode_ami(symbols),
    };

    Ok(PulseTrain::from_levels(levels))
}

/// NRZ-L: HIGH iff the symbol is ONE, no state across positions
fn encode_nrz_l(symbols: &[Symbol]) -> Vec<PulseLevel> {
    symbols
        .iter()
        .map(|s| match s {
            Symbol::One => PulseLevel::High,
            Symbol::Zero => PulseLevel::Low,
        })
        .collect()
}

/// NRZ-I: flip the running level before emitting on ONE, hold it on ZERO
fn encode_nrz_i(symbols: &[Symbol]) -> Vec<PulseLevel> {
    let mut level = NRZI_INITIAL_LEVEL;
    symbols
        .iter()
        .map(|s| {
            if s.is_one() {
                level = level.invert();
            }
            level
        })
        .collect()
}

/// Manchester: ZERO -> (HIGH, LOW), ONE -> (LOW, HIGH)
///
/// Every symbol yields two unequal half-bit levels, so a transition always
/// occurs mid-bit (the self-clocking invariant).
fn encode_manchester(symbols: &[Symbol]) -> Vec<PulseLevel> {
    let mut levels = Vec::with_capacity(2 * symbols.len());
    for s in symbols {
        match s {
            Symbol::Zero => {
                levels.push(PulseLevel::High);
                levels.push(PulseLevel::Low);
            }
            Symbol::One => {
                levels.push(PulseLevel::Low);
                levels.push(PulseLevel::High);
            }
        }
    }
    levels
}

/// Differential Manchester: ZERO transitions at the interval start, ONE
/// does not; the level always flips again after each symbol so the
/// mid-bit transition is unconditional.
fn encode_diff_manchester(symbols: &[Symbol]) -> Vec<PulseLevel> {
    let mut prev_level = DIFF_MANCHESTER_INITIAL_LEVEL;
    let mut levels = Vec::with_capacity(2 * symbols.len());
    for s in symbols {
        if !s.is_one() {
            prev_level = prev_level.invert();
        }
        levels.push(prev_level);
        levels.push(prev_level.invert());
        prev_level = prev_level.invert();
    }
    levels
}

/// AMI: ZERO -> NEUTRAL, ONE -> alternating polarity starting HIGH
fn encode_ami(symbols: &[Symbol]) -> Vec<PulseLevel> {
    let mut last_polarity = AMI_INITIAL_POLARITY;
    symbols
        .iter()
        .map(|s| match s {
            Symbol::Zero => PulseLevel::Neutral,
            Symbol::One => {
                let pulse = last_polarity;
                last_polarity = last_polarity.invert();
                pulse
            }
        })
        .collect()
}
