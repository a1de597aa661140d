//! Zero-run substitution over AMI pulse trains (B8ZS, HDB3)
//!
//! Both scramblers rewrite qualifying zero-runs into fixed patterns that
//! contain deliberate bipolar violations, bounding the longest neutral run
//! while staying recognizable (and reversible) to a conformant decoder.
//!
//! The `flag`/`prev`/`zero_count` update rules deliberately diverge from
//! the canonical ITU definitions in a few corners; see DESIGN.md before
//! changing any of them.

use crate::constants::{AMI_INITIAL_POLARITY, B8ZS_RUN_LENGTH, HDB3_RUN_LENGTH};
use crate::error::SignalError;
use crate::types::{PulseLevel, PulseTrain, Symbol};

#[cfg(feature = "logging")]
use tracing::debug;

/// Zero-substitution scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ZeroSubstitution {
    /// Bipolar with 8-zero substitution
    B8zs,
    /// High-density bipolar of order 3
    Hdb3,
}

impl ZeroSubstitution {
    /// Zero-run length that triggers a substitution
    pub const fn run_length(&self) -> usize {
        match self {
            ZeroSubstitution::B8zs => B8ZS_RUN_LENGTH,
            ZeroSubstitution::Hdb3 => HDB3_RUN_LENGTH,
        }
    }

    /// Human-readable scheme name
    pub const fn name(&self) -> &'static str {
        match self {
            ZeroSubstitution::B8zs => "B8ZS",
            ZeroSubstitution::Hdb3 => "HDB3",
        }
    }
}

/// Scramble an AMI pulse train in place
///
/// `pulses` must be the AMI encoding of `symbols`: same length, NEUTRAL
/// exactly at the zero symbols, marks strictly alternating from HIGH. Both
/// preconditions are checked up front and nothing is mutated on failure.
///
/// The pass is single-pass and in-place: no reallocation, every slot is
/// re-derived while scanning. For HDB3 this matters beyond the substituted
/// runs, because a substitution re-seeds the alternation sense and later
/// ONE pulses must follow the injected violation rather than the original
/// AMI alternation.
pub fn scramble(
    code: ZeroSubstitution,
    symbols: &[Symbol],
    pulses: &mut PulseTrain,
) -> Result<(), SignalError> {
    if symbols.is_empty() {
        return Err(SignalError::EmptyInput);
    }

    verify_ami(symbols, pulses)?;

    #[cfg(feature = "logging")]
    debug!(
        "Scrambling {} slots with {} (run length {})",
        pulses.len(),
        code.name(),
        code.run_length()
    );

    match code {
        ZeroSubstitution::B8zs => scramble_b8zs(symbols, &mut pulses.levels),
        ZeroSubstitution::Hdb3 => scramble_hdb3(symbols, &mut pulses.levels),
    }

    Ok(())
}

/// Check that `pulses` is the AMI encoding of `symbols`
///
/// Scrambling a train produced by any other scheme has no defined
/// meaning, so it is rejected as an explicit invalid-input error.
fn verify_ami(symbols: &[Symbol], pulses: &PulseTrain) -> Result<(), SignalError> {
    if symbols.len() != pulses.len() {
        return Err(SignalError::LengthMismatch {
            symbols: symbols.len(),
            pulses: pulses.len(),
        });
    }

    let mut expected_mark = AMI_INITIAL_POLARITY;
    for (position, (symbol, level)) in symbols.iter().zip(pulses.iter()).enumerate() {
        let expected = match symbol {
            Symbol::Zero => PulseLevel::Neutral,
            Symbol::One => {
                let mark = expected_mark;
                expected_mark = expected_mark.invert();
                mark
            }
        };
        if *level != expected {
            return Err(SignalError::NotAmiEncoded { position });
        }
    }

    Ok(())
}

/// B8ZS: replace each run of exactly 8 zeros with 000VB0VB
///
/// `flag` is the polarity the next mark would take (true = HIGH); the run
/// pattern is keyed off it so successive substitutions alternate sign and
/// the 8 slots stay DC-balanced.
fn scramble_b8zs(symbols: &[Symbol], slots: &mut [PulseLevel]) {
    let mut zero_count = 0usize;
    let mut flag = true;

    for (i, symbol) in symbols.iter().enumerate() {
        if symbol.is_one() {
            slots[i] = if flag { PulseLevel::High } else { PulseLevel::Low };
            zero_count = 0;
            flag = !flag;
        } else {
            slots[i] = PulseLevel::Neutral;
            zero_count += 1;
        }

        if zero_count == B8ZS_RUN_LENGTH {
            // Run-relative offsets 3, 4, 6, 7 of the 8-slot run ending at i.
            let (violation, balance) = if flag {
                (PulseLevel::Low, PulseLevel::High)
            } else {
                (PulseLevel::High, PulseLevel::Low)
            };
            slots[i - 4] = violation;
            slots[i - 3] = balance;
            slots[i - 1] = balance;
            slots[i] = violation;
            zero_count = 0;
        }
    }
}

/// HDB3: replace each run of exactly 4 zeros with 000V or B00V
///
/// `flag` tracks the parity of marks since the last substitution (true =
/// even); `prev` is the alternation sense for the next mark and is re-seeded
/// from the violation just written so regular marks after a substitution
/// continue consistently with it.
fn scramble_hdb3(symbols: &[Symbol], slots: &mut [PulseLevel]) {
    let mut zero_count = 0usize;
    let mut flag = true;
    let mut prev = false;

    for (i, symbol) in symbols.iter().enumerate() {
        if symbol.is_one() {
            slots[i] = if prev { PulseLevel::Low } else { PulseLevel::High };
            zero_count = 0;
            flag = !flag;
            prev = !prev;
        } else {
            slots[i] = PulseLevel::Neutral;
            zero_count += 1;
        }

        if zero_count == HDB3_RUN_LENGTH {
            if flag {
                // Even parity: both ends of the run carry pulses (B00V).
                let pulse = if prev { PulseLevel::Low } else { PulseLevel::High };
                slots[i - 3] = pulse;
                slots[i] = pulse;
            } else {
                // Odd parity: only the last slot violates (000V).
                slots[i] = if prev { PulseLevel::High } else { PulseLevel::Low };
            }
            zero_count = 0;
            flag = true;
            prev = slots[i] == PulseLevel::High;
        }
    }
}
