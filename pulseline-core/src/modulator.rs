//! Analog-to-digital pre-modulation (PCM, Delta Modulation)
//!
//! Inputs are pre-supplied discrete sample values; no real sampling or
//! channel modeling happens here.

use crate::constants::{DELTA_STEP, MAX_PCM_BITS};
use crate::error::SignalError;
use crate::types::Symbol;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Quantize samples to uniform level indices
///
/// The range is derived from the samples themselves: `levels = 2^bits`,
/// `step = (max - min) / levels`, each sample mapped to
/// `floor((sample - min) / step)` and clamped to `levels - 1` so the
/// boundary case `sample == max` stays in range.
///
/// Exposed separately from [`pcm_encode`] so callers can reverse-map code
/// words back to the indices that were encoded.
pub fn pcm_quantize(samples: &[f64], bits_per_sample: u32) -> Result<Vec<u64>, SignalError> {
    if samples.is_empty() {
        return Err(SignalError::EmptyInput);
    }
    if bits_per_sample == 0 || bits_per_sample > MAX_PCM_BITS {
        return Err(SignalError::InvalidBitWidth(bits_per_sample));
    }

    let mut min = samples[0];
    let mut max = samples[0];
    for &s in &samples[1..] {
        if s > max {
            max = s;
        }
        if s < min {
            min = s;
        }
    }

    if max == min {
        return Err(SignalError::DegenerateRange);
    }

    let levels = 1u64 << bits_per_sample;
    let step = (max - min) / levels as f64;

    #[cfg(feature = "logging")]
    debug!(
        "PCM quantizing {} samples: range [{}, {}], {} levels, step {}",
        samples.len(),
        min,
        max,
        levels,
        step
    );

    let quantized = samples
        .iter()
        .map(|&s| {
            // (s - min) / step is non-negative, so the integer cast
            // truncates toward zero exactly like floor.
            let q = ((s - min) / step) as u64;
            q.min(levels - 1)
        })
        .collect();

    Ok(quantized)
}

/// Pulse code modulation: quantize samples and emit fixed-width code words
///
/// Each quantized index is emitted as `bits_per_sample` symbols, most
/// significant bit first. Output length is `samples.len() * bits_per_sample`.
pub fn pcm_encode(samples: &[f64], bits_per_sample: u32) -> Result<Vec<Symbol>, SignalError> {
    let quantized = pcm_quantize(samples, bits_per_sample)?;

    let mut symbols = Vec::with_capacity(quantized.len() * bits_per_sample as usize);
    for q in quantized {
        for j in (0..bits_per_sample).rev() {
            symbols.push(if (q >> j) & 1 == 1 {
                Symbol::One
            } else {
                Symbol::Zero
            });
        }
    }

    Ok(symbols)
}

/// Delta modulation: one symbol per sample, tracking a running prediction
///
/// The prediction starts at 0.0 and moves by a fixed [`DELTA_STEP`] toward
/// each sample: up (emitting ONE) when the sample is above the prediction,
/// down (emitting ZERO) otherwise. Purely causal; an empty input produces
/// an empty output.
pub fn delta_mod_encode(samples: &[f64]) -> Vec<Symbol> {
    let mut prediction = 0.0f64;
    samples
        .iter()
        .map(|&s| {
            if s > prediction {
                prediction += DELTA_STEP;
                Symbol::One
            } else {
                prediction -= DELTA_STEP;
                Symbol::Zero
            }
        })
        .collect()
}
