//! Fuzzing placeholder for the pulseline-core surface
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_encode

use pulseline_core::encoder::{encode, LineCode};
use pulseline_core::modulator::{delta_mod_encode, pcm_encode};
use pulseline_core::scrambler::{scramble, ZeroSubstitution};
use pulseline_core::types::Symbol;

/// Derive a symbol stream from raw bytes (one symbol per bit)
fn symbols_from_bytes(data: &[u8]) -> Vec<Symbol> {
    data.iter()
        .flat_map(|byte| {
            (0..8).map(move |bit| {
                if (byte >> bit) & 1 == 1 {
                    Symbol::One
                } else {
                    Symbol::Zero
                }
            })
        })
        .collect()
}

pub fn fuzz_encode(data: &[u8]) {
    let symbols = symbols_from_bytes(data);

    // Try every scheme - should never panic
    for code in [
        LineCode::NrzL,
        LineCode::NrzI,
        LineCode::Manchester,
        LineCode::DiffManchester,
        LineCode::Ami,
    ] {
        let _ = encode(code, &symbols);
    }
}

pub fn fuzz_scramble(data: &[u8]) {
    let symbols = symbols_from_bytes(data);

    for code in [ZeroSubstitution::B8zs, ZeroSubstitution::Hdb3] {
        if let Ok(mut train) = encode(LineCode::Ami, &symbols) {
            // Scrambling a fresh AMI train - should never panic or fail
            let _ = scramble(code, &symbols, &mut train);
        }
    }
}

pub fn fuzz_pcm(data: &[u8]) {
    // Interpret bytes as coarse sample values
    let samples: Vec<f64> = data.iter().map(|&b| f64::from(b) - 128.0).collect();

    // Try a spread of bit widths, including invalid ones - should never panic
    for bits in [0u32, 1, 4, 8, 16, 32, 33] {
        let _ = pcm_encode(&samples, bits);
    }
    let _ = delta_mod_encode(&samples);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_encode_empty() {
        fuzz_encode(&[]);
    }

    #[test]
    fn test_fuzz_encode_random() {
        fuzz_encode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_scramble_zero_heavy() {
        fuzz_scramble(&[0x00; 16]);
    }

    #[test]
    fn test_fuzz_scramble_random() {
        fuzz_scramble(&[0xA7, 0x00, 0x00, 0x3C]);
    }

    #[test]
    fn test_fuzz_pcm_empty() {
        fuzz_pcm(&[]);
    }

    #[test]
    fn test_fuzz_pcm_random() {
        fuzz_pcm(&[0xFF, 0x00, 0x80, 0x7F]);
    }
}
