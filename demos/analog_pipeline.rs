//! Analog sample → bit stream → pulse train pipeline example

use pulseline_core::analyzer::{longest_palindrome, longest_zero_run};
use pulseline_core::encoder::{encode, LineCode};
use pulseline_core::modulator::{delta_mod_encode, pcm_encode};
use pulseline_core::types::symbols_to_string;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Pulseline Analog Pipeline Example\n");

    // A short synthetic waveform
    let samples: Vec<f64> = (0..16).map(|i| (i as f64 * 0.7).sin() * 3.0).collect();

    // PCM at 3 bits per sample
    let pcm_bits = pcm_encode(&samples, 3)?;
    println!("PCM ({} bits): {}", pcm_bits.len(), symbols_to_string(&pcm_bits));

    // Delta modulation: one bit per sample
    let dm_bits = delta_mod_encode(&samples);
    println!("DM  ({} bits): {}", dm_bits.len(), symbols_to_string(&dm_bits));

    // Line-encode the PCM stream and report analytics
    let train = encode(LineCode::Ami, &pcm_bits)?;
    if let Some(span) = longest_palindrome(&pcm_bits) {
        println!(
            "Longest palindrome in PCM bits: {} (length {})",
            symbols_to_string(span.slice(&pcm_bits)),
            span.len
        );
    }
    if let Some(run) = longest_zero_run(&train) {
        println!(
            "Longest zero run in AMI train: {} slots at position {}",
            run.len, run.start
        );
    }

    Ok(())
}
