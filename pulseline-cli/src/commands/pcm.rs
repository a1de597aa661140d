use anyhow::{Context, Result};
use pulseline_core::modulator::pcm_encode;
use pulseline_core::types::symbols_to_string;
use std::fs;
use tracing::info;

use super::read_samples;

pub fn execute(
    input: Option<&str>,
    samples: Option<&str>,
    bits_per_sample: u32,
    output: Option<&str>,
) -> Result<()> {
    let values = read_samples(input, samples)?;
    info!(
        "PCM encoding {} samples at {} bits/sample",
        values.len(),
        bits_per_sample
    );

    let symbols = pcm_encode(&values, bits_per_sample).context("PCM encoding failed")?;
    let bits = symbols_to_string(&symbols);

    println!("PCM: {}", bits);

    if let Some(path) = output {
        fs::write(path, &bits).with_context(|| format!("Failed to write output: {}", path))?;
        info!("Wrote {} symbols to {}", symbols.len(), path);
    }

    Ok(())
}
