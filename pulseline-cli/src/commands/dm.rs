use anyhow::{Context, Result};
use pulseline_core::modulator::delta_mod_encode;
use pulseline_core::types::symbols_to_string;
use std::fs;
use tracing::info;

use super::read_samples;

pub fn execute(input: Option<&str>, samples: Option<&str>, output: Option<&str>) -> Result<()> {
    let values = read_samples(input, samples)?;
    info!("Delta-modulating {} samples", values.len());

    let symbols = delta_mod_encode(&values);
    let bits = symbols_to_string(&symbols);

    println!("DM: {}", bits);

    if let Some(path) = output {
        fs::write(path, &bits).with_context(|| format!("Failed to write output: {}", path))?;
        info!("Wrote {} symbols to {}", symbols.len(), path);
    }

    Ok(())
}
