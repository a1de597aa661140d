//! CLI subcommand implementations

pub mod analyze;
pub mod dm;
pub mod encode;
pub mod pcm;

use anyhow::{bail, Context, Result};
use std::fs;

/// Read analog samples from a JSON file or an inline comma-separated list
///
/// Exactly one of the two sources must be supplied.
pub(crate) fn read_samples(input: Option<&str>, samples: Option<&str>) -> Result<Vec<f64>> {
    match (input, samples) {
        (Some(path), None) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path))?;
            let values: Vec<f64> = serde_json::from_str(&content)
                .with_context(|| "Failed to parse JSON sample array")?;
            Ok(values)
        }
        (None, Some(list)) => list
            .split(',')
            .map(|item| {
                item.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Invalid sample value: {:?}", item))
            })
            .collect(),
        _ => bail!("Supply exactly one of --input or --samples"),
    }
}
