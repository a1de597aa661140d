use anyhow::{bail, Context, Result};
use pulseline_core::analyzer::{longest_palindrome, longest_zero_run};
use pulseline_core::encoder::{encode, LineCode};
use pulseline_core::scrambler::{scramble, ZeroSubstitution};
use pulseline_core::types::{parse_symbols, symbols_to_string};
use serde::Serialize;
use std::fs;
use tracing::info;

use crate::render::render_pulse_train;

/// JSON rendition of an encoded signal
#[derive(Serialize)]
struct SignalDump<'a> {
    code: &'a str,
    scramble: Option<&'a str>,
    symbols: String,
    levels: Vec<i8>,
}

pub fn execute(
    symbols: &str,
    code: LineCode,
    substitution: Option<ZeroSubstitution>,
    analyze: bool,
    json: Option<&str>,
) -> Result<()> {
    let parsed = parse_symbols(symbols).context("Invalid symbol stream")?;

    if substitution.is_some() && code != LineCode::Ami {
        bail!("Scrambling is only defined for AMI-encoded trains");
    }

    let mut train = encode(code, &parsed).context("Encoding failed")?;
    info!(
        "Encoded {} symbols into {} pulse slots with {}",
        parsed.len(),
        train.len(),
        code.name()
    );

    let title = match substitution {
        Some(sub) => {
            scramble(sub, &parsed, &mut train).context("Scrambling failed")?;
            info!("Applied {} substitution", sub.name());
            format!("{} with {}", code.name(), sub.name())
        }
        None => format!("{} Encoding", code.name()),
    };

    print!("{}", render_pulse_train(&train, &title));

    if analyze {
        match longest_palindrome(&parsed) {
            Some(span) => println!(
                "Longest palindrome: {} (length {}, position {})",
                symbols_to_string(span.slice(&parsed)),
                span.len,
                span.start
            ),
            None => println!("Longest palindrome: none"),
        }

        match longest_zero_run(&train) {
            Some(run) => println!(
                "Longest zero run: {} slots starting at position {}",
                run.len, run.start
            ),
            None => println!("Longest zero run: none"),
        }
    }

    if let Some(path) = json {
        let dump = SignalDump {
            code: code.name(),
            scramble: substitution.map(|s| s.name()),
            symbols: symbols_to_string(&parsed),
            levels: train.to_i8(),
        };
        let serialized = serde_json::to_string_pretty(&dump)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write JSON output: {}", path))?;
        info!("Wrote signal dump to {}", path);
    }

    Ok(())
}
