use anyhow::{bail, Context, Result};
use colored::*;
use pulseline_core::analyzer::{longest_palindrome, longest_zero_run};
use pulseline_core::types::{parse_symbols, symbols_to_string, PulseLevel, PulseTrain};

pub fn execute(symbols: Option<&str>, signal: Option<&str>) -> Result<()> {
    if symbols.is_none() && signal.is_none() {
        bail!("Supply at least one of --symbols or --signal");
    }

    if let Some(bits) = symbols {
        let parsed = parse_symbols(bits).context("Invalid symbol stream")?;

        println!("\n=== Symbol Analysis ===");
        println!("Symbols:            {}", bits);
        match longest_palindrome(&parsed) {
            Some(span) => {
                println!(
                    "Longest palindrome: {} ({})",
                    symbols_to_string(span.slice(&parsed)).green(),
                    format!("length {}, position {}", span.len, span.start)
                );
            }
            None => println!("Longest palindrome: {}", "none".red()),
        }
    }

    if let Some(levels) = signal {
        let train = parse_signal(levels)?;

        println!("\n=== Signal Analysis ===");
        println!("Slots:              {}", train.len());
        match longest_zero_run(&train) {
            Some(run) => println!(
                "Longest zero run:   {} slots starting at position {}",
                run.len, run.start
            ),
            None => println!("Longest zero run:   {}", "none".green()),
        }
    }

    Ok(())
}

/// Parse a comma-separated list of -1/0/1 levels
fn parse_signal(levels: &str) -> Result<PulseTrain> {
    let parsed: Result<Vec<PulseLevel>> = levels
        .split(',')
        .map(|item| match item.trim() {
            "1" | "+1" => Ok(PulseLevel::High),
            "-1" => Ok(PulseLevel::Low),
            "0" => Ok(PulseLevel::Neutral),
            other => bail!("Invalid signal level: {:?} (expected -1, 0 or 1)", other),
        })
        .collect();

    Ok(PulseTrain::from_levels(parsed?))
}
