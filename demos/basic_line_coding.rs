//! Basic line coding example

use pulseline_core::encoder::{encode, LineCode};
use pulseline_core::scrambler::{scramble, ZeroSubstitution};
use pulseline_core::types::parse_symbols;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Pulseline Basic Line Coding Example\n");

    let symbols = parse_symbols("11000000001101")?;

    for code in [
        LineCode::NrzL,
        LineCode::NrzI,
        LineCode::Manchester,
        LineCode::DiffManchester,
        LineCode::Ami,
    ] {
        let train = encode(code, &symbols)?;
        println!("{:<24} {:?}", code.name(), train.to_i8());
    }

    // The AMI train contains an 8-zero run: scramble it both ways.
    for sub in [ZeroSubstitution::B8zs, ZeroSubstitution::Hdb3] {
        let mut train = encode(LineCode::Ami, &symbols)?;
        scramble(sub, &symbols, &mut train)?;
        println!("{:<24} {:?}", format!("AMI + {}", sub.name()), train.to_i8());
    }

    Ok(())
}
