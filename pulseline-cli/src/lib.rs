//! Library entry for pulseline-cli used by integration tests and embedding.

pub mod commands;
pub mod render;

use pulseline_core::encoder::LineCode;
use pulseline_core::scrambler::ZeroSubstitution;

/// Line coding scheme selector for the command line
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum CodeArg {
    /// Non-return-to-zero level
    NrzL,
    /// Non-return-to-zero inverted
    NrzI,
    /// Manchester
    Manchester,
    /// Differential Manchester
    DiffManchester,
    /// Alternate mark inversion
    Ami,
}

impl From<CodeArg> for LineCode {
    fn from(arg: CodeArg) -> Self {
        match arg {
            CodeArg::NrzL => LineCode::NrzL,
            CodeArg::NrzI => LineCode::NrzI,
            CodeArg::Manchester => LineCode::Manchester,
            CodeArg::DiffManchester => LineCode::DiffManchester,
            CodeArg::Ami => LineCode::Ami,
        }
    }
}

/// Zero-substitution scheme selector for the command line
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum ScrambleArg {
    /// Bipolar with 8-zero substitution
    B8zs,
    /// High-density bipolar of order 3
    Hdb3,
}

impl From<ScrambleArg> for ZeroSubstitution {
    fn from(arg: ScrambleArg) -> Self {
        match arg {
            ScrambleArg::B8zs => ZeroSubstitution::B8zs,
            ScrambleArg::Hdb3 => ZeroSubstitution::Hdb3,
        }
    }
}

// Re-export commonly used items
pub use crate::commands::encode;
