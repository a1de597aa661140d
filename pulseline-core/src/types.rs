//! Core types for Pulseline sequences

use crate::error::SignalError;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A binary symbol in a source sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Binary zero
    Zero,
    /// Binary one
    One,
}

impl Symbol {
    /// Parse a single symbol from a character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            _ => None,
        }
    }

    /// Character representation ('0' or '1')
    pub const fn as_char(&self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }

    /// Check if this symbol is a binary one
    pub const fn is_one(&self) -> bool {
        matches!(self, Symbol::One)
    }
}

/// Parse a symbol sequence from a string of '0'/'1' characters
///
/// Rejects empty strings and any character outside the binary alphabet;
/// no partial sequence is returned on failure.
pub fn parse_symbols(s: &str) -> Result<Vec<Symbol>, SignalError> {
    if s.is_empty() {
        return Err(SignalError::EmptyInput);
    }

    s.chars()
        .enumerate()
        .map(|(position, c)| {
            Symbol::from_char(c).ok_or(SignalError::InvalidSymbol { position, found: c })
        })
        .collect()
}

/// Render a symbol sequence as a '0'/'1' string
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(Symbol::as_char).collect()
}

/// A single slot of the ternary signal alphabet
///
/// `Neutral` only ever appears in AMI-family outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PulseLevel {
    /// Positive pulse (+1)
    High,
    /// Negative pulse (-1)
    Low,
    /// Zero level (0)
    Neutral,
}

impl PulseLevel {
    /// Signed integer representation: +1, -1 or 0
    pub const fn as_i8(&self) -> i8 {
        match self {
            PulseLevel::High => 1,
            PulseLevel::Low => -1,
            PulseLevel::Neutral => 0,
        }
    }

    /// Flip polarity; `Neutral` is its own inverse
    pub const fn invert(&self) -> Self {
        match self {
            PulseLevel::High => PulseLevel::Low,
            PulseLevel::Low => PulseLevel::High,
            PulseLevel::Neutral => PulseLevel::Neutral,
        }
    }

    /// Check if this is the zero level
    pub const fn is_neutral(&self) -> bool {
        matches!(self, PulseLevel::Neutral)
    }
}

/// An ordered sequence of pulse levels produced by the line encoder
///
/// Single-level schemes produce one slot per symbol; the Manchester
/// variants produce two. The train is owned exclusively by the caller
/// after production; only the scrambler mutates it, in place, through a
/// mutable borrow for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseTrain {
    pub(crate) levels: Vec<PulseLevel>,
}

impl PulseTrain {
    /// Build a train from explicit levels
    pub fn from_levels(levels: Vec<PulseLevel>) -> Self {
        Self { levels }
    }

    /// Number of pulse slots
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check whether the train has no slots
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at a slot, if in bounds
    pub fn get(&self, index: usize) -> Option<PulseLevel> {
        self.levels.get(index).copied()
    }

    /// The slots as a slice
    pub fn as_slice(&self) -> &[PulseLevel] {
        &self.levels
    }

    /// Signed integer rendition of the train (+1/-1/0 per slot)
    pub fn to_i8(&self) -> Vec<i8> {
        self.levels.iter().map(PulseLevel::as_i8).collect()
    }

    /// Iterate over the slots
    pub fn iter(&self) -> core::slice::Iter<'_, PulseLevel> {
        self.levels.iter()
    }
}

impl<'a> IntoIterator for &'a PulseTrain {
    type Item = &'a PulseLevel;
    type IntoIter = core::slice::Iter<'a, PulseLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_symbols_valid() {
        let symbols = parse_symbols("1101").unwrap();
        assert_eq!(
            symbols,
            vec![Symbol::One, Symbol::One, Symbol::Zero, Symbol::One]
        );
        assert_eq!(symbols_to_string(&symbols), "1101");
    }

    #[test]
    fn test_parse_symbols_rejects_empty() {
        assert_eq!(parse_symbols(""), Err(SignalError::EmptyInput));
    }

    #[test]
    fn test_parse_symbols_rejects_garbage() {
        assert_eq!(
            parse_symbols("10x1"),
            Err(SignalError::InvalidSymbol {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_pulse_level_invert() {
        assert_eq!(PulseLevel::High.invert(), PulseLevel::Low);
        assert_eq!(PulseLevel::Low.invert(), PulseLevel::High);
        assert_eq!(PulseLevel::Neutral.invert(), PulseLevel::Neutral);
    }

    #[test]
    fn test_pulse_train_to_i8() {
        let train = PulseTrain::from_levels(vec![
            PulseLevel::High,
            PulseLevel::Neutral,
            PulseLevel::Low,
        ]);
        assert_eq!(train.to_i8(), vec![1, 0, -1]);
        assert_eq!(train.len(), 3);
        assert_eq!(train.get(1), Some(PulseLevel::Neutral));
        assert_eq!(train.get(3), None);
    }
}
