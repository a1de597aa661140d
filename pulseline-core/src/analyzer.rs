//! Read-only sequence analytics
//!
//! Standalone reporting passes over the core's public sequence types:
//! a longest-palindromic-subsequence finder for symbol streams and a
//! longest-neutral-run finder for pulse trains. Neither touches encoder
//! or scrambler state.

use crate::types::{PulseTrain, Symbol};
use alloc::vec;
use alloc::vec::Vec;

/// Location of the longest palindromic substring in a symbol sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalindromeSpan {
    /// Start index in the symbol sequence
    pub start: usize,
    /// Length in symbols (at least 1 for non-empty input)
    pub len: usize,
}

impl PalindromeSpan {
    /// The palindromic slice of `symbols` this span points into
    pub fn slice<'a>(&self, symbols: &'a [Symbol]) -> &'a [Symbol] {
        &symbols[self.start..self.start + self.len]
    }
}

/// Find the longest palindromic substring using Manacher's algorithm
///
/// Runs in linear time over a separator-interleaved copy of the input.
/// Returns `None` only for an empty sequence; any single symbol is a
/// palindrome of length 1.
pub fn longest_palindrome(symbols: &[Symbol]) -> Option<PalindromeSpan> {
    if symbols.is_empty() {
        return None;
    }

    // Interleave separators and add unequal sentinels so expansion never
    // needs explicit bounds checks: ^|s0|s1|...|$
    let mut interleaved = Vec::with_capacity(2 * symbols.len() + 3);
    interleaved.push(b'^');
    for s in symbols {
        interleaved.push(b'|');
        interleaved.push(s.as_char() as u8);
    }
    interleaved.push(b'|');
    interleaved.push(b'$');

    let t_len = interleaved.len();
    let mut radii = vec![0usize; t_len];
    let mut center = 0usize;
    let mut right = 0usize;

    let mut max_len = 1usize;
    let mut start = 0usize;

    for i in 1..t_len - 1 {
        if i < right {
            let mirror = 2 * center - i;
            radii[i] = radii[mirror].min(right - i);
        }
        while interleaved[i + radii[i] + 1] == interleaved[i - radii[i] - 1] {
            radii[i] += 1;
        }
        if i + radii[i] > right {
            center = i;
            right = i + radii[i];
        }
        if radii[i] > max_len {
            max_len = radii[i];
            start = (i - radii[i]) / 2;
        }
    }

    Some(PalindromeSpan {
        start,
        len: max_len,
    })
}

/// Location of the longest run of NEUTRAL slots in a pulse train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroRun {
    /// Start slot of the run
    pub start: usize,
    /// Run length in slots
    pub len: usize,
}

/// Find the longest run of NEUTRAL pulses
///
/// Returns `None` when the train contains no NEUTRAL slot. A run touching
/// the end of the train is reported with its correct start position.
pub fn longest_zero_run(train: &PulseTrain) -> Option<ZeroRun> {
    let mut best: Option<ZeroRun> = None;
    let mut count = 0usize;
    let mut current_start = 0usize;

    for (i, level) in train.iter().enumerate() {
        if level.is_neutral() {
            if count == 0 {
                current_start = i;
            }
            count += 1;
        } else {
            if count > best.map_or(0, |r| r.len) {
                best = Some(ZeroRun {
                    start: current_start,
                    len: count,
                });
            }
            count = 0;
        }
    }

    if count > best.map_or(0, |r| r.len) {
        best = Some(ZeroRun {
            start: current_start,
            len: count,
        });
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, LineCode};
    use crate::types::{parse_symbols, symbols_to_string, PulseLevel};

    #[test]
    fn test_palindrome_in_1101() {
        let symbols = parse_symbols("1101").unwrap();
        let span = longest_palindrome(&symbols).unwrap();
        assert_eq!(span, PalindromeSpan { start: 1, len: 3 });
        assert_eq!(symbols_to_string(span.slice(&symbols)), "101");
    }

    #[test]
    fn test_palindrome_even_length() {
        let symbols = parse_symbols("100110").unwrap();
        let span = longest_palindrome(&symbols).unwrap();
        assert_eq!(symbols_to_string(span.slice(&symbols)), "0110");
    }

    #[test]
    fn test_palindrome_whole_input() {
        let symbols = parse_symbols("10101").unwrap();
        let span = longest_palindrome(&symbols).unwrap();
        assert_eq!(span, PalindromeSpan { start: 0, len: 5 });
    }

    #[test]
    fn test_palindrome_degenerate_cases() {
        assert_eq!(longest_palindrome(&[]), None);
        let single = parse_symbols("1").unwrap();
        assert_eq!(
            longest_palindrome(&single),
            Some(PalindromeSpan { start: 0, len: 1 })
        );
        // No palindrome longer than one symbol.
        let two = parse_symbols("10").unwrap();
        assert_eq!(
            longest_palindrome(&two),
            Some(PalindromeSpan { start: 0, len: 1 })
        );
    }

    #[test]
    fn test_zero_run_in_ami_train() {
        let symbols = parse_symbols("1000100001").unwrap();
        let train = encode(LineCode::Ami, &symbols).unwrap();
        assert_eq!(
            longest_zero_run(&train),
            Some(ZeroRun { start: 5, len: 4 })
        );
    }

    #[test]
    fn test_zero_run_at_end_reports_correct_start() {
        let symbols = parse_symbols("110000").unwrap();
        let train = encode(LineCode::Ami, &symbols).unwrap();
        assert_eq!(
            longest_zero_run(&train),
            Some(ZeroRun { start: 2, len: 4 })
        );
    }

    #[test]
    fn test_zero_run_absent() {
        let train = PulseTrain::from_levels(alloc::vec![PulseLevel::High, PulseLevel::Low]);
        assert_eq!(longest_zero_run(&train), None);
    }
}
