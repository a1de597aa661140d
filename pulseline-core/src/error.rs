//! Error types for Pulseline operations

/// Errors that can occur during encoding, scrambling or modulation
///
/// Every failure is a local, recoverable invalid-input condition: operations
/// are deterministic and pure, so retrying with the same input fails
/// identically, and no partial output is ever returned alongside an error.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Input sequence was empty where at least one element is required
    #[cfg_attr(feature = "std", error("Input sequence is empty"))]
    EmptyInput,

    /// A character outside {'0', '1'} appeared in a symbol string
    #[cfg_attr(
        feature = "std",
        error("Invalid symbol {found:?} at position {position}: expected '0' or '1'")
    )]
    InvalidSymbol {
        /// Position of the offending character.
        position: usize,
        /// The character actually found.
        found: char,
    },

    /// PCM bit width outside the supported range
    #[cfg_attr(feature = "std", error("Invalid PCM bit width {0}: must be in 1..=32"))]
    InvalidBitWidth(u32),

    /// All samples share one value, so the quantization step is undefined
    #[cfg_attr(feature = "std", error("Degenerate sample range: max equals min"))]
    DegenerateRange,

    /// Pulse train length does not match the symbol sequence it claims to encode
    #[cfg_attr(
        feature = "std",
        error("Length mismatch: {symbols} symbols but {pulses} pulses")
    )]
    LengthMismatch {
        /// Number of symbols supplied.
        symbols: usize,
        /// Number of pulse slots supplied.
        pulses: usize,
    },

    /// Pulse train is not a valid AMI encoding of the symbol sequence
    #[cfg_attr(
        feature = "std",
        error("Pulse train is not the AMI encoding of the symbols (first divergence at slot {position})")
    )]
    NotAmiEncoded {
        /// First slot where the train diverges from the expected AMI output.
        position: usize,
    },
}
