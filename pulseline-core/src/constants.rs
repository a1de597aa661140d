//! Constants and limits for the Pulseline coding schemes

use crate::types::PulseLevel;

/// Initial level for NRZ-I before the first symbol is processed
pub const NRZI_INITIAL_LEVEL: PulseLevel = PulseLevel::Low;

/// Initial start-of-interval level for Differential Manchester
pub const DIFF_MANCHESTER_INITIAL_LEVEL: PulseLevel = PulseLevel::Low;

/// Polarity of the first mark (binary ONE) in an AMI train
pub const AMI_INITIAL_POLARITY: PulseLevel = PulseLevel::High;

/// Zero-run length that triggers a B8ZS substitution
pub const B8ZS_RUN_LENGTH: usize = 8;

/// Zero-run length that triggers an HDB3 substitution
pub const HDB3_RUN_LENGTH: usize = 4;

/// Fixed step size used by the delta modulator
pub const DELTA_STEP: f64 = 0.5;

/// Widest PCM code word supported (quantized indices must fit in u64
/// and a step must remain representable)
pub const MAX_PCM_BITS: u32 = 32;
