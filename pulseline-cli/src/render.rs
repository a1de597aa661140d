//! Console rendering of pulse trains as bar charts
//!
//! External presentation layer over the core's sequence types; consumes a
//! finished [`PulseTrain`] and produces text, nothing more.

use colored::*;
use pulseline_core::{PulseLevel, PulseTrain};

/// Width of one pulse slot in the rendered chart
const SLOT_WIDTH: usize = 4;

/// Render a pulse train as a boxed bar chart plus its signed values
pub fn render_pulse_train(train: &PulseTrain, title: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n\n", title.bold()));

    let border: String = core::iter::repeat('-')
        .take(train.len() * SLOT_WIDTH)
        .collect();

    out.push_str(&format!("+{}+\n", border));

    out.push('|');
    for level in train {
        let bar = match level {
            PulseLevel::High => " ▀▀ ".green().to_string(),
            PulseLevel::Low => " ▄▄ ".red().to_string(),
            PulseLevel::Neutral => " -- ".to_string(),
        };
        out.push_str(&bar);
    }
    out.push_str("|\n");

    out.push_str(&format!("+{}+\n\n", border));

    out.push_str("Signal values: ");
    for value in train.to_i8() {
        out.push_str(&format!("{:>2} ", value));
    }
    out.push('\n');

    out
}
