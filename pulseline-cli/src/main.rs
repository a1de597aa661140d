use anyhow::Result;
use clap::{Parser, Subcommand};
use pulseline_cli::{commands, CodeArg, ScrambleArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pulseline")]
#[command(about = "Pulseline - Line coding and scrambling signal generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a binary symbol stream into a pulse train
    Encode {
        /// Binary symbol string, e.g. 1101
        #[arg(short, long)]
        symbols: String,

        /// Line coding scheme
        #[arg(short, long, value_enum)]
        code: CodeArg,

        /// Apply a zero-substitution scrambler (AMI only)
        #[arg(long, value_enum)]
        scramble: Option<ScrambleArg>,

        /// Report longest palindrome and longest zero run
        #[arg(long)]
        analyze: bool,

        /// Write the signal as JSON to this file
        #[arg(long)]
        json: Option<String>,
    },

    /// Digitize analog samples with pulse code modulation
    Pcm {
        /// Input JSON file (array of sample values)
        #[arg(short, long)]
        input: Option<String>,

        /// Inline comma-separated sample values
        #[arg(long, conflicts_with = "input")]
        samples: Option<String>,

        /// Code word width in bits
        #[arg(short, long)]
        bits_per_sample: u32,

        /// Output file for the symbol string
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Digitize analog samples with delta modulation
    Dm {
        /// Input JSON file (array of sample values)
        #[arg(short, long)]
        input: Option<String>,

        /// Inline comma-separated sample values
        #[arg(long, conflicts_with = "input")]
        samples: Option<String>,

        /// Output file for the symbol string
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run the read-only analytics over a symbol stream or a signal
    Analyze {
        /// Binary symbol string to search for palindromes
        #[arg(short, long)]
        symbols: Option<String>,

        /// Comma-separated signal levels (-1, 0, 1) to search for zero runs
        #[arg(long)]
        signal: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            symbols,
            code,
            scramble,
            analyze,
            json,
        } => commands::encode::execute(
            &symbols,
            code.into(),
            scramble.map(Into::into),
            analyze,
            json.as_deref(),
        ),

        Commands::Pcm {
            input,
            samples,
            bits_per_sample,
            output,
        } => commands::pcm::execute(
            input.as_deref(),
            samples.as_deref(),
            bits_per_sample,
            output.as_deref(),
        ),

        Commands::Dm {
            input,
            samples,
            output,
        } => commands::dm::execute(input.as_deref(), samples.as_deref(), output.as_deref()),

        Commands::Analyze { symbols, signal } => {
            commands::analyze::execute(symbols.as_deref(), signal.as_deref())
        }
    }
}
