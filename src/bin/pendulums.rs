//! Interactive oscillator calculator.
//!
//! Reads a number of oscillators and their parameters from stdin, then prints
//! cyclic frequency, oscillation period and their ratio for each.
//!
//! ```bash
//! cargo run --bin pendulums
//! printf '1\n2 A 9.8\n' | cargo run --bin pendulums -- --precision 10
//! printf '1\n2 A 9.8\n' | cargo run --bin pendulums -- --format json
//! ```

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use pendulum_physics::report::collect_reports;
use pendulum_physics::session::Session;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Output rendering for the report pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Four lines per oscillator followed by a blank line.
    Text,
    /// A JSON array of reports.
    Json,
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "pendulums")]
#[command(about = "Cyclic frequency and oscillation period of circuits and pendulums")]
struct Args {
    /// Significant digits in text output.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=17))]
    precision: u8,

    /// Rendering of the report pass.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum level of diagnostics written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), io::stderr())
        .with_precision(usize::from(args.precision));

    match args.format {
        OutputFormat::Text => {
            session.run()?;
        }
        OutputFormat::Json => {
            let oscillators = session.read_collection()?;
            drop(session);
            let reports = collect_reports(&oscillators);
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
