//! rf-discoverer CLI
//!
//! Ref admission scan over a code-hosting metadata snapshot.

use clap::Parser;
use rf_cli_common::init_logging;
use rf_discoverer::CancelFlag;
use rf_error::{ErrorCategory, classify_error};

mod args;
mod run;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout only carries admitted refs
    init_logging(args.log_level)?;

    let cancel = CancelFlag::new();
    run::register_signals(&cancel);

    let stats = match run::execute(&args, cancel) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Scan aborted: {e}");
            let code = match classify_error(&e) {
                ErrorCategory::Permanent => 2,
                ErrorCategory::Transient => 3,
                ErrorCategory::Cancelled => 130,
            };
            std::process::exit(code);
        }
    };

    eprintln!();
    eprintln!("Scan completed:");
    eprintln!("  Refs discovered: {}", stats.refs_discovered);
    eprintln!("  Refs filtered:   {}", stats.refs_filtered);
    eprintln!("  Refs output:     {}", stats.refs_output);
    eprintln!("  Errors:          {}", stats.error_count());

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:        {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }

    if stats.has_errors() {
        for error in &stats.errors {
            eprintln!("  Error: {}", error);
        }
        std::process::exit(4); // Partial failure
    }

    Ok(())
}
