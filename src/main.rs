use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

use compose_nobuild::compose::BuildStripper;

/// Strip build contexts from a Compose YAML file
#[derive(Parser)]
#[command(name = "compose-nobuild")]
#[command(
    about = "Remove `build` entries from a Compose file so it can run on image-only platforms",
    long_about = None
)]
struct Cli {
    /// Path to the Compose file to read
    input: PathBuf,

    /// Path to write the stripped Compose file
    output: PathBuf,

    /// Parse and report without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!(
        "stripping build contexts: {} -> {}",
        cli.input.display(),
        cli.output.display()
    );

    let stripper = BuildStripper::new(cli.dry_run);
    match stripper.strip_file(&cli.input, &cli.output) {
        Ok(result) => {
            if cli.dry_run {
                println!(
                    "Would write {} ({} build context(s) to remove)",
                    result.file.display(),
                    result.removed.len()
                );
            } else {
                println!("Wrote {} (removed build contexts)", result.file.display());
            }
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
