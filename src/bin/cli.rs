//! degrees - shortest co-star chain between two people.

use clap::Parser;
use degrees::cli::{run, Cli};
use degrees::DegreesError;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin().lock();
    let result = if cli.json {
        // Keep stdout parseable: prompts go to stderr.
        run(&cli, stdin, io::stderr(), io::stdout())
    } else {
        run(&cli, stdin, io::stdout(), io::stdout())
    };

    if let Err(e) = result {
        match e.downcast_ref::<DegreesError>() {
            Some(DegreesError::PersonNotFound { .. }) => eprintln!("{}", e),
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise warn, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "degrees=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
