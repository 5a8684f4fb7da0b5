// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! checktitle - Conventional pull request title validator.

use checktitle::cli::{run, Cli, ExitStatus};
use checktitle::version;
use clap::{CommandFactory, FromArgMatches};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Parse CLI arguments
    let matches = Cli::command()
        .long_version(version::version_string())
        .get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI
    match run(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::ConfigurationError.into()
        }
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("checktitle=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
