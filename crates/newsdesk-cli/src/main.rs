//! Newsdesk CLI - category classification for a news CMS.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::Groups { json } => commands::groups::run(catalog, json),

        Commands::Classify {
            group,
            toggle,
            primary,
            draft,
            json,
        } => commands::classify::run(catalog, group, toggle, primary, draft, json),

        Commands::Filter { toggle, json } => commands::filter::run(catalog, toggle, json),

        Commands::Status { file, json } => commands::status::run(catalog, file, json),

        Commands::Serve { port } => commands::serve::run(catalog, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, defaulting to info.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
