//! Serve command - expose the classification engine over HTTP.

use colored::Colorize;

use crate::server::{app, state::AppState};

pub fn run(catalog: Option<&str>, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(catalog)?;
    let state = AppState::new(catalog.clone());

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting classification API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Catalog:    {}", catalog.stats().source);
    println!("  Categories: {}", catalog.len());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })
}
