//! Car Dealer - Main entry point
//!
//! Loads the option catalog, then either runs the interactive order menu or
//! one of the non-interactive commands.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use car_dealer::cli::{Cli, Commands};
use car_dealer::{write_option_listing, Catalog, Model, Order, Session};

/// Initialize logging on stderr.
///
/// Defaults to warnings only so the menu output stays clean. `--verbose`
/// enables debug output for this crate; RUST_LOG overrides both.
fn init_logging(verbose: bool) {
    let default = if verbose { "warn,car_dealer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    let catalog = match Catalog::load_from_file(&cli.options) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load option catalog: {}", e);
            eprintln!("✗ Failed to load options from {}: {}", cli.options.display(), e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Run) => run_session(&catalog)?,
        Some(Commands::List) => list_options(&catalog)?,
        Some(Commands::Validate) => report_valid(&cli.options, &catalog),
        Some(Commands::Quote {
            model,
            option_names,
            json,
        }) => print_quote(&catalog, model, &option_names, json)?,
    }

    Ok(())
}

/// Run the interactive menu on the terminal
fn run_session(catalog: &Catalog) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, stdin.lock(), stdout.lock());
    session.run().context("Interactive session failed")?;
    Ok(())
}

fn list_options(catalog: &Catalog) -> Result<()> {
    let mut out = io::stdout().lock();
    write_option_listing(catalog, &mut out)?;
    out.flush()?;
    Ok(())
}

fn report_valid(path: &Path, catalog: &Catalog) {
    info!("Catalog validation successful");
    println!(
        "✓ {} is valid: {} options",
        path.display(),
        catalog.len()
    );
}

/// Price an order built from command-line arguments.
///
/// Options that cannot be added are skipped, exactly as the menu would.
fn print_quote(catalog: &Catalog, model: Model, options: &[String], json: bool) -> Result<()> {
    let mut order = Order::new();
    order.select_model(model);
    for name in options {
        let _ = order.add_option(catalog, name);
    }

    let summary = order.summary(catalog);
    if json {
        println!("{}", summary.to_json().context("Failed to serialize quote")?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
