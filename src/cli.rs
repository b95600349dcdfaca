use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Model;

/// Car Dealer - build and price a car order from the terminal
#[derive(Parser, Debug)]
#[command(name = "car-dealer")]
#[command(about = "Interactive car order configurator")]
#[command(version)]
pub struct Cli {
    /// Option catalog file, one `<price> <name>` entry per line
    #[arg(long, global = true, default_value = "options.txt")]
    pub options: PathBuf,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive order menu
    Run,
    /// Print the option catalog and exit
    List,
    /// Check that the option catalog loads
    Validate,
    /// Price an order without the interactive menu
    Quote {
        /// Model trim (E, L or X)
        #[arg(short, long)]
        model: Model,

        /// Option to add, by name (repeatable, case-insensitive)
        #[arg(short = 'o', long = "option")]
        option_names: Vec<String>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
