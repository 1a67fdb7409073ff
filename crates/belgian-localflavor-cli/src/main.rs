//! be-localflavor CLI - check and format Belgian form values from the shell.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{choices, nrn, postal_code};

#[derive(Parser)]
#[command(name = "be-localflavor")]
#[command(about = "Belgian National Register Numbers, postal codes and choice lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// National Register Number operations
    Nrn {
        #[command(subcommand)]
        command: NrnCommands,
    },
    /// Validate a postal code and show its province
    PostalCode {
        /// Postal code to validate
        value: String,
    },
    /// List province choices
    Provinces {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List region choices
    Regions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum NrnCommands {
    /// Validate numbers given as arguments, or one per line from a file or stdin
    Check {
        /// Numbers to check
        values: Vec<String>,
        /// Read numbers from this file instead (one per line)
        #[arg(long)]
        file: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any number is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Print the display form of a number
    Format {
        /// Number in any notation
        value: String,
        /// Format partial input as it would appear while typing
        #[arg(long)]
        partial: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nrn { command } => match command {
            NrnCommands::Check {
                values,
                file,
                json,
                strict,
            } => nrn::check(values, file, json, strict),
            NrnCommands::Format { value, partial } => nrn::format(value, partial),
        },
        Commands::PostalCode { value } => postal_code::run(value),
        Commands::Provinces { json } => choices::run(choices::Table::Provinces, json),
        Commands::Regions { json } => choices::run(choices::Table::Regions, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
