//! Tablebook: contacts and restaurant bookings from the command line.
//!
//! # Usage
//!
//! ```text
//! tablebook person add --name <n> --phone <p> --email <e> --address <a> [--tag <t>]... [--member]
//! tablebook person list
//! tablebook person find <keyword>...
//! tablebook book --phone <p> --date "2025-04-01 7:00 PM" --pax <n> [--remark <r>] [--tag <t>]...
//! tablebook bedit <id> [--date <d>] [--pax <n>] [--remark <r>]
//! tablebook bstatus <id> <status>
//! tablebook filter [--phone <p>] [--date yyyy-MM-dd] [--status <s>] [--format table|full|json]
//! tablebook list [--format table|full|json]
//! tablebook shell
//! ```

mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::AppCommand;
use session::Session;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tablebook",
    version,
    about = "Manage contacts and their restaurant bookings",
    long_about = None,
)]
struct Cli {
    /// Address book JSON file. Overrides ~/.tablebook/preferences.json.
    #[arg(long, global = true, env = "TABLEBOOK_DATA", value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    App(AppCommand),

    /// Read commands from stdin, one per line; filters persist between lines.
    Shell,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut session = Session::open(cli.data)?;
    match cli.command {
        Commands::App(command) => session.run(command),
        Commands::Shell => commands::shell::run(&mut session),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
