mod commands;
mod compose;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "semcal")]
#[command(about = "Prepare seminar announcements: .ics invites and email drafts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter a seminar by hand through interactive prompts
    New,
    /// Fetch the seminar listing page and work on one of its entries
    Fetch {
        /// Listing page URL
        #[arg(long)]
        url: Option<String>,

        /// Print the parsed seminars as JSON and exit
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New => commands::new::run(),
        Commands::Fetch { url, json } => commands::fetch::run(url.as_deref(), json),
    }
}
