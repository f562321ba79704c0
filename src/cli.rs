use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::config::SeedConfig;

pub mod commands;

use commands::{init_database, seed};

#[derive(Parser)]
#[command(name = "helpdesk-seed")]
#[command(about = "Fill the helpdesk database with demo data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wipe the database and fill it with generated demo data
    ///
    /// Asks for confirmation before anything is deleted. After the data is
    /// written, a demo account is created through the API's signup endpoint.
    Seed(SeedConfig),
    /// Apply pending migrations without touching existing data
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL")]
        database_url: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Seed(config) => seed(&config).await,
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Exit status for a command line that could not be parsed.
///
/// `--help` and `--version` exit 0; missing settings and bad arguments exit 1.
pub fn parse_error_exit_code(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
